use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};

use super::{api, pages};
use crate::AppState;

pub(crate) fn make_router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home::home_page))
        .route("/convos/{handle}", get(api::convos::convos_get))
        .fallback(fallback)
}

async fn fallback() -> impl IntoResponse {
    StatusCode::NOT_FOUND
}
