use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use convos::{assemble, DEFAULT_MAX_ROUNDS};
use tracing::info;

use crate::http_server::ResponseResult;
use crate::AppState;

#[axum_macros::debug_handler]
pub(crate) async fn convos_get(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> ResponseResult<impl IntoResponse> {
    // Verify the handle before assembling.
    let user = state.twitter.show_user(&handle).await?;
    info!(handle = %user.screen_name, "assembling conversations");

    let set = assemble(&state.twitter, &handle, DEFAULT_MAX_ROUNDS).await?;

    Ok(Json(set))
}
