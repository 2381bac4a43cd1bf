use std::net::SocketAddr;

use color_eyre::eyre::WrapErr;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};

use crate::AppState;

pub(crate) mod api {
    pub mod convos;
}

pub(crate) mod pages {
    pub mod home;
}

pub(crate) mod errors;
mod routes;
mod templates;

#[cfg(test)]
mod test_helpers;

pub(crate) use errors::ResponseResult;

pub(crate) async fn run_axum(state: AppState) -> color_eyre::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], state.app.port));

    let app = routes::make_router().with_state(state).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().include_headers(true))
            .on_response(DefaultOnResponse::new().include_headers(true)),
    );

    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err("Failed to open port")?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .wrap_err("Failed to run server")
}
