use color_eyre::Result;

use crate::{http_server, AppState};

pub(crate) async fn serve() -> Result<()> {
    let app_state = AppState::from_env()?;

    http_server::run_axum(app_state).await
}
