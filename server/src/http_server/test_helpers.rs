use axum::{body::Body, http::Response, Router};

use crate::twitter::{TwitterClient, TwitterConfig};
use crate::{AppConfig, AppState};

pub(crate) fn create_test_app() -> Router {
    let state = AppState {
        app: AppConfig { port: 5010 },
        twitter: TwitterClient::new(&TwitterConfig {
            bearer_token: "test-bearer-token".to_string(),
        }),
    };

    super::routes::make_router().with_state(state)
}

pub(crate) async fn response_body_string(response: Response<Body>) -> String {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    String::from_utf8(body_bytes.to_vec()).unwrap()
}
