use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::twitter::TwitterError;

pub(crate) type ResponseResult<T = axum::response::Response> = Result<T, ServerError>;

pub(crate) struct ServerError(pub(crate) color_eyre::Report, pub(crate) StatusCode);

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(error = ?self.0, status = %self.1, "request failed");

        (self.1, self.0.to_string()).into_response()
    }
}

impl From<color_eyre::Report> for ServerError {
    fn from(err: color_eyre::Report) -> Self {
        ServerError(err, StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<TwitterError> for ServerError {
    fn from(err: TwitterError) -> Self {
        let status = match &err {
            TwitterError::NotFound => StatusCode::NOT_FOUND,
            TwitterError::RateLimited => StatusCode::SERVICE_UNAVAILABLE,
            TwitterError::Auth { .. } | TwitterError::Api { .. } | TwitterError::Request(_) => {
                StatusCode::BAD_GATEWAY
            }
            TwitterError::Malformed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        ServerError(color_eyre::Report::new(err), status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_failures_map_to_the_right_statuses() {
        let cases = [
            (TwitterError::NotFound, StatusCode::NOT_FOUND),
            (TwitterError::RateLimited, StatusCode::SERVICE_UNAVAILABLE),
            (
                TwitterError::Auth {
                    status: reqwest::StatusCode::UNAUTHORIZED,
                },
                StatusCode::BAD_GATEWAY,
            ),
            (
                TwitterError::Api {
                    status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                    body: "oops".to_string(),
                },
                StatusCode::BAD_GATEWAY,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(ServerError::from(err).1, expected);
        }
    }
}
