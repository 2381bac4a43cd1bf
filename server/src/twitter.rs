use async_trait::async_trait;
use convos::{Post, PostId, PostSource, User};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::instrument;

use color_eyre::eyre::Context;

const TWITTER_API_BASE: &str = "https://api.twitter.com/1.1";

/// Provider maximum for one timeline call.
const TIMELINE_COUNT: u32 = 200;
/// Provider maximum for one search call.
const SEARCH_COUNT: u32 = 100;

#[derive(Debug, Clone)]
pub struct TwitterConfig {
    pub bearer_token: String,
}

impl TwitterConfig {
    #[instrument(name = "TwitterConfig::from_env")]
    pub fn from_env() -> color_eyre::Result<Self> {
        Ok(Self {
            bearer_token: std::env::var("TWITTER_BEARER_TOKEN")
                .context("TWITTER_BEARER_TOKEN env var missing")?,
        })
    }
}

/// How a provider call failed. The HTTP layer maps each case to a response
/// status.
#[derive(Debug, Error)]
pub enum TwitterError {
    #[error("no such handle or post")]
    NotFound,
    #[error("twitter rejected our credentials ({status})")]
    Auth { status: StatusCode },
    #[error("twitter rate limit exhausted")]
    RateLimited,
    #[error("twitter returned {status}: {body}")]
    Api { status: StatusCode, body: String },
    #[error("failed to reach twitter")]
    Request(#[source] reqwest::Error),
    #[error("could not decode twitter's response")]
    Malformed(#[source] reqwest::Error),
}

/// Twitter API v1.1 client. Every call authenticates with an app-only bearer
/// token.
#[derive(Debug, Clone)]
pub struct TwitterClient {
    client: reqwest::Client,
    bearer_token: String,
}

impl TwitterClient {
    pub fn new(config: &TwitterConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            bearer_token: config.bearer_token.clone(),
        }
    }

    /// Full profile for a single handle.
    #[instrument(skip(self))]
    pub async fn show_user(&self, handle: &str) -> Result<User, TwitterError> {
        self.get_json("users/show.json", &[("screen_name", handle.to_string())])
            .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, TwitterError> {
        let url = format!("{TWITTER_API_BASE}/{endpoint}");

        let response = self
            .client
            .get(&url)
            .query(query)
            .bearer_auth(&self.bearer_token)
            .send()
            .await
            .map_err(TwitterError::Request)?;

        check_status(response)
            .await?
            .json::<T>()
            .await
            .map_err(TwitterError::Malformed)
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, TwitterError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::NOT_FOUND => Err(TwitterError::NotFound),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(TwitterError::Auth { status }),
        StatusCode::TOO_MANY_REQUESTS => Err(TwitterError::RateLimited),
        _ => {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read response body".to_string());
            Err(TwitterError::Api { status, body })
        }
    }
}

/// Envelope around search results.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    statuses: Vec<Post>,
}

#[async_trait]
impl PostSource for TwitterClient {
    type Error = TwitterError;

    #[instrument(skip(self))]
    async fn recent_posts(&self, handle: &str) -> Result<Vec<Post>, TwitterError> {
        self.get_json(
            "statuses/user_timeline.json",
            &[
                ("screen_name", handle.to_string()),
                ("count", TIMELINE_COUNT.to_string()),
                ("include_rts", "false".to_string()),
                ("exclude_replies", "false".to_string()),
            ],
        )
        .await
    }

    #[instrument(skip(self))]
    async fn recent_mentions(&self, handle: &str) -> Result<Vec<Post>, TwitterError> {
        let search: SearchResponse = self
            .get_json(
                "search/tweets.json",
                &[
                    ("q", format!("@{handle}")),
                    ("count", SEARCH_COUNT.to_string()),
                    ("result_type", "recent".to_string()),
                ],
            )
            .await?;

        Ok(search.statuses)
    }

    #[instrument(skip(self, ids), fields(ids = ids.len()))]
    async fn posts_by_id(&self, ids: &[PostId]) -> Result<Vec<Post>, TwitterError> {
        let ids = ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");

        self.get_json("statuses/lookup.json", &[("id", ids)]).await
    }

    #[instrument(skip(self, handles), fields(handles = handles.len()))]
    async fn profiles(&self, handles: &[String]) -> Result<Vec<User>, TwitterError> {
        self.get_json("users/lookup.json", &[("screen_name", handles.join(","))])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_response_unwraps_the_statuses_envelope() {
        let json = serde_json::json!({
            "statuses": [
                {
                    "id": 2,
                    "id_str": "2",
                    "text": "@alice hi",
                    "in_reply_to_status_id": 1,
                    "user": { "screen_name": "bob" }
                }
            ],
            "search_metadata": { "completed_in": 0.05 }
        });

        let search: SearchResponse = serde_json::from_value(json).unwrap();
        assert_eq!(search.statuses.len(), 1);
        assert_eq!(search.statuses[0].id, 2);
        assert_eq!(search.statuses[0].parent_id(), Some(1));
        assert_eq!(search.statuses[0].user.screen_name, "bob");
    }

    #[test]
    fn api_errors_carry_status_and_body() {
        let err = TwitterError::Api {
            status: StatusCode::IM_A_TEAPOT,
            body: "nope".to_string(),
        };

        assert_eq!(err.to_string(), "twitter returned 418 I'm a teapot: nope");
    }
}
