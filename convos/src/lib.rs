use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod assemble;

pub use assemble::{assemble, partition, ConversationSet};

pub type PostId = u64;

/// Provider ceiling for batch lookups (posts and profiles alike).
pub const LOOKUP_BATCH: usize = 100;

/// How many parent-resolution rounds `assemble` walks before giving up on
/// replies whose ancestors keep pointing further back.
pub const DEFAULT_MAX_ROUNDS: usize = 10;

/// A single provider post. Only the fields the assembler needs are typed;
/// everything else the provider sent rides along in `rest` and is serialized
/// back out unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    #[serde(default)]
    pub in_reply_to_status_id: Option<PostId>,
    pub user: Author,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Post {
    /// The parent's id, if this post is a reply.
    pub fn parent_id(&self) -> Option<PostId> {
        self.in_reply_to_status_id
    }
}

/// The author record embedded in every post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub screen_name: String,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// A full profile record, as returned by the provider's user lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub screen_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image_url_https: Option<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl User {
    /// The avatar URL without the provider's `_normal` thumbnail suffix,
    /// i.e. the full-resolution image.
    pub fn full_size_avatar(&self) -> Option<String> {
        self.profile_image_url_https
            .as_ref()
            .map(|url| url.replace("_normal", ""))
    }
}

/// Where posts come from. `assemble` is written against this seam so the
/// provider client can be handed in explicitly and swapped out in tests.
#[async_trait]
pub trait PostSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Most recent posts authored by `handle`. Provider-capped at 200 per
    /// call; retweets excluded, replies included.
    async fn recent_posts(&self, handle: &str) -> Result<Vec<Post>, Self::Error>;

    /// Most recent posts mentioning `handle`. Provider-capped at 100 per
    /// call.
    async fn recent_mentions(&self, handle: &str) -> Result<Vec<Post>, Self::Error>;

    /// Batch status lookup. Callers pass at most [`LOOKUP_BATCH`] ids; ids
    /// the provider can no longer serve are silently absent from the result.
    async fn posts_by_id(&self, ids: &[PostId]) -> Result<Vec<Post>, Self::Error>;

    /// Batch profile lookup. Callers pass at most [`LOOKUP_BATCH`] handles.
    async fn profiles(&self, handles: &[String]) -> Result<Vec<User>, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_round_trips_unmodeled_provider_fields() {
        let raw = serde_json::json!({
            "id": 850_007_368_138_018_817_u64,
            "id_str": "850007368138018817",
            "text": "hello from the timeline",
            "created_at": "Thu Apr 06 15:28:43 +0000 2017",
            "in_reply_to_status_id": null,
            "user": {
                "screen_name": "alice",
                "name": "Alice",
                "verified": false
            },
            "retweet_count": 3
        });

        let post: Post = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(post.id, 850_007_368_138_018_817);
        assert_eq!(post.in_reply_to_status_id, None);
        assert_eq!(post.user.screen_name, "alice");
        assert_eq!(post.rest["id_str"], "850007368138018817");
        assert_eq!(post.rest["text"], "hello from the timeline");
        assert_eq!(post.user.rest["verified"], false);

        let back = serde_json::to_value(&post).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn missing_reply_field_reads_as_no_parent() {
        let post: Post = serde_json::from_value(serde_json::json!({
            "id": 7,
            "user": { "screen_name": "bob" }
        }))
        .unwrap();

        assert_eq!(post.parent_id(), None);
    }

    #[test]
    fn full_size_avatar_strips_thumbnail_suffix() {
        let user: User = serde_json::from_value(serde_json::json!({
            "screen_name": "alice",
            "profile_image_url_https": "https://pbs.twimg.com/profile_images/1/alice_normal.jpg"
        }))
        .unwrap();

        assert_eq!(
            user.full_size_avatar().unwrap(),
            "https://pbs.twimg.com/profile_images/1/alice.jpg"
        );
    }

    #[test]
    fn user_without_avatar_serializes_without_null_field() {
        let user: User = serde_json::from_value(serde_json::json!({
            "screen_name": "ghost",
            "followers_count": 12
        }))
        .unwrap();

        assert_eq!(user.full_size_avatar(), None);

        let back = serde_json::to_value(&user).unwrap();
        assert!(back.get("profile_image_url_https").is_none());
        assert_eq!(back["followers_count"], 12);
    }
}
