use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{Post, PostId, PostSource, User, LOOKUP_BATCH};

/// Everything one invocation produces: thread roots, the parent-id keyed
/// reply buckets, and a profile record for every author seen. Serializes to
/// the `{roots, convos, users}` JSON object the web endpoint returns; map
/// keys come out as decimal strings, which is what consumers index by.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationSet {
    pub roots: Vec<Post>,
    pub convos: BTreeMap<PostId, Vec<Post>>,
    pub users: Vec<User>,
}

/// Fetch `handle`'s recent posts and mentions, resolve missing parents for
/// up to `max_rounds` rounds, and regroup the lot into conversations.
#[instrument(skip(source), err)]
pub async fn assemble<S>(
    source: &S,
    handle: &str,
    max_rounds: usize,
) -> Result<ConversationSet, S::Error>
where
    S: PostSource + Sync,
{
    let mut posts = source.recent_posts(handle).await?;
    posts.extend(source.recent_mentions(handle).await?);

    // The same post can arrive via both the timeline and the mention search;
    // first occurrence wins so it lands in exactly one bucket later.
    let mut seen: HashSet<PostId> = HashSet::with_capacity(posts.len());
    posts.retain(|post| seen.insert(post.id));

    // Ids we either hold or have already asked for. An id the provider
    // declined to return (deleted or protected post) stays here so no later
    // round asks for it again.
    let mut requested = seen.clone();

    let mut round_start = 0;
    for round in 0..max_rounds {
        let wanted: Vec<PostId> = posts[round_start..]
            .iter()
            .filter_map(Post::parent_id)
            .filter(|id| requested.insert(*id))
            .collect();

        if wanted.is_empty() {
            break;
        }
        debug!(round, missing = wanted.len(), "resolving missing parents");

        round_start = posts.len();
        for chunk in wanted.chunks(LOOKUP_BATCH) {
            let parents = source.posts_by_id(chunk).await?;
            posts.extend(parents.into_iter().filter(|post| seen.insert(post.id)));
        }
    }

    let handles: BTreeSet<String> = posts
        .iter()
        .map(|post| post.user.screen_name.clone())
        .collect();
    let handles: Vec<String> = handles.into_iter().collect();

    let mut users = Vec::with_capacity(handles.len());
    for chunk in handles.chunks(LOOKUP_BATCH) {
        users.extend(source.profiles(chunk).await?);
    }

    let (roots, convos) = partition(posts);

    Ok(ConversationSet {
        roots,
        convos,
        users,
    })
}

/// Split a working set into thread roots and a parent-id → direct-replies
/// map. A post is a root when it has no parent or its parent is not in the
/// set.
pub fn partition(posts: Vec<Post>) -> (Vec<Post>, BTreeMap<PostId, Vec<Post>>) {
    let ids: HashSet<PostId> = posts.iter().map(|post| post.id).collect();

    let mut roots = Vec::new();
    let mut convos: BTreeMap<PostId, Vec<Post>> = BTreeMap::new();

    for post in posts {
        match post.parent_id().filter(|parent| ids.contains(parent)) {
            Some(parent) => convos.entry(parent).or_default().push(post),
            None => roots.push(post),
        }
    }

    (roots, convos)
}
