//! Post write models and lifecycle events.

use homepages_core::post::{Post, PostStatus};
use homepages_core::tracker::StatusTransition;
use homepages_core::types::{DocumentId, Timestamp};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Create / update DTOs
// ---------------------------------------------------------------------------

/// Input for [`MemoryPostStore::insert`](crate::MemoryPostStore::insert).
#[derive(Debug, Clone, Deserialize)]
pub struct NewPost {
    pub post_type: String,
    #[serde(default = "default_new_status")]
    pub status: PostStatus,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub featured_image: Option<DocumentId>,
    /// Publication date; defaults to the insertion time.
    pub published_at: Option<Timestamp>,
}

fn default_new_status() -> PostStatus {
    PostStatus::Draft
}

impl NewPost {
    pub fn new(post_type: &str, status: PostStatus, title: &str) -> Self {
        Self {
            post_type: post_type.to_string(),
            status,
            title: title.to_string(),
            content: String::new(),
            featured_image: None,
            published_at: None,
        }
    }

    pub fn published_at(mut self, at: Timestamp) -> Self {
        self.published_at = Some(at);
        self
    }
}

/// Partial update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostUpdate {
    pub status: Option<PostStatus>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub featured_image: Option<DocumentId>,
    pub published_at: Option<Timestamp>,
}

// ---------------------------------------------------------------------------
// Revisions
// ---------------------------------------------------------------------------

/// Snapshot of a post taken on every write.
#[derive(Debug, Clone, Serialize)]
pub struct Revision {
    pub post_id: DocumentId,
    /// 1-based, in write order.
    pub number: u32,
    pub status: PostStatus,
    pub title: String,
    pub content: String,
    pub recorded_at: Timestamp,
}

impl Revision {
    pub(crate) fn of(post: &Post, number: u32, recorded_at: Timestamp) -> Self {
        Self {
            post_id: post.id,
            number,
            status: post.status,
            title: post.title.clone(),
            content: post.content.clone(),
            recorded_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Lifecycle events
// ---------------------------------------------------------------------------

/// Something the host must dispatch to its hooks after a write.
///
/// Writes report events in dispatch order: the status transition first,
/// then the save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    Transition(StatusTransition),
    Saved(DocumentId),
}

/// Result of a post write.
#[derive(Debug, Clone)]
pub struct WriteOutcome {
    pub post: Post,
    pub events: Vec<LifecycleEvent>,
}
