//! Host document types as seen by the homepage logic.
//!
//! The host owns every document. This crate only reads identifiers, types and
//! statuses, and occasionally hands a whole [`Post`] back to the host when it
//! replaces a result list.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DocumentId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Slug of the content type managed by this plugin.
pub const HOMEPAGE_POST_TYPE: &str = "homepage";

/// The host's default content type when a query does not name one.
pub const DEFAULT_POST_TYPE: &str = "post";

/// The host's content type for standalone pages.
pub const PAGE_POST_TYPE: &str = "page";

// ---------------------------------------------------------------------------
// PostStatus
// ---------------------------------------------------------------------------

/// Publication status of a host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PostStatus {
    /// Pseudo-status of a document that did not exist before the transition.
    New,
    AutoDraft,
    Draft,
    Pending,
    Future,
    Private,
    Publish,
    Trash,
    Inherit,
}

impl PostStatus {
    /// Return the wire-format string for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::AutoDraft => "auto-draft",
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Future => "future",
            Self::Private => "private",
            Self::Publish => "publish",
            Self::Trash => "trash",
            Self::Inherit => "inherit",
        }
    }

    /// Parse from a wire-format string.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "new" => Ok(Self::New),
            "auto-draft" => Ok(Self::AutoDraft),
            "draft" => Ok(Self::Draft),
            "pending" => Ok(Self::Pending),
            "future" => Ok(Self::Future),
            "private" => Ok(Self::Private),
            "publish" => Ok(Self::Publish),
            "trash" => Ok(Self::Trash),
            "inherit" => Ok(Self::Inherit),
            _ => Err(CoreError::Validation(format!(
                "Invalid post_status: '{s}'. Must be one of: new, auto-draft, draft, \
                 pending, future, private, publish, trash, inherit"
            ))),
        }
    }

    /// Statuses matched by the host's `any` status filter.
    ///
    /// Trash and auto-drafts are never part of `any`; neither are the
    /// pseudo-statuses `new` and `inherit`.
    pub fn any() -> Vec<Self> {
        vec![
            Self::Draft,
            Self::Pending,
            Self::Future,
            Self::Private,
            Self::Publish,
        ]
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Post
// ---------------------------------------------------------------------------

/// A host document, as returned by the host's query engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: DocumentId,
    pub post_type: String,
    pub status: PostStatus,
    pub title: String,
    pub content: String,
    /// Identifier of the attachment used as featured image, if any.
    pub featured_image: Option<DocumentId>,
    /// Publication date; drives the host's default recency ordering.
    pub published_at: Timestamp,
    pub modified_at: Timestamp,
}

impl Post {
    pub fn is_homepage(&self) -> bool {
        self.post_type == HOMEPAGE_POST_TYPE
    }
}
