//! Resolution of "the latest homepage", backed by a short-lived cache entry.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::context::RequestContext;
use crate::error::CoreError;
use crate::ports::{DocumentStore, TransientCache};
use crate::post::{PostStatus, HOMEPAGE_POST_TYPE};
use crate::query::QueryDescription;
use crate::types::{coerce_document_id, DocumentId, NO_DOCUMENT};

/// Cache key holding the latest homepage id.
pub const LATEST_ID_CACHE_KEY: &str = "homepage_latest_id";

/// How long a resolved id stays cached.
pub const LATEST_ID_CACHE_TTL: Duration = Duration::from_secs(15 * 60);

// ---------------------------------------------------------------------------
// StatusPolicy
// ---------------------------------------------------------------------------

/// Which homepage statuses count as candidates for "latest".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusPolicy {
    /// Only published homepages.
    #[default]
    Published,
    /// Any non-trashed homepage, drafts included.
    Any,
}

impl StatusPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Published => "publish",
            Self::Any => "any",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "publish" | "published" => Ok(Self::Published),
            "any" => Ok(Self::Any),
            _ => Err(CoreError::Validation(format!(
                "Invalid status policy: '{s}'. Must be one of: publish, any"
            ))),
        }
    }

    pub fn statuses(&self) -> Vec<PostStatus> {
        match self {
            Self::Published => vec![PostStatus::Publish],
            Self::Any => PostStatus::any(),
        }
    }
}

impl std::fmt::Display for StatusPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LatestResolver
// ---------------------------------------------------------------------------

/// Finds the latest homepage id.
///
/// Repeated calls within the cache lifetime never reach the document store.
/// The cache entry is the only state; there is no per-request memoization.
pub struct LatestResolver {
    cache: Arc<dyn TransientCache>,
    store: Arc<dyn DocumentStore>,
    policy: StatusPolicy,
    ttl: Duration,
}

impl LatestResolver {
    pub fn new(cache: Arc<dyn TransientCache>, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            cache,
            store,
            policy: StatusPolicy::default(),
            ttl: LATEST_ID_CACHE_TTL,
        }
    }

    pub fn with_policy(mut self, policy: StatusPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn policy(&self) -> StatusPolicy {
        self.policy
    }

    /// Return the latest homepage id, or [`NO_DOCUMENT`] when none exists.
    ///
    /// A preview request carrying an explicit `p` wins outright and is not
    /// checked against publication status.
    pub fn resolve_latest_id(&self, ctx: &RequestContext) -> DocumentId {
        if let Some(id) = ctx.preview_id() {
            tracing::debug!(homepage_id = id, "Using previewed homepage");
            return id;
        }

        if let Some(cached) = self.cache.get(LATEST_ID_CACHE_KEY) {
            let id = coerce_document_id(&cached);
            tracing::debug!(homepage_id = id, "Latest homepage cache hit");
            return id;
        }

        let id = self
            .store
            .query(&self.latest_query())
            .first()
            .map(|post| post.id)
            .unwrap_or(NO_DOCUMENT);

        if !self.cache.set(LATEST_ID_CACHE_KEY, json!(id), self.ttl) {
            tracing::warn!(key = LATEST_ID_CACHE_KEY, "Cache refused latest homepage id");
        }
        tracing::debug!(homepage_id = id, policy = %self.policy, "Latest homepage cache miss");

        id
    }

    /// The lookup run on a cache miss.
    pub fn latest_query(&self) -> QueryDescription {
        QueryDescription {
            post_type: Some(HOMEPAGE_POST_TYPE.to_string()),
            post_status: Some(self.policy.statuses()),
            posts_per_page: Some(1),
            no_found_rows: true,
            ..QueryDescription::secondary()
        }
    }

    /// Drop the cached id. Returns `true` when an entry was removed.
    pub fn forget(&self) -> bool {
        self.cache.delete(LATEST_ID_CACHE_KEY)
    }
}
