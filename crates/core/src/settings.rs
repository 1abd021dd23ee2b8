//! Durable settings read or written by the homepage logic.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::CoreError;
use crate::ports::SettingsStore;
use crate::types::{coerce_bool, coerce_document_id, DocumentId, NO_DOCUMENT};

/// Host setting selecting what the root URL shows.
pub const SHOW_ON_FRONT_KEY: &str = "show_on_front";

/// Host setting naming the fixed front page.
pub const PAGE_ON_FRONT_KEY: &str = "page_on_front";

/// Host setting for the default listing page size.
pub const POSTS_PER_PAGE_KEY: &str = "posts_per_page";

/// Setting recording that a homepage has been published at least once.
pub const HAS_PUBLISHED_HOMEPAGE_KEY: &str = "has_published_homepage";

/// The host's page size when `posts_per_page` is unset.
pub const DEFAULT_POSTS_PER_PAGE: u32 = 10;

// ---------------------------------------------------------------------------
// FrontPageMode
// ---------------------------------------------------------------------------

/// Whether the root URL shows a latest-first listing or a fixed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontPageMode {
    Posts,
    Page,
}

impl FrontPageMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Posts => "posts",
            Self::Page => "page",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "posts" => Ok(Self::Posts),
            "page" => Ok(Self::Page),
            _ => Err(CoreError::Validation(format!(
                "Invalid show_on_front: '{s}'. Must be one of: posts, page"
            ))),
        }
    }
}

impl std::fmt::Display for FrontPageMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ReadingSettings
// ---------------------------------------------------------------------------

/// Snapshot of the host's reading settings, taken once per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingSettings {
    /// The configured mode, exactly as stored.
    pub show_on_front: FrontPageMode,
    pub page_on_front: DocumentId,
    pub posts_per_page: u32,
}

impl Default for ReadingSettings {
    fn default() -> Self {
        Self {
            show_on_front: FrontPageMode::Posts,
            page_on_front: NO_DOCUMENT,
            posts_per_page: DEFAULT_POSTS_PER_PAGE,
        }
    }
}

impl ReadingSettings {
    /// Read the reading settings, falling back to host defaults for anything
    /// missing or malformed.
    pub fn load(store: &dyn SettingsStore) -> Self {
        let show_on_front = store
            .get(SHOW_ON_FRONT_KEY)
            .and_then(|v| v.as_str().and_then(|s| FrontPageMode::from_str(s).ok()))
            .unwrap_or(FrontPageMode::Posts);

        let page_on_front = store
            .get(PAGE_ON_FRONT_KEY)
            .map(|v| coerce_document_id(&v))
            .unwrap_or(NO_DOCUMENT);

        let posts_per_page = store
            .get(POSTS_PER_PAGE_KEY)
            .map(|v| coerce_document_id(&v))
            .and_then(|n| u32::try_from(n).ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_POSTS_PER_PAGE);

        Self {
            show_on_front,
            page_on_front,
            posts_per_page,
        }
    }

    /// Write all three settings back to the store.
    pub fn save(&self, store: &dyn SettingsStore) {
        store.update(SHOW_ON_FRONT_KEY, json!(self.show_on_front.as_str()));
        store.update(PAGE_ON_FRONT_KEY, json!(self.page_on_front));
        store.update(POSTS_PER_PAGE_KEY, json!(self.posts_per_page));
    }

    /// The mode the host actually serves.
    ///
    /// A static front page without a page selected behaves as the listing.
    pub fn effective_mode(&self) -> FrontPageMode {
        match self.show_on_front {
            FrontPageMode::Page if self.page_on_front != NO_DOCUMENT => FrontPageMode::Page,
            _ => FrontPageMode::Posts,
        }
    }
}

// ---------------------------------------------------------------------------
// ActivationLatch
// ---------------------------------------------------------------------------

/// One-way durable flag: "a homepage has been published at least once".
///
/// The type exposes no operation that clears it.
#[derive(Clone)]
pub struct ActivationLatch {
    settings: Arc<dyn SettingsStore>,
}

impl ActivationLatch {
    pub fn new(settings: Arc<dyn SettingsStore>) -> Self {
        Self { settings }
    }

    pub fn is_set(&self) -> bool {
        self.settings
            .get(HAS_PUBLISHED_HOMEPAGE_KEY)
            .is_some_and(|v| coerce_bool(&v))
    }

    /// Set the flag. Re-setting an already-set latch is a no-op.
    pub fn set(&self) {
        if self.is_set() {
            return;
        }
        if self.settings.update(HAS_PUBLISHED_HOMEPAGE_KEY, json!(true)) {
            tracing::info!(key = HAS_PUBLISHED_HOMEPAGE_KEY, "Homepage activation latch set");
        } else {
            tracing::warn!(key = HAS_PUBLISHED_HOMEPAGE_KEY, "Settings store refused latch write");
        }
    }
}

impl std::fmt::Debug for ActivationLatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivationLatch")
            .field("is_set", &self.is_set())
            .finish()
    }
}
