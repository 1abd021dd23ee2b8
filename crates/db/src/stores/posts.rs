//! Posts, revisions and registered content types.
//!
//! Writes return the lifecycle events the host has to dispatch; the store
//! itself never calls back into plugin code.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use homepages_core::error::CoreError;
use homepages_core::ports::{ContentTypeRegistry, DocumentStore};
use homepages_core::post::{Post, PostStatus, DEFAULT_POST_TYPE, PAGE_POST_TYPE};
use homepages_core::query::QueryDescription;
use homepages_core::registrar::ContentTypeDefinition;
use homepages_core::tracker::StatusTransition;
use homepages_core::types::DocumentId;

use crate::clock::{system_clock, Clock};
use crate::models::post::{LifecycleEvent, NewPost, PostUpdate, Revision, WriteOutcome};

/// Content types every site has before any registration.
const BUILTIN_POST_TYPES: &[&str] = &[DEFAULT_POST_TYPE, PAGE_POST_TYPE];

pub struct MemoryPostStore {
    posts: DashMap<DocumentId, Post>,
    revisions: DashMap<DocumentId, Vec<Revision>>,
    post_types: DashMap<String, ContentTypeDefinition>,
    next_id: AtomicU64,
    clock: Clock,
}

impl Default for MemoryPostStore {
    fn default() -> Self {
        Self::with_clock(system_clock())
    }
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self {
            posts: DashMap::new(),
            revisions: DashMap::new(),
            post_types: DashMap::new(),
            next_id: AtomicU64::new(1),
            clock,
        }
    }

    pub fn is_known_type(&self, post_type: &str) -> bool {
        BUILTIN_POST_TYPES.contains(&post_type) || self.post_types.contains_key(post_type)
    }

    // -----------------------------------------------------------------------
    // Writes
    // -----------------------------------------------------------------------

    /// Create a post. Reports a transition out of `new`, then the save.
    pub fn insert(&self, input: NewPost) -> Result<WriteOutcome, CoreError> {
        if !self.is_known_type(&input.post_type) {
            return Err(CoreError::Validation(format!(
                "Unknown post type '{}'",
                input.post_type
            )));
        }

        let now = (self.clock)();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let post = Post {
            id,
            post_type: input.post_type,
            status: input.status,
            title: input.title,
            content: input.content,
            featured_image: input.featured_image,
            published_at: input.published_at.unwrap_or(now),
            modified_at: now,
        };

        self.posts.insert(id, post.clone());
        self.record_revision(&post);
        tracing::debug!(
            post_id = id,
            post_type = %post.post_type,
            status = %post.status,
            "Post inserted"
        );

        Ok(self.outcome(post, PostStatus::New))
    }

    /// Apply a partial update. Reports the status transition (which may be
    /// a no-op `publish -> publish`), then the save.
    pub fn update(&self, id: DocumentId, changes: PostUpdate) -> Result<WriteOutcome, CoreError> {
        let now = (self.clock)();
        let (post, old_status) = {
            let mut entry = self
                .posts
                .get_mut(&id)
                .ok_or(CoreError::NotFound { entity: "Post", id })?;
            let post = entry.value_mut();
            let old_status = post.status;

            if let Some(status) = changes.status {
                post.status = status;
            }
            if let Some(title) = changes.title {
                post.title = title;
            }
            if let Some(content) = changes.content {
                post.content = content;
            }
            if let Some(image) = changes.featured_image {
                post.featured_image = Some(image);
            }
            let first_publication =
                post.status == PostStatus::Publish && old_status != PostStatus::Publish;
            match changes.published_at {
                Some(at) => post.published_at = at,
                // First publication takes the current time as its date.
                None if first_publication => post.published_at = now,
                None => {}
            }
            post.modified_at = now;

            (post.clone(), old_status)
        };

        self.record_revision(&post);
        tracing::debug!(post_id = id, from = %old_status, to = %post.status, "Post updated");

        Ok(self.outcome(post, old_status))
    }

    /// Move a post to another status.
    pub fn transition(
        &self,
        id: DocumentId,
        status: PostStatus,
    ) -> Result<WriteOutcome, CoreError> {
        self.update(
            id,
            PostUpdate {
                status: Some(status),
                ..PostUpdate::default()
            },
        )
    }

    /// Revisions of a post, oldest first.
    pub fn revisions(&self, id: DocumentId) -> Vec<Revision> {
        self.revisions
            .get(&id)
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    fn record_revision(&self, post: &Post) {
        let recorded_at = (self.clock)();
        let mut history = self.revisions.entry(post.id).or_default();
        let number = history.len() as u32 + 1;
        history.push(Revision::of(post, number, recorded_at));
    }

    fn outcome(&self, post: Post, old_status: PostStatus) -> WriteOutcome {
        let events = vec![
            LifecycleEvent::Transition(StatusTransition {
                post_id: post.id,
                post_type: post.post_type.clone(),
                old_status,
                new_status: post.status,
            }),
            LifecycleEvent::Saved(post.id),
        ];
        WriteOutcome { post, events }
    }
}

// ---------------------------------------------------------------------------
// Ports
// ---------------------------------------------------------------------------

impl DocumentStore for MemoryPostStore {
    fn query(&self, query: &QueryDescription) -> Vec<Post> {
        let default_type = if query.page_id.is_some() {
            PAGE_POST_TYPE
        } else {
            DEFAULT_POST_TYPE
        };
        let post_type = query.post_type.as_deref().unwrap_or(default_type);
        let statuses = query
            .post_status
            .clone()
            .unwrap_or_else(|| vec![PostStatus::Publish]);
        let wanted_id = query.p.or(query.page_id);

        let mut matched: Vec<Post> = self
            .posts
            .iter()
            .map(|entry| entry.value().clone())
            .filter(|post| post.post_type == post_type && statuses.contains(&post.status))
            .filter(|post| wanted_id.map_or(true, |id| post.id == id))
            .collect();

        matched.sort_by(|a, b| (b.published_at, b.id).cmp(&(a.published_at, a.id)));

        match query.posts_per_page {
            Some(per_page) => {
                let offset = (query.paged.max(1) - 1) as usize * per_page as usize;
                matched
                    .into_iter()
                    .skip(offset)
                    .take(per_page as usize)
                    .collect()
            }
            None => matched,
        }
    }

    fn get_post(&self, id: DocumentId) -> Option<Post> {
        self.posts.get(&id).map(|entry| entry.value().clone())
    }
}

impl ContentTypeRegistry for MemoryPostStore {
    fn register_post_type(&self, definition: ContentTypeDefinition) -> Result<(), CoreError> {
        if definition.name.is_empty() {
            return Err(CoreError::Validation("Post type name must not be empty".into()));
        }
        if BUILTIN_POST_TYPES.contains(&definition.name) {
            return Err(CoreError::Validation(format!(
                "Post type '{}' is built in",
                definition.name
            )));
        }

        tracing::info!(post_type = definition.name, "Post type registered");
        self.post_types
            .insert(definition.name.to_string(), definition);
        Ok(())
    }
}
