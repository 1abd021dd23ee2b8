//! In-crate fakes for the host ports.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{TimeZone, Utc};

use crate::ports::{DocumentStore, SettingsStore, TransientCache};
use crate::post::{Post, PostStatus, DEFAULT_POST_TYPE};
use crate::query::QueryDescription;
use crate::types::DocumentId;

#[derive(Default)]
pub(crate) struct FakeSettings {
    pub(crate) values: Mutex<HashMap<String, serde_json::Value>>,
    pub(crate) writes: Mutex<usize>,
}

impl FakeSettings {
    pub(crate) fn with(pairs: &[(&str, serde_json::Value)]) -> Arc<Self> {
        let store = Self::default();
        for (k, v) in pairs {
            store.values.lock().unwrap().insert(k.to_string(), v.clone());
        }
        Arc::new(store)
    }
}

impl SettingsStore for FakeSettings {
    fn get(&self, key: &str) -> Option<serde_json::Value> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn update(&self, key: &str, value: serde_json::Value) -> bool {
        *self.writes.lock().unwrap() += 1;
        let mut values = self.values.lock().unwrap();
        values.insert(key.to_string(), value.clone()) != Some(value)
    }
}

/// Cache without expiry; records the TTL of every write.
#[derive(Default)]
pub(crate) struct FakeCache {
    pub(crate) values: Mutex<HashMap<String, serde_json::Value>>,
    pub(crate) ttls: Mutex<Vec<Duration>>,
}

impl FakeCache {
    pub(crate) fn writes(&self) -> usize {
        self.ttls.lock().unwrap().len()
    }
}

impl TransientCache for FakeCache {
    fn get(&self, key: &str) -> Option<serde_json::Value> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: serde_json::Value, ttl: Duration) -> bool {
        self.ttls.lock().unwrap().push(ttl);
        self.values.lock().unwrap().insert(key.to_string(), value);
        true
    }

    fn delete(&self, key: &str) -> bool {
        self.values.lock().unwrap().remove(key).is_some()
    }
}

/// Document store over a plain list, counting executed queries.
#[derive(Default)]
pub(crate) struct FakeStore {
    pub(crate) posts: Mutex<Vec<Post>>,
    pub(crate) queries: Mutex<Vec<QueryDescription>>,
}

impl FakeStore {
    pub(crate) fn add(&self, id: DocumentId, post_type: &str, status: PostStatus) -> Post {
        let post = fake_post(id, post_type, status);
        self.posts.lock().unwrap().push(post.clone());
        post
    }

    pub(crate) fn query_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

impl DocumentStore for FakeStore {
    fn query(&self, query: &QueryDescription) -> Vec<Post> {
        self.queries.lock().unwrap().push(query.clone());

        let post_type = query.post_type.as_deref().unwrap_or(DEFAULT_POST_TYPE);
        let statuses = query
            .post_status
            .clone()
            .unwrap_or_else(|| vec![PostStatus::Publish]);

        let mut matched: Vec<Post> = self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.post_type == post_type && statuses.contains(&p.status))
            .cloned()
            .collect();
        matched.sort_by(|a, b| (b.published_at, b.id).cmp(&(a.published_at, a.id)));
        if let Some(limit) = query.posts_per_page {
            matched.truncate(limit as usize);
        }
        matched
    }

    fn get_post(&self, id: DocumentId) -> Option<Post> {
        self.posts.lock().unwrap().iter().find(|p| p.id == id).cloned()
    }
}

/// A post published `id` minutes after a fixed epoch, so higher ids are newer.
pub(crate) fn fake_post(id: DocumentId, post_type: &str, status: PostStatus) -> Post {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let at = base + chrono::Duration::minutes(id as i64);
    Post {
        id,
        post_type: post_type.to_string(),
        status,
        title: format!("Post {id}"),
        content: String::new(),
        featured_image: None,
        published_at: at,
        modified_at: at,
    }
}
