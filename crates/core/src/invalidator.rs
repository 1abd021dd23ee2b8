//! Evicts the cached latest homepage id whenever a homepage is saved.

use std::sync::Arc;

use crate::ports::DocumentStore;
use crate::post::HOMEPAGE_POST_TYPE;
use crate::resolver::LatestResolver;
use crate::types::DocumentId;

pub struct CacheInvalidator {
    resolver: Arc<LatestResolver>,
    store: Arc<dyn DocumentStore>,
}

impl CacheInvalidator {
    pub fn new(resolver: Arc<LatestResolver>, store: Arc<dyn DocumentStore>) -> Self {
        Self { resolver, store }
    }

    /// Handle a save of any document, whatever its status.
    ///
    /// Returns `true` when the saved document was a homepage.
    pub fn on_save(&self, post_id: DocumentId) -> bool {
        if self.store.post_type_of(post_id).as_deref() != Some(HOMEPAGE_POST_TYPE) {
            return false;
        }
        let evicted = self.resolver.forget();
        tracing::debug!(post_id, evicted, "Latest homepage cache cleared");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RequestContext;
    use crate::post::PostStatus;
    use crate::testing::{FakeCache, FakeStore};

    fn setup() -> (CacheInvalidator, Arc<LatestResolver>, Arc<FakeStore>) {
        let store = Arc::new(FakeStore::default());
        let resolver = Arc::new(LatestResolver::new(
            Arc::new(FakeCache::default()),
            store.clone(),
        ));
        let invalidator = CacheInvalidator::new(resolver.clone(), store.clone());
        (invalidator, resolver, store)
    }

    #[test]
    fn homepage_save_makes_next_resolution_fresh() {
        let (invalidator, resolver, store) = setup();
        let ctx = RequestContext::anonymous();
        store.add(1, HOMEPAGE_POST_TYPE, PostStatus::Publish);
        assert_eq!(resolver.resolve_latest_id(&ctx), 1);

        store.add(2, HOMEPAGE_POST_TYPE, PostStatus::Publish);
        assert!(invalidator.on_save(2));

        assert_eq!(resolver.resolve_latest_id(&ctx), 2);
    }

    #[test]
    fn draft_homepage_save_still_evicts() {
        let (invalidator, resolver, store) = setup();
        let ctx = RequestContext::anonymous();
        store.add(1, HOMEPAGE_POST_TYPE, PostStatus::Publish);
        resolver.resolve_latest_id(&ctx);

        store.add(2, HOMEPAGE_POST_TYPE, PostStatus::Draft);
        assert!(invalidator.on_save(2));
        assert_eq!(resolver.resolve_latest_id(&ctx), 1);
        assert_eq!(store.query_count(), 2);
    }

    #[test]
    fn other_saves_keep_the_cache() {
        let (invalidator, resolver, store) = setup();
        let ctx = RequestContext::anonymous();
        store.add(1, HOMEPAGE_POST_TYPE, PostStatus::Publish);
        resolver.resolve_latest_id(&ctx);

        store.add(2, "post", PostStatus::Publish);
        assert!(!invalidator.on_save(2));
        assert!(!invalidator.on_save(999));

        resolver.resolve_latest_id(&ctx);
        assert_eq!(store.query_count(), 1);
    }
}
