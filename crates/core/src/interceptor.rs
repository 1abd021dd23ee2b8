//! Main-query interception strategies.
//!
//! The host's front-page mode selects exactly one strategy per request:
//!
//! - [`LatestPostsInterceptor`] rewrites the home query before it runs, so the
//!   host itself fetches the single latest homepage.
//! - [`StaticPageInterceptor`] lets the host fetch the configured front page,
//!   then swaps the result list for the latest homepage.
//!
//! Both are inert until activated and both honour a named veto filter.

use std::cell::Cell;
use std::sync::Arc;

use crate::context::RequestContext;
use crate::filters::{Filters, MODIFY_MAIN_QUERY, MODIFY_POST_RESULTS};
use crate::ports::DocumentStore;
use crate::post::{PostStatus, HOMEPAGE_POST_TYPE};
use crate::query::QueryDescription;
use crate::resolver::LatestResolver;
use crate::settings::FrontPageMode;
use crate::types::{DocumentId, NO_DOCUMENT};

// ---------------------------------------------------------------------------
// Activation
// ---------------------------------------------------------------------------

/// Whether interception is live for this request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    /// Interception waits for the first published homepage.
    pub gate_enforced: bool,
    /// A homepage has been published at least once.
    pub latched: bool,
}

impl Activation {
    pub fn passes(&self) -> bool {
        !self.gate_enforced || self.latched
    }
}

// ---------------------------------------------------------------------------
// Interceptor
// ---------------------------------------------------------------------------

/// One front-page strategy, driven by the host at fixed lifecycle points.
pub trait Interceptor {
    fn mode(&self) -> FrontPageMode;

    /// Called after the host parsed a query, before it runs.
    fn parse_query(&self, _ctx: &RequestContext, _query: &mut QueryDescription) {}

    /// Called once the host has fetched the results of a query.
    fn posts_results(&self, _ctx: &RequestContext, _query: &mut QueryDescription) {}

    /// Called when the host computes the document title for the response.
    fn document_title(
        &self,
        _ctx: &RequestContext,
        _query: &QueryDescription,
        title: String,
    ) -> String {
        title
    }
}

// ---------------------------------------------------------------------------
// LatestPostsInterceptor
// ---------------------------------------------------------------------------

/// Pre-execution rewrite of the home query.
pub struct LatestPostsInterceptor {
    activation: Activation,
    filters: Arc<Filters>,
    force_publish_status: bool,
}

impl LatestPostsInterceptor {
    pub fn new(activation: Activation, filters: Arc<Filters>) -> Self {
        Self {
            activation,
            filters,
            force_publish_status: true,
        }
    }

    pub fn with_forced_publish_status(mut self, force: bool) -> Self {
        self.force_publish_status = force;
        self
    }

    /// The query is the front-end home listing.
    pub fn should_intercept(ctx: &RequestContext, query: &QueryDescription) -> bool {
        !ctx.is_admin && query.is_main_query && query.is_home
    }
}

impl Interceptor for LatestPostsInterceptor {
    fn mode(&self) -> FrontPageMode {
        FrontPageMode::Posts
    }

    fn parse_query(&self, ctx: &RequestContext, query: &mut QueryDescription) {
        if !Self::should_intercept(ctx, query) {
            return;
        }

        if !self
            .filters
            .apply(MODIFY_MAIN_QUERY, self.activation.passes(), ctx)
        {
            tracing::debug!(
                latched = self.activation.latched,
                "Home query left unmodified"
            );
            return;
        }

        query.post_type = Some(HOMEPAGE_POST_TYPE.to_string());
        query.posts_per_page = Some(1);
        if self.force_publish_status {
            query.post_status = Some(vec![PostStatus::Publish]);
        }
        tracing::debug!(paged = query.paged, "Home query rewritten to latest homepage");
    }
}

// ---------------------------------------------------------------------------
// StaticPageInterceptor
// ---------------------------------------------------------------------------

/// Post-execution short-circuit of the static front page.
///
/// Built per request; the interior flags are request-scoped.
pub struct StaticPageInterceptor {
    resolver: Arc<LatestResolver>,
    store: Arc<dyn DocumentStore>,
    page_on_front: DocumentId,
    activation: Activation,
    filters: Arc<Filters>,
    /// Set while this interceptor is resolving; its own hook is then a no-op.
    detached: Cell<bool>,
    /// Set once the front page query has been taken over.
    short_circuited: Cell<bool>,
}

/// Re-attaches the interceptor when dropped.
struct Detached<'a>(&'a Cell<bool>);

impl Drop for Detached<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl StaticPageInterceptor {
    pub fn new(
        resolver: Arc<LatestResolver>,
        store: Arc<dyn DocumentStore>,
        page_on_front: DocumentId,
        activation: Activation,
        filters: Arc<Filters>,
    ) -> Self {
        Self {
            resolver,
            store,
            page_on_front,
            activation,
            filters,
            detached: Cell::new(false),
            short_circuited: Cell::new(false),
        }
    }

    /// The query is the front-end query for the configured front page.
    pub fn should_short_circuit(
        ctx: &RequestContext,
        query: &QueryDescription,
        page_on_front: DocumentId,
    ) -> bool {
        !ctx.is_admin
            && query.is_main_query
            && page_on_front != NO_DOCUMENT
            && query.page_id == Some(page_on_front)
    }

    pub fn is_short_circuited(&self) -> bool {
        self.short_circuited.get()
    }

    fn detach(&self) -> Detached<'_> {
        self.detached.set(true);
        Detached(&self.detached)
    }
}

impl Interceptor for StaticPageInterceptor {
    fn mode(&self) -> FrontPageMode {
        FrontPageMode::Page
    }

    fn posts_results(&self, ctx: &RequestContext, query: &mut QueryDescription) {
        if self.detached.get() || !Self::should_short_circuit(ctx, query, self.page_on_front) {
            return;
        }

        if !self
            .filters
            .apply(MODIFY_POST_RESULTS, self.activation.passes(), ctx)
        {
            tracing::debug!(
                page_on_front = self.page_on_front,
                latched = self.activation.latched,
                "Front page results left unmodified"
            );
            return;
        }

        query.is_home = true;
        query.is_page = false;
        query.is_singular = false;
        query.page_id = None;
        self.short_circuited.set(true);

        let latest = {
            let _detached = self.detach();
            self.resolver.resolve_latest_id(ctx)
        };
        if latest == NO_DOCUMENT {
            return;
        }

        match self.store.get_post(latest) {
            Some(post) => {
                tracing::debug!(homepage_id = latest, "Front page replaced by latest homepage");
                query.posts = vec![post];
            }
            None => {
                tracing::warn!(homepage_id = latest, "Latest homepage id points at nothing");
            }
        }
    }

    fn document_title(
        &self,
        _ctx: &RequestContext,
        _query: &QueryDescription,
        title: String,
    ) -> String {
        if !self.short_circuited.get() {
            return title;
        }
        self.store
            .get_post(self.page_on_front)
            .map(|page| page.title)
            .unwrap_or(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::PAGE_POST_TYPE;
    use crate::testing::{FakeCache, FakeStore};

    const ACTIVE: Activation = Activation {
        gate_enforced: true,
        latched: true,
    };
    const INACTIVE: Activation = Activation {
        gate_enforced: true,
        latched: false,
    };

    fn no_filters() -> Arc<Filters> {
        Arc::new(Filters::new())
    }

    // -- Activation ---------------------------------------------------------

    #[test]
    fn activation_without_gate_always_passes() {
        let activation = Activation {
            gate_enforced: false,
            latched: false,
        };
        assert!(activation.passes());
        assert!(ACTIVE.passes());
        assert!(!INACTIVE.passes());
    }

    // -- LatestPostsInterceptor ---------------------------------------------

    #[test]
    fn home_query_is_rewritten() {
        let interceptor = LatestPostsInterceptor::new(ACTIVE, no_filters());
        let mut query = QueryDescription::home(1);

        interceptor.parse_query(&RequestContext::anonymous(), &mut query);

        assert_eq!(query.post_type.as_deref(), Some(HOMEPAGE_POST_TYPE));
        assert_eq!(query.posts_per_page, Some(1));
        assert_eq!(query.post_status, Some(vec![PostStatus::Publish]));
    }

    #[test]
    fn status_is_left_alone_when_not_forced() {
        let interceptor =
            LatestPostsInterceptor::new(ACTIVE, no_filters()).with_forced_publish_status(false);
        let mut query = QueryDescription::home(1);

        interceptor.parse_query(&RequestContext::anonymous(), &mut query);

        assert_eq!(query.posts_per_page, Some(1));
        assert_eq!(query.post_status, None);
    }

    #[test]
    fn inactive_plugin_leaves_home_query() {
        let interceptor = LatestPostsInterceptor::new(INACTIVE, no_filters());
        let mut query = QueryDescription::home(1);
        let before = query.clone();

        interceptor.parse_query(&RequestContext::anonymous(), &mut query);

        assert_eq!(query, before);
    }

    #[test]
    fn veto_filter_leaves_home_query() {
        let mut filters = Filters::new();
        filters.force(MODIFY_MAIN_QUERY, false);
        let interceptor = LatestPostsInterceptor::new(ACTIVE, Arc::new(filters));
        let mut query = QueryDescription::home(1);
        let before = query.clone();

        interceptor.parse_query(&RequestContext::anonymous(), &mut query);

        assert_eq!(query, before);
    }

    #[test]
    fn filter_can_enable_before_first_publish() {
        let mut filters = Filters::new();
        filters.force(MODIFY_MAIN_QUERY, true);
        let interceptor = LatestPostsInterceptor::new(INACTIVE, Arc::new(filters));
        let mut query = QueryDescription::home(1);

        interceptor.parse_query(&RequestContext::anonymous(), &mut query);

        assert_eq!(query.post_type.as_deref(), Some(HOMEPAGE_POST_TYPE));
    }

    #[test]
    fn non_home_and_admin_queries_are_ignored() {
        let interceptor = LatestPostsInterceptor::new(ACTIVE, no_filters());

        let mut singular = QueryDescription::singular("post", 3);
        interceptor.parse_query(&RequestContext::anonymous(), &mut singular);
        assert_eq!(singular.post_type.as_deref(), Some("post"));

        let mut admin_home = QueryDescription::home(1);
        interceptor.parse_query(&RequestContext::logged_in().in_admin(), &mut admin_home);
        assert_eq!(admin_home.post_type, None);

        let mut secondary = QueryDescription {
            is_home: true,
            ..QueryDescription::secondary()
        };
        interceptor.parse_query(&RequestContext::anonymous(), &mut secondary);
        assert_eq!(secondary.post_type, None);
    }

    // -- StaticPageInterceptor ----------------------------------------------

    struct Fixture {
        store: Arc<FakeStore>,
        resolver: Arc<LatestResolver>,
    }

    impl Fixture {
        fn new() -> Self {
            let store = Arc::new(FakeStore::default());
            let cache = Arc::new(FakeCache::default());
            let resolver = Arc::new(LatestResolver::new(cache, store.clone()));
            let mut front = store.add(50, PAGE_POST_TYPE, PostStatus::Publish);
            front.title = "Welcome".into();
            store.posts.lock().unwrap()[0] = front;
            Self { store, resolver }
        }

        fn interceptor(
            &self,
            activation: Activation,
            filters: Arc<Filters>,
        ) -> StaticPageInterceptor {
            StaticPageInterceptor::new(
                self.resolver.clone(),
                self.store.clone(),
                50,
                activation,
                filters,
            )
        }

        fn front_page_query(&self) -> QueryDescription {
            let mut query = QueryDescription::page(50);
            query.posts = vec![self.store.get_post(50).unwrap()];
            query
        }
    }

    #[test]
    fn front_page_results_become_latest_homepage() {
        let fx = Fixture::new();
        fx.store.add(1, HOMEPAGE_POST_TYPE, PostStatus::Publish);
        fx.store.add(2, HOMEPAGE_POST_TYPE, PostStatus::Publish);
        let interceptor = fx.interceptor(ACTIVE, no_filters());
        let mut query = fx.front_page_query();

        interceptor.posts_results(&RequestContext::anonymous(), &mut query);

        assert!(query.is_home);
        assert!(!query.is_page);
        assert!(!query.is_singular);
        assert_eq!(query.page_id, None);
        assert_eq!(query.posts.len(), 1);
        assert_eq!(query.posts[0].id, 2);
        assert!(interceptor.is_short_circuited());
    }

    #[test]
    fn front_page_kept_when_no_homepage_exists() {
        let fx = Fixture::new();
        let interceptor = fx.interceptor(ACTIVE, no_filters());
        let mut query = fx.front_page_query();

        interceptor.posts_results(&RequestContext::anonymous(), &mut query);

        assert!(query.is_home);
        assert_eq!(query.posts[0].id, 50);
    }

    #[test]
    fn inactive_or_vetoed_front_page_is_untouched() {
        let fx = Fixture::new();
        fx.store.add(1, HOMEPAGE_POST_TYPE, PostStatus::Publish);

        let inactive = fx.interceptor(INACTIVE, no_filters());
        let mut query = fx.front_page_query();
        inactive.posts_results(&RequestContext::anonymous(), &mut query);
        assert_eq!(query, fx.front_page_query());

        let mut filters = Filters::new();
        filters.force(MODIFY_POST_RESULTS, false);
        let vetoed = fx.interceptor(ACTIVE, Arc::new(filters));
        let mut query = fx.front_page_query();
        vetoed.posts_results(&RequestContext::anonymous(), &mut query);
        assert_eq!(query, fx.front_page_query());
        assert!(!vetoed.is_short_circuited());
    }

    #[test]
    fn other_pages_are_untouched() {
        let fx = Fixture::new();
        fx.store.add(1, HOMEPAGE_POST_TYPE, PostStatus::Publish);
        let interceptor = fx.interceptor(ACTIVE, no_filters());

        let mut other = QueryDescription::page(51);
        interceptor.posts_results(&RequestContext::anonymous(), &mut other);
        assert!(other.is_page);

        let mut admin = fx.front_page_query();
        interceptor.posts_results(&RequestContext::logged_in().in_admin(), &mut admin);
        assert!(admin.is_page);
    }

    #[test]
    fn detached_interceptor_ignores_its_own_hook() {
        let fx = Fixture::new();
        fx.store.add(1, HOMEPAGE_POST_TYPE, PostStatus::Publish);
        let interceptor = fx.interceptor(ACTIVE, no_filters());
        let mut query = fx.front_page_query();

        {
            let _detached = interceptor.detach();
            interceptor.posts_results(&RequestContext::anonymous(), &mut query);
            assert!(query.is_page);
        }

        interceptor.posts_results(&RequestContext::anonymous(), &mut query);
        assert!(query.is_home);
    }

    #[test]
    fn title_reports_front_page_once_short_circuited() {
        let fx = Fixture::new();
        fx.store.add(1, HOMEPAGE_POST_TYPE, PostStatus::Publish);
        let interceptor = fx.interceptor(ACTIVE, no_filters());
        let ctx = RequestContext::anonymous();
        let mut query = fx.front_page_query();

        assert_eq!(interceptor.document_title(&ctx, &query, "Site".into()), "Site");

        interceptor.posts_results(&ctx, &mut query);
        assert_eq!(interceptor.document_title(&ctx, &query, "Site".into()), "Welcome");
    }
}
