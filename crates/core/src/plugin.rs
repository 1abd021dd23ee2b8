//! The homepage plugin: composition root and host-facing hook surface.
//!
//! The host drives a request through these lifecycle points, in order:
//!
//! ```text
//! begin_request ─► parse_query ─► (host executes) ─► posts_results ─► wp ─► document_title
//! ```
//!
//! Document lifecycle events ([`Homepages::on_transition_post_status`],
//! [`Homepages::on_save_post`]) and REST hooks are independent of any
//! request pipeline.

use std::sync::Arc;

use crate::config::HomepagesConfig;
use crate::context::RequestContext;
use crate::error::CoreError;
use crate::filters::Filters;
use crate::interceptor::{Activation, Interceptor, LatestPostsInterceptor, StaticPageInterceptor};
use crate::invalidator::CacheInvalidator;
use crate::notices::{front_page_notice, AdminNotice};
use crate::ports::{ContentTypeRegistry, DocumentStore, SettingsStore, TransientCache};
use crate::query::QueryDescription;
use crate::registrar::register_homepage_type;
use crate::resolver::LatestResolver;
use crate::rest_guard::RestGuard;
use crate::settings::{ActivationLatch, FrontPageMode, ReadingSettings};
use crate::tracker::{PublicationTracker, StatusTransition};
use crate::types::DocumentId;
use crate::visibility::{GateAction, VisibilityGate};

pub struct Homepages {
    config: HomepagesConfig,
    settings: Arc<dyn SettingsStore>,
    store: Arc<dyn DocumentStore>,
    filters: Arc<Filters>,
    resolver: Arc<LatestResolver>,
    latch: ActivationLatch,
    tracker: PublicationTracker,
    invalidator: CacheInvalidator,
    rest_guard: RestGuard,
}

impl Homepages {
    pub fn new(
        config: HomepagesConfig,
        settings: Arc<dyn SettingsStore>,
        cache: Arc<dyn TransientCache>,
        store: Arc<dyn DocumentStore>,
    ) -> Self {
        Self::with_filters(config, settings, cache, store, Filters::new())
    }

    /// Build the plugin with externally registered filters.
    pub fn with_filters(
        config: HomepagesConfig,
        settings: Arc<dyn SettingsStore>,
        cache: Arc<dyn TransientCache>,
        store: Arc<dyn DocumentStore>,
        filters: Filters,
    ) -> Self {
        let resolver = Arc::new(
            LatestResolver::new(cache, Arc::clone(&store))
                .with_policy(config.status_policy)
                .with_ttl(config.cache_ttl),
        );
        let latch = ActivationLatch::new(Arc::clone(&settings));

        Self {
            tracker: PublicationTracker::new(latch.clone()),
            invalidator: CacheInvalidator::new(Arc::clone(&resolver), Arc::clone(&store)),
            rest_guard: RestGuard::new(&config.rest_namespace),
            filters: Arc::new(filters),
            config,
            settings,
            store,
            resolver,
            latch,
        }
    }

    /// Register the content type with the host. Call once at start-up.
    pub fn setup(&self, registry: &dyn ContentTypeRegistry) -> Result<(), CoreError> {
        register_homepage_type(registry)
    }

    pub fn config(&self) -> &HomepagesConfig {
        &self.config
    }

    /// A homepage has been published at least once.
    pub fn has_homepage(&self) -> bool {
        self.latch.is_set()
    }

    /// The latest homepage id, or `0` when there is none.
    pub fn get_latest_homepage_id(&self, ctx: &RequestContext) -> DocumentId {
        self.resolver.resolve_latest_id(ctx)
    }

    pub fn reading_settings(&self) -> ReadingSettings {
        ReadingSettings::load(self.settings.as_ref())
    }

    fn activation(&self) -> Activation {
        Activation {
            gate_enforced: self.config.require_published_homepage,
            latched: self.latch.is_set(),
        }
    }

    /// Start the hook pipeline for one request.
    ///
    /// Reading settings and activation state are read once, here, and the
    /// front-page strategy is fixed for the rest of the request.
    pub fn begin_request(&self, ctx: RequestContext) -> RequestPipeline {
        let reading = self.reading_settings();
        let activation = self.activation();

        let interceptor: Box<dyn Interceptor> = match reading.effective_mode() {
            FrontPageMode::Posts => Box::new(
                LatestPostsInterceptor::new(activation, Arc::clone(&self.filters))
                    .with_forced_publish_status(self.config.force_publish_status),
            ),
            FrontPageMode::Page => Box::new(StaticPageInterceptor::new(
                Arc::clone(&self.resolver),
                Arc::clone(&self.store),
                reading.page_on_front,
                activation,
                Arc::clone(&self.filters),
            )),
        };

        let gate = VisibilityGate::new(reading.effective_mode())
            .with_home_view_posts_mode_only(self.config.home_view_posts_mode_only);

        RequestPipeline {
            ctx,
            reading,
            interceptor,
            gate,
        }
    }

    // -- document lifecycle -------------------------------------------------

    pub fn on_transition_post_status(&self, transition: &StatusTransition) {
        self.tracker.on_transition(transition);
    }

    pub fn on_save_post(&self, post_id: DocumentId) {
        self.invalidator.on_save(post_id);
    }

    // -- REST ---------------------------------------------------------------

    pub fn rest_route(&self) -> &str {
        self.rest_guard.route()
    }

    /// Adjust the query behind the homepage listing endpoint.
    pub fn rest_listing_query(&self, query: &mut QueryDescription) {
        self.rest_guard.restrict_listing(query);
    }

    /// Inspect a REST request before the host dispatches it.
    pub fn rest_pre_dispatch(
        &self,
        route: &str,
        page: Option<&str>,
        is_logged_in: bool,
    ) -> Result<(), CoreError> {
        self.rest_guard.pre_dispatch(route, page, is_logged_in)
    }

    // -- admin --------------------------------------------------------------

    pub fn admin_notices(&self, admin_url: &str) -> Vec<AdminNotice> {
        front_page_notice(&self.reading_settings(), admin_url)
            .into_iter()
            .collect()
    }
}

/// Hook surface for a single request.
pub struct RequestPipeline {
    ctx: RequestContext,
    reading: ReadingSettings,
    interceptor: Box<dyn Interceptor>,
    gate: VisibilityGate,
}

impl RequestPipeline {
    pub fn context(&self) -> &RequestContext {
        &self.ctx
    }

    pub fn reading(&self) -> &ReadingSettings {
        &self.reading
    }

    pub fn mode(&self) -> FrontPageMode {
        self.interceptor.mode()
    }

    pub fn parse_query(&self, query: &mut QueryDescription) {
        self.interceptor.parse_query(&self.ctx, query);
    }

    pub fn posts_results(&self, query: &mut QueryDescription) {
        self.interceptor.posts_results(&self.ctx, query);
    }

    /// Runs once the main query is final.
    pub fn wp(&self, query: &mut QueryDescription) -> GateAction {
        self.gate.apply(&self.ctx, query)
    }

    pub fn document_title(&self, query: &QueryDescription, title: String) -> String {
        self.interceptor.document_title(&self.ctx, query, title)
    }
}
