use std::sync::Arc;

use homepages_core::error::CoreError;
use homepages_core::plugin::Homepages;
use homepages_db::{MemoryOptionStore, MemoryPostStore, MemoryTransientStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub homepages: Arc<Homepages>,
    /// Durable site settings.
    pub options: Arc<MemoryOptionStore>,
    /// Expiring cache entries.
    pub transients: Arc<MemoryTransientStore>,
    /// Posts and registered content types.
    pub posts: Arc<MemoryPostStore>,
}

impl AppState {
    /// Build the state over fresh in-memory stores.
    pub fn new(config: ServerConfig) -> Result<Self, CoreError> {
        Self::with_stores(
            config,
            Arc::new(MemoryOptionStore::new()),
            Arc::new(MemoryTransientStore::new()),
            Arc::new(MemoryPostStore::new()),
        )
    }

    /// Build the state over the given stores.
    ///
    /// Seeds the reading settings from `config` and registers the homepage
    /// content type with the post store.
    pub fn with_stores(
        config: ServerConfig,
        options: Arc<MemoryOptionStore>,
        transients: Arc<MemoryTransientStore>,
        posts: Arc<MemoryPostStore>,
    ) -> Result<Self, CoreError> {
        config.reading.save(options.as_ref());

        let homepages = Homepages::new(
            config.homepages.clone(),
            options.clone(),
            transients.clone(),
            posts.clone(),
        );
        homepages.setup(posts.as_ref())?;

        Ok(Self {
            config: Arc::new(config),
            homepages: Arc::new(homepages),
            options,
            transients,
            posts,
        })
    }
}
