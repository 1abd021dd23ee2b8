use std::time::Duration;

use crate::resolver::{StatusPolicy, LATEST_ID_CACHE_TTL};

/// Default REST namespace the guarded listing route lives under.
pub const DEFAULT_REST_NAMESPACE: &str = "wp/v2";

/// Behaviour switches for the homepage plugin.
///
/// The defaults match the current plugin behaviour; the switches cover the
/// variations earlier releases shipped with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomepagesConfig {
    /// Keep interception inert until a homepage has been published once.
    pub require_published_homepage: bool,
    /// Which statuses the latest-homepage lookup considers.
    pub status_policy: StatusPolicy,
    /// Pin the rewritten home query to published homepages.
    pub force_publish_status: bool,
    /// Only masquerade a directly opened homepage as the home view when the
    /// front page shows the latest posts.
    pub home_view_posts_mode_only: bool,
    /// REST namespace, without leading or trailing slashes.
    pub rest_namespace: String,
    /// Lifetime of the cached latest homepage id.
    pub cache_ttl: Duration,
}

impl Default for HomepagesConfig {
    fn default() -> Self {
        Self {
            require_published_homepage: true,
            status_policy: StatusPolicy::Published,
            force_publish_status: true,
            home_view_posts_mode_only: false,
            rest_namespace: DEFAULT_REST_NAMESPACE.to_string(),
            cache_ttl: LATEST_ID_CACHE_TTL,
        }
    }
}
