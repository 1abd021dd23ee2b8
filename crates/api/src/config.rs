use std::time::Duration;

use homepages_core::config::{HomepagesConfig, DEFAULT_REST_NAMESPACE};
use homepages_core::resolver::{StatusPolicy, LATEST_ID_CACHE_TTL};
use homepages_core::settings::{FrontPageMode, ReadingSettings, DEFAULT_POSTS_PER_PAGE};

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Base URL of the admin area, used for links in admin notices.
    pub admin_url: String,
    /// JWT token configuration.
    pub jwt: JwtConfig,
    /// Homepage plugin switches.
    pub homepages: HomepagesConfig,
    /// Reading settings written to the option store at start-up.
    pub reading: ReadingSettings,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                                | Default                 |
    /// |----------------------------------------|-------------------------|
    /// | `HOST`                                 | `0.0.0.0`               |
    /// | `PORT`                                 | `3000`                  |
    /// | `CORS_ORIGINS`                         | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`                 | `30`                    |
    /// | `ADMIN_URL`                            | `/wp-admin`             |
    /// | `HOMEPAGES_REQUIRE_PUBLISHED`          | `true`                  |
    /// | `HOMEPAGES_STATUS_POLICY`              | `publish`               |
    /// | `HOMEPAGES_FORCE_PUBLISH_STATUS`       | `true`                  |
    /// | `HOMEPAGES_HOME_VIEW_POSTS_MODE_ONLY`  | `false`                 |
    /// | `HOMEPAGES_REST_NAMESPACE`             | `wp/v2`                 |
    /// | `HOMEPAGES_CACHE_TTL_SECS`             | `900`                   |
    /// | `SHOW_ON_FRONT`                        | `posts`                 |
    /// | `PAGE_ON_FRONT`                        | `0`                     |
    /// | `POSTS_PER_PAGE`                       | `10`                    |
    ///
    /// See [`JwtConfig::from_env`] for the token settings.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let admin_url = std::env::var("ADMIN_URL").unwrap_or_else(|_| "/wp-admin".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            admin_url,
            jwt: JwtConfig::from_env(),
            homepages: homepages_from_env(),
            reading: reading_from_env(),
        }
    }
}

fn homepages_from_env() -> HomepagesConfig {
    let status_policy = match std::env::var("HOMEPAGES_STATUS_POLICY") {
        Ok(raw) => StatusPolicy::from_str(&raw)
            .unwrap_or_else(|e| panic!("HOMEPAGES_STATUS_POLICY is invalid: {e}")),
        Err(_) => StatusPolicy::default(),
    };

    let cache_ttl_secs: u64 = std::env::var("HOMEPAGES_CACHE_TTL_SECS")
        .unwrap_or_else(|_| LATEST_ID_CACHE_TTL.as_secs().to_string())
        .parse()
        .expect("HOMEPAGES_CACHE_TTL_SECS must be a valid u64");

    let rest_namespace = std::env::var("HOMEPAGES_REST_NAMESPACE")
        .unwrap_or_else(|_| DEFAULT_REST_NAMESPACE.into());

    HomepagesConfig {
        require_published_homepage: env_flag("HOMEPAGES_REQUIRE_PUBLISHED", true),
        status_policy,
        force_publish_status: env_flag("HOMEPAGES_FORCE_PUBLISH_STATUS", true),
        home_view_posts_mode_only: env_flag("HOMEPAGES_HOME_VIEW_POSTS_MODE_ONLY", false),
        rest_namespace,
        cache_ttl: Duration::from_secs(cache_ttl_secs),
    }
}

fn reading_from_env() -> ReadingSettings {
    let show_on_front = match std::env::var("SHOW_ON_FRONT") {
        Ok(raw) => FrontPageMode::from_str(&raw)
            .unwrap_or_else(|e| panic!("SHOW_ON_FRONT is invalid: {e}")),
        Err(_) => FrontPageMode::Posts,
    };

    let page_on_front = std::env::var("PAGE_ON_FRONT")
        .unwrap_or_else(|_| "0".into())
        .parse()
        .expect("PAGE_ON_FRONT must be a valid u64");

    let posts_per_page = std::env::var("POSTS_PER_PAGE")
        .unwrap_or_else(|_| DEFAULT_POSTS_PER_PAGE.to_string())
        .parse()
        .expect("POSTS_PER_PAGE must be a valid u32");

    ReadingSettings {
        show_on_front,
        page_on_front,
        posts_per_page,
    }
}

/// Read a boolean flag. Accepts `1/0`, `true/false`, `yes/no`, `on/off`.
fn env_flag(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(raw) => parse_flag(&raw).unwrap_or_else(|| panic!("{name} must be a boolean")),
        Err(_) => default,
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::parse_flag;

    #[test]
    fn flags_accept_common_spellings() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("maybe"), None);
    }
}
