//! Restrictions on the homepage REST listing route.
//!
//! The listing always returns a single item, and any page past the first is
//! refused before the host dispatches the request.

use serde::Serialize;

use crate::error::CoreError;
use crate::post::HOMEPAGE_POST_TYPE;
use crate::query::QueryDescription;
use crate::types::absint;

/// Error code returned for refused listing requests.
pub const REST_FORBIDDEN_CODE: &str = "rest_forbidden";

/// Message returned for refused listing requests.
pub const REST_FORBIDDEN_MESSAGE: &str = "Sorry, you are not allowed to do that.";

/// A structured REST refusal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestRejection {
    pub code: &'static str,
    pub message: String,
    /// HTTP status the host should answer with.
    pub status: u16,
}

/// The host's "authorization required" status: 401 for anonymous callers,
/// 403 for authenticated callers who still may not proceed.
pub fn authorization_required_code(is_logged_in: bool) -> u16 {
    if is_logged_in {
        403
    } else {
        401
    }
}

#[derive(Debug, Clone)]
pub struct RestGuard {
    route: String,
}

impl RestGuard {
    /// Guard the homepage listing under the given namespace (e.g. `wp/v2`).
    pub fn new(namespace: &str) -> Self {
        let namespace = namespace.trim_matches('/');
        Self {
            route: format!("/{namespace}/{HOMEPAGE_POST_TYPE}"),
        }
    }

    /// The exact route this guard applies to.
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Pin a listing query to the single latest item.
    pub fn restrict_listing(&self, query: &mut QueryDescription) {
        query.posts_per_page = Some(1);
    }

    /// Refuse requests for any listing page past the first.
    ///
    /// Routes other than the guarded one always pass.
    pub fn pre_dispatch(
        &self,
        route: &str,
        page: Option<&str>,
        is_logged_in: bool,
    ) -> Result<(), CoreError> {
        if route != self.route {
            return Ok(());
        }

        let Some(page) = page.filter(|p| !p.is_empty()) else {
            return Ok(());
        };

        let page = absint(page);
        if page <= 1 {
            return Ok(());
        }

        tracing::info!(route, page, "Refused paginated homepage listing");
        Err(CoreError::Rejected(RestRejection {
            code: REST_FORBIDDEN_CODE,
            message: REST_FORBIDDEN_MESSAGE.to_string(),
            status: authorization_required_code(is_logged_in),
        }))
    }
}
