//! Request extractors that authenticate or gate requests.
//!
//! - [`auth::AuthUser`] -- Requires a valid JWT Bearer token.
//! - [`auth::MaybeUser`] -- Signed-in visitor if a valid token is present.
//! - [`listing_guard::ListingGuard`] -- Pre-dispatch check on the homepage
//!   REST listing.
//! - [`rbac::RequireEditor`] -- Requires an editor or administrator.

pub mod auth;
pub mod listing_guard;
pub mod rbac;
