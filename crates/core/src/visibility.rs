//! Keeps individual homepages and deeper listing pages out of public reach.
//!
//! Runs after the host has resolved the main query, so conditionals and
//! results are final.

use crate::context::RequestContext;
use crate::post::HOMEPAGE_POST_TYPE;
use crate::query::QueryDescription;
use crate::settings::FrontPageMode;

/// Outcome of [`VisibilityGate::apply`], mostly useful for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateAction {
    /// Nothing matched.
    Pass,
    /// A homepage permalink opened by an anonymous visitor.
    HiddenFromAnonymous,
    /// A homepage permalink opened by a signed-in visitor, shown as home.
    ShownAsHome,
    /// A homepage permalink opened by a signed-in visitor, left as is.
    ShownAsSingular,
    /// A listing page beyond the first.
    PaginationHidden,
}

#[derive(Debug, Clone, Copy)]
pub struct VisibilityGate {
    mode: FrontPageMode,
    home_view_posts_mode_only: bool,
}

impl VisibilityGate {
    pub fn new(mode: FrontPageMode) -> Self {
        Self {
            mode,
            home_view_posts_mode_only: false,
        }
    }

    /// Only re-flag a directly opened homepage as home in latest-posts mode.
    pub fn with_home_view_posts_mode_only(mut self, only: bool) -> Self {
        self.home_view_posts_mode_only = only;
        self
    }

    /// A homepage document was opened through its own permalink.
    pub fn is_direct_homepage_request(ctx: &RequestContext, query: &QueryDescription) -> bool {
        !ctx.is_admin && query.is_main_query && query.is_singular_of(HOMEPAGE_POST_TYPE)
    }

    /// A page beyond the first of the home listing was requested.
    pub fn is_paginated_home(
        mode: FrontPageMode,
        ctx: &RequestContext,
        query: &QueryDescription,
    ) -> bool {
        mode == FrontPageMode::Posts
            && !ctx.is_admin
            && query.is_main_query
            && query.is_home
            && query.is_paged
    }

    pub fn apply(&self, ctx: &RequestContext, query: &mut QueryDescription) -> GateAction {
        if Self::is_direct_homepage_request(ctx, query) {
            return self.gate_direct_request(ctx, query);
        }

        if Self::is_paginated_home(self.mode, ctx, query) {
            tracing::debug!(paged = query.paged, "Paginated home view hidden");
            query.set_404();
            return GateAction::PaginationHidden;
        }

        GateAction::Pass
    }

    fn gate_direct_request(
        &self,
        ctx: &RequestContext,
        query: &mut QueryDescription,
    ) -> GateAction {
        if !ctx.is_logged_in {
            tracing::debug!("Homepage permalink hidden from anonymous visitor");
            query.set_404();
            return GateAction::HiddenFromAnonymous;
        }

        if self.home_view_posts_mode_only && self.mode != FrontPageMode::Posts {
            return GateAction::ShownAsSingular;
        }

        query.is_home = true;
        GateAction::ShownAsHome
    }
}
