//! Per-request facts supplied by the host.

use crate::types::{absint, DocumentId};

/// What the host knows about the current request before any query runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// The request is served inside the administration area.
    pub is_admin: bool,
    /// The visitor is authenticated.
    pub is_logged_in: bool,
    /// The request asks to preview unpublished content.
    pub is_preview: bool,
    /// Raw `p` request parameter, if present.
    pub preview_candidate: Option<String>,
}

impl RequestContext {
    /// An anonymous front-end request.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A front-end request from a signed-in visitor.
    pub fn logged_in() -> Self {
        Self {
            is_logged_in: true,
            ..Self::default()
        }
    }

    /// Mark the request as an administration-area request.
    pub fn in_admin(mut self) -> Self {
        self.is_admin = true;
        self
    }

    /// Mark the request as a preview of the document named by `p`.
    pub fn with_preview(mut self, p: impl Into<String>) -> Self {
        self.is_preview = true;
        self.preview_candidate = Some(p.into());
        self
    }

    /// The explicitly requested preview document, if this is a preview.
    ///
    /// The candidate is coerced but not validated against publication status.
    pub fn preview_id(&self) -> Option<DocumentId> {
        if !self.is_preview {
            return None;
        }
        self.preview_candidate.as_deref().map(absint)
    }
}
