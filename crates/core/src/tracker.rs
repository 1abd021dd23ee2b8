//! Records the first publication of a homepage.

use crate::post::{PostStatus, HOMEPAGE_POST_TYPE};
use crate::settings::ActivationLatch;
use crate::types::DocumentId;

/// A document status change reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTransition {
    pub post_id: DocumentId,
    pub post_type: String,
    pub old_status: PostStatus,
    pub new_status: PostStatus,
}

impl StatusTransition {
    /// The document entered `publish` from any other status.
    pub fn is_publication(&self) -> bool {
        self.new_status == PostStatus::Publish && self.old_status != PostStatus::Publish
    }

    pub fn is_homepage_publication(&self) -> bool {
        self.post_type == HOMEPAGE_POST_TYPE && self.is_publication()
    }
}

pub struct PublicationTracker {
    latch: ActivationLatch,
}

impl PublicationTracker {
    pub fn new(latch: ActivationLatch) -> Self {
        Self { latch }
    }

    /// Set the activation latch when a homepage gets published.
    ///
    /// Returns `true` when the transition was a homepage publication.
    pub fn on_transition(&self, transition: &StatusTransition) -> bool {
        if !transition.is_homepage_publication() {
            return false;
        }
        tracing::debug!(
            post_id = transition.post_id,
            old_status = %transition.old_status,
            "Homepage published"
        );
        self.latch.set();
        true
    }
}
