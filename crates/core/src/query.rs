//! The request-scoped query description shared with the host's query engine.
//!
//! The host builds one [`QueryDescription`] per query, runs the plugin's
//! hooks against it, executes it, and fills in [`QueryDescription::posts`].
//! The homepage logic reads the conditional flags and rewrites the query
//! variables; it never executes anything itself.

use serde::{Deserialize, Serialize};

use crate::post::{Post, PostStatus};
use crate::types::DocumentId;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryDescription {
    // -- conditionals -------------------------------------------------------
    /// The one query per request that determines the principal page content.
    pub is_main_query: bool,
    /// The request is for the site's root listing surface.
    pub is_home: bool,
    /// The request targets a standalone page.
    pub is_page: bool,
    /// The request targets exactly one document.
    pub is_singular: bool,
    /// The request asks for a page beyond the first of a listing.
    pub is_paged: bool,
    pub is_preview: bool,
    pub is_404: bool,

    // -- query variables ----------------------------------------------------
    /// Content type filter. `None` means the host default.
    pub post_type: Option<String>,
    /// Status filter. `None` means the host default for the viewer.
    pub post_status: Option<Vec<PostStatus>>,
    /// Page size. `None` means the host's configured default.
    pub posts_per_page: Option<u32>,
    /// 1-based listing page.
    pub paged: u32,
    /// Single document requested by id.
    pub p: Option<DocumentId>,
    /// Fixed page requested by id.
    pub page_id: Option<DocumentId>,
    /// Skip counting the total number of matching rows.
    pub no_found_rows: bool,

    // -- results ------------------------------------------------------------
    pub posts: Vec<Post>,
}

impl QueryDescription {
    /// A query for the request's principal content.
    pub fn main() -> Self {
        Self {
            is_main_query: true,
            paged: 1,
            ..Self::default()
        }
    }

    /// A query for incidental lookups made while handling a request.
    pub fn secondary() -> Self {
        Self {
            paged: 1,
            ..Self::default()
        }
    }

    /// The home listing, optionally at a given 1-based page.
    pub fn home(paged: u32) -> Self {
        let paged = paged.max(1);
        Self {
            is_home: true,
            is_paged: paged > 1,
            paged,
            ..Self::main()
        }
    }

    /// A single document's own permalink.
    pub fn singular(post_type: &str, id: DocumentId) -> Self {
        Self {
            is_singular: true,
            post_type: Some(post_type.to_string()),
            p: Some(id),
            ..Self::main()
        }
    }

    /// A fixed page, as the host resolves a static front page.
    pub fn page(page_id: DocumentId) -> Self {
        Self {
            is_page: true,
            is_singular: true,
            page_id: Some(page_id),
            ..Self::main()
        }
    }

    /// Switch the query into its not-found state.
    ///
    /// Every other conditional is reset, the way the host does it.
    pub fn set_404(&mut self) {
        self.is_home = false;
        self.is_page = false;
        self.is_singular = false;
        self.is_paged = false;
        self.is_preview = false;
        self.is_404 = true;
    }

    /// Content type of the singularly-requested document, once resolved.
    pub fn singular_post_type(&self) -> Option<&str> {
        if !self.is_singular {
            return None;
        }
        self.posts
            .first()
            .map(|post| post.post_type.as_str())
            .or(self.post_type.as_deref())
    }

    /// Whether this query resolved to a single document of the given type.
    pub fn is_singular_of(&self, post_type: &str) -> bool {
        self.singular_post_type() == Some(post_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_marks_pages_beyond_first_as_paged() {
        assert!(!QueryDescription::home(1).is_paged);
        assert!(QueryDescription::home(2).is_paged);
        assert_eq!(QueryDescription::home(0).paged, 1);
    }

    #[test]
    fn set_404_resets_conditionals() {
        let mut query = QueryDescription::home(3);
        query.set_404();
        assert!(query.is_404);
        assert!(!query.is_home);
        assert!(!query.is_paged);
        assert!(query.is_main_query);
    }

    #[test]
    fn singular_post_type_falls_back_to_query_var() {
        let query = QueryDescription::singular("homepage", 4);
        assert!(query.is_singular_of("homepage"));
        assert!(!QueryDescription::home(1).is_singular_of("homepage"));
    }
}
