//! Shared query parameter types for API handlers.
//!
//! Numeric parameters arrive as raw strings and go through the host's lenient
//! integer coercion instead of failing the request.

use homepages_core::types::absint;
use serde::Deserialize;

/// Parameters accepted by the site root (`/?paged=&p=&preview=&page_id=`).
#[derive(Debug, Default, Deserialize)]
pub struct FrontParams {
    pub paged: Option<String>,
    pub p: Option<String>,
    pub preview: Option<String>,
    pub page_id: Option<String>,
}

impl FrontParams {
    /// 1-based listing page.
    pub fn paged(&self) -> u32 {
        self.paged
            .as_deref()
            .map(absint)
            .map_or(1, |n| u32::try_from(n).unwrap_or(u32::MAX))
            .max(1)
    }

    pub fn page_id(&self) -> Option<u64> {
        self.page_id.as_deref().map(absint).filter(|id| *id != 0)
    }

    /// Preview requested with a truthy `preview` flag.
    pub fn is_preview(&self) -> bool {
        matches!(self.preview.as_deref(), Some("true" | "1"))
    }
}

/// Parameters of the homepage REST listing (`?page=&per_page=`).
#[derive(Debug, Default, Deserialize)]
pub struct ListingParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl ListingParams {
    pub fn page(&self) -> u32 {
        self.page
            .as_deref()
            .map(absint)
            .map_or(1, |n| u32::try_from(n).unwrap_or(u32::MAX))
            .max(1)
    }

    pub fn per_page(&self) -> Option<u32> {
        self.per_page
            .as_deref()
            .map(absint)
            .filter(|n| *n > 0)
            .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
    }
}
