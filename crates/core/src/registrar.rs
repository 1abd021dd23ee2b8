//! Declaration of the `homepage` content type.

use serde::Serialize;

use crate::error::CoreError;
use crate::ports::ContentTypeRegistry;
use crate::post::HOMEPAGE_POST_TYPE;

/// Editor features a content type opts into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Supports {
    Title,
    Editor,
    Thumbnail,
    Revisions,
    CustomFields,
}

impl Supports {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Editor => "editor",
            Self::Thumbnail => "thumbnail",
            Self::Revisions => "revisions",
            Self::CustomFields => "custom-fields",
        }
    }
}

/// Admin-facing labels for a content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentTypeLabels {
    pub name: &'static str,
    pub singular_name: &'static str,
    pub add_new: &'static str,
    pub add_new_item: &'static str,
    pub edit_item: &'static str,
    pub new_item: &'static str,
    pub view_item: &'static str,
    pub view_items: &'static str,
    pub search_items: &'static str,
    pub not_found: &'static str,
    pub not_found_in_trash: &'static str,
    pub parent_item_colon: &'static str,
    pub all_items: &'static str,
    pub archives: &'static str,
    pub attributes: &'static str,
    pub insert_into_item: &'static str,
    pub uploaded_to_this_item: &'static str,
    pub filter_items_list: &'static str,
    pub items_list_navigation: &'static str,
    pub items_list: &'static str,
    pub menu_name: &'static str,
}

/// Everything the host needs to register a content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentTypeDefinition {
    pub name: &'static str,
    pub labels: ContentTypeLabels,
    pub public: bool,
    pub exclude_from_search: bool,
    pub show_ui: bool,
    pub show_in_rest: bool,
    /// Custom permalink slug; `None` keeps the host's default structure.
    pub rewrite: Option<&'static str>,
    pub menu_icon: &'static str,
    pub supports: Vec<Supports>,
}

impl ContentTypeDefinition {
    pub fn supports(&self, feature: Supports) -> bool {
        self.supports.contains(&feature)
    }
}

/// The `homepage` content type.
pub fn homepage_content_type() -> ContentTypeDefinition {
    ContentTypeDefinition {
        name: HOMEPAGE_POST_TYPE,
        labels: ContentTypeLabels {
            name: "Homepages",
            singular_name: "Homepage",
            add_new: "Add New Homepage",
            add_new_item: "Add New Homepage",
            edit_item: "Edit Homepage",
            new_item: "New Homepage",
            view_item: "View Homepage",
            view_items: "View Homepages",
            search_items: "Search Homepages",
            not_found: "No homepages found",
            not_found_in_trash: "No homepages found in Trash",
            parent_item_colon: "Parent Homepage:",
            all_items: "All Homepages",
            archives: "Homepage Archives",
            attributes: "Homepage Attributes",
            insert_into_item: "Insert into Homepage",
            uploaded_to_this_item: "Uploaded to this Homepage",
            filter_items_list: "Filter Homepage list",
            items_list_navigation: "Homepages list navigation",
            items_list: "Homepages list",
            menu_name: "Homepages",
        },
        public: true,
        exclude_from_search: true,
        show_ui: true,
        show_in_rest: true,
        rewrite: None,
        menu_icon: "dashicons-admin-home",
        supports: vec![
            Supports::Title,
            Supports::Editor,
            Supports::Thumbnail,
            Supports::Revisions,
            Supports::CustomFields,
        ],
    }
}

/// Register the `homepage` content type with the host.
pub fn register_homepage_type(registry: &dyn ContentTypeRegistry) -> Result<(), CoreError> {
    registry.register_post_type(homepage_content_type())?;
    tracing::info!(post_type = HOMEPAGE_POST_TYPE, "Registered content type");
    Ok(())
}
