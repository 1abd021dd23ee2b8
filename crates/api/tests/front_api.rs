//! HTTP-level tests for the front-end views: home, permalinks and the
//! static front page.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, create_homepage, editor_token, get, get_auth, put_json_auth,
    static_front_config, test_config, test_state,
};
use homepages_api::state::AppState;
use homepages_core::post::{PostStatus, PAGE_POST_TYPE};
use homepages_db::models::post::NewPost;
use homepages_db::{MemoryOptionStore, MemoryPostStore, MemoryTransientStore};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// State whose front page is a published page titled "Welcome".
fn static_front_state() -> AppState {
    let posts = Arc::new(MemoryPostStore::new());
    let page = posts
        .insert(NewPost::new(PAGE_POST_TYPE, PostStatus::Publish, "Welcome"))
        .unwrap()
        .post;

    AppState::with_stores(
        static_front_config(page.id),
        Arc::new(MemoryOptionStore::new()),
        Arc::new(MemoryTransientStore::new()),
        posts,
    )
    .unwrap()
}

fn front_page_id(state: &AppState) -> u64 {
    state.config.reading.page_on_front
}

// ---------------------------------------------------------------------------
// Latest-posts front page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn home_lists_posts_until_a_homepage_is_published() {
    let state = test_state(test_config());
    state
        .posts
        .insert(NewPost::new("post", PostStatus::Publish, "Blog entry"))
        .unwrap();
    create_homepage(&state, "Unfinished", "draft").await;

    let response = get(build_test_app(&state), "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["is_home"], true);
    assert_eq!(json["posts"][0]["post_type"], "post");
}

#[tokio::test]
async fn home_serves_only_the_latest_homepage() {
    let state = test_state(test_config());
    create_homepage(&state, "First", "publish").await;
    create_homepage(&state, "Second", "publish").await;
    let latest = create_homepage(&state, "Third", "publish").await;

    let response = get(build_test_app(&state), "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["is_home"], true);
    assert_eq!(json["is_404"], false);
    assert_eq!(json["posts"].as_array().unwrap().len(), 1);
    assert_eq!(json["posts"][0]["id"], latest);
}

#[tokio::test]
async fn later_draft_does_not_replace_latest() {
    let state = test_state(test_config());
    let published = create_homepage(&state, "Live", "publish").await;
    create_homepage(&state, "Work in progress", "draft").await;

    let json = body_json(get(build_test_app(&state), "/").await).await;
    assert_eq!(json["posts"][0]["id"], published);
}

#[tokio::test]
async fn second_home_page_is_not_found() {
    let state = test_state(test_config());
    for title in ["A", "B", "C"] {
        create_homepage(&state, title, "publish").await;
    }

    let response = get(build_test_app(&state), "/?paged=2").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["is_404"], true);
    assert_eq!(json["is_home"], false);
    assert!(json["posts"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn publishing_a_draft_activates_the_home_view() {
    let state = test_state(test_config());
    let draft = create_homepage(&state, "Soon", "draft").await;
    assert!(!state.homepages.has_homepage());

    let token = editor_token(&state);
    let response = put_json_auth(
        build_test_app(&state),
        &format!("/wp/v2/homepage/{draft}"),
        serde_json::json!({ "status": "publish" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(state.homepages.has_homepage());

    let json = body_json(get(build_test_app(&state), "/").await).await;
    assert_eq!(json["posts"][0]["id"], draft);
}

// ---------------------------------------------------------------------------
// Homepage permalinks
// ---------------------------------------------------------------------------

#[tokio::test]
async fn permalink_is_not_found_for_anonymous_visitors() {
    let state = test_state(test_config());
    let id = create_homepage(&state, "Edition", "publish").await;

    let response = get(build_test_app(&state), &format!("/homepage/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["title"], "Page not found");
}

#[tokio::test]
async fn permalink_renders_as_home_for_signed_in_visitors() {
    let state = test_state(test_config());
    let id = create_homepage(&state, "Edition", "publish").await;
    let token = editor_token(&state);

    let response = get_auth(build_test_app(&state), &format!("/homepage/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["is_home"], true);
    assert_eq!(json["posts"][0]["id"], id);
    assert_eq!(json["title"], "Edition");
}

#[tokio::test]
async fn draft_permalink_is_visible_to_signed_in_visitors_only() {
    let state = test_state(test_config());
    let id = create_homepage(&state, "Draft edition", "draft").await;
    let token = editor_token(&state);
    let uri = format!("/homepage/{id}");

    let anonymous = get(build_test_app(&state), &uri).await;
    assert_eq!(anonymous.status(), StatusCode::NOT_FOUND);

    let signed_in = get_auth(build_test_app(&state), &uri, &token).await;
    assert_eq!(signed_in.status(), StatusCode::OK);
}

#[tokio::test]
async fn invalid_token_counts_as_anonymous() {
    let state = test_state(test_config());
    let id = create_homepage(&state, "Edition", "publish").await;

    let response = get_auth(build_test_app(&state), &format!("/homepage/{id}"), "garbage").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Static front page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn static_front_page_serves_latest_homepage() {
    let state = static_front_state();
    create_homepage(&state, "Older", "publish").await;
    let latest = create_homepage(&state, "Newer", "publish").await;

    let response = get(build_test_app(&state), "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["is_home"], true);
    assert_eq!(json["posts"][0]["id"], latest);
    assert_eq!(json["title"], "Welcome");
}

#[tokio::test]
async fn static_front_page_by_id_is_intercepted_too() {
    let state = static_front_state();
    let latest = create_homepage(&state, "Edition", "publish").await;
    let page_id = front_page_id(&state);

    for uri in [format!("/pages/{page_id}"), format!("/?page_id={page_id}")] {
        let json = body_json(get(build_test_app(&state), &uri).await).await;
        assert_eq!(json["posts"][0]["id"], latest, "{uri}");
    }
}

#[tokio::test]
async fn static_front_page_without_homepages_shows_the_page() {
    let state = static_front_state();

    let json = body_json(get(build_test_app(&state), "/").await).await;
    assert_eq!(json["posts"][0]["title"], "Welcome");
}

#[tokio::test]
async fn static_front_page_follows_new_publications() {
    let state = static_front_state();
    let first = create_homepage(&state, "First", "publish").await;

    let json = body_json(get(build_test_app(&state), "/").await).await;
    assert_eq!(json["posts"][0]["id"], first);

    let second = create_homepage(&state, "Second", "publish").await;

    let json = body_json(get(build_test_app(&state), "/").await).await;
    assert_eq!(json["posts"][0]["id"], second);
}

#[tokio::test]
async fn preview_shows_requested_homepage_to_editors() {
    let state = static_front_state();
    let published = create_homepage(&state, "Live", "publish").await;
    let draft = create_homepage(&state, "Next", "draft").await;
    let token = editor_token(&state);
    let uri = format!("/?p={draft}&preview=true");

    let json = body_json(get_auth(build_test_app(&state), &uri, &token).await).await;
    assert_eq!(json["posts"][0]["id"], draft);

    let json = body_json(get(build_test_app(&state), &uri).await).await;
    assert_eq!(json["posts"][0]["id"], published);
}
