//! Integration tests for adw-router
//!
//! Tests are organized by feature area and cover:
//! - Normalization of incoming hashes
//! - Literal and parameter matching
//! - Declaration-order tie breaking
//! - NotFound for unequal segment counts
//! - Hash generation

use adw_router::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::HashMap;

fn blog_table() -> RouteTable {
    RouteTable::new().with_routes([
        ("/", "feed"),
        ("/feed", "feed"),
        ("/feed/page/:page", "feed"),
        ("/posts/new", "post-editor"),
        ("/posts/:id", "post"),
        ("/login", "login"),
        ("/register", "register"),
        ("/settings", "settings"),
        ("/profile/:id", "profile"),
    ])
}

#[test]
fn test_post_hash_binds_id() {
    let found = blog_table().match_path("#/posts/42").unwrap();
    assert_eq!(found.view, "post");
    assert_eq!(found.pattern, "/posts/:id");
    assert_eq!(found.param("id"), Some("42"));
    assert_eq!(found.params.len(), 1);
}

#[test]
fn test_unknown_path_is_not_found() {
    assert!(blog_table().match_path("#/unknownpath").is_none());
}

#[rstest]
#[case("#/a/b/c/d")]
#[case("#/posts/42/comments")]
#[case("#/profile")]
#[case("#/settings/advanced")]
fn test_no_pattern_with_same_segment_count(#[case] path: &str) {
    assert!(blog_table().match_path(path).is_none());
}

#[rstest]
#[case("", "feed")]
#[case("#", "feed")]
#[case("#/", "feed")]
#[case("#/feed", "feed")]
#[case("#/LOGIN", "login")]
#[case("#/register/", "register")]
#[case("#//settings", "settings")]
fn test_static_routes(#[case] hash: &str, #[case] view: &str) {
    let found = blog_table().match_path(hash).unwrap();
    assert_eq!(found.view, view);
    assert!(found.params.is_empty());
}

#[test]
fn test_parameter_value_is_exact_segment() {
    let found = blog_table().match_path("#/profile/jane-doe_99").unwrap();
    assert_eq!(found.param("id"), Some("jane-doe_99"));
}

#[test]
fn test_parameter_values_are_case_folded() {
    let found = blog_table().match_path("#/Posts/AbC").unwrap();
    assert_eq!(found.param("id"), Some("abc"));
}

#[test]
fn test_case_sensitive_table_keeps_values() {
    let table = RouteTable::new()
        .with_case_insensitive(false)
        .with_route("/posts/:id", "post");

    let found = table.match_path("#/posts/AbC").unwrap();
    assert_eq!(found.param("id"), Some("AbC"));
    assert!(table.match_path("#/Posts/AbC").is_none());
}

#[test]
fn test_first_declared_wins_for_ambiguous_pair() {
    let table = RouteTable::new()
        .with_route("/items/:first", "first")
        .with_route("/items/:second", "second");

    let found = table.match_path("#/items/9").unwrap();
    assert_eq!(found.view, "first");
    assert_eq!(found.param("first"), Some("9"));
}

#[test]
fn test_first_declared_wins_for_duplicate_literals() {
    let table = RouteTable::new()
        .with_route("/about", "about-old")
        .with_route("/about", "about-new");

    assert_eq!(table.match_path("#/about").unwrap().view, "about-old");
}

#[test]
fn test_exact_literal_lookup_precedes_scan() {
    // The parameter route is declared first, yet the literal route wins
    let table = RouteTable::new()
        .with_route("/posts/:id", "post")
        .with_route("/posts/new", "post-editor");

    assert_eq!(table.match_path("#/posts/new").unwrap().view, "post-editor");
    assert_eq!(table.match_path("#/posts/5").unwrap().view, "post");
}

#[test]
fn test_mixed_literal_and_param_segments() {
    let found = blog_table().match_path("#/feed/page/3").unwrap();
    assert_eq!(found.view, "feed");
    assert_eq!(found.param("page"), Some("3"));

    assert!(blog_table().match_path("#/feed/site/3").is_none());
}

#[test]
fn test_routes_keep_declaration_order() {
    let table = blog_table();
    let views: Vec<&str> = table.routes().iter().map(|r| r.view.as_str()).collect();
    assert_eq!(
        views,
        vec![
            "feed",
            "feed",
            "feed",
            "post-editor",
            "post",
            "login",
            "register",
            "settings",
            "profile"
        ]
    );
}

#[test]
fn test_url_for_prefers_route_using_all_params() {
    let table = blog_table();
    assert_eq!(table.url_for("feed", &HashMap::new()), Some("#/".to_string()));
    assert_eq!(
        table.url_for_params("feed", &[("page", "2")]),
        Some("#/feed/page/2".to_string())
    );
    assert_eq!(
        table.url_for_params("post", &[("id", "42")]),
        Some("#/posts/42".to_string())
    );
    assert_eq!(table.url_for_params("post", &[]), None);
}

#[test]
fn test_generated_hash_round_trips() {
    let table = blog_table();
    let hash = table.url_for_params("profile", &[("id", "7")]).unwrap();
    let found = table.match_path(&hash).unwrap();
    assert_eq!(found.view, "profile");
    assert_eq!(found.param("id"), Some("7"));
}
