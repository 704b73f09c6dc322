// File: src/routes.rs
// Purpose: Blog route table and the views it resolves to

use adw_router::RouteTable;
use std::fmt;

/// Routable screens of the blog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Feed,
    Post,
    PostEditor,
    Login,
    Register,
    Settings,
    Profile,
}

impl View {
    pub const ALL: [View; 7] = [
        View::Feed,
        View::Post,
        View::PostEditor,
        View::Login,
        View::Register,
        View::Settings,
        View::Profile,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Feed => "feed",
            Self::Post => "post",
            Self::PostEditor => "post-editor",
            Self::Login => "login",
            Self::Register => "register",
            Self::Settings => "settings",
            Self::Profile => "profile",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|view| view.name() == name)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pattern → view, in match order
pub const BLOG_ROUTES: &[(&str, View)] = &[
    ("/", View::Feed),
    ("/feed", View::Feed),
    ("/feed/page/:page", View::Feed),
    ("/posts/new", View::PostEditor),
    ("/posts/:id", View::Post),
    ("/login", View::Login),
    ("/register", View::Register),
    ("/settings", View::Settings),
    ("/profile/:id", View::Profile),
];

pub fn blog_routes(case_insensitive: bool) -> RouteTable {
    BLOG_ROUTES.iter().fold(
        RouteTable::new().with_case_insensitive(case_insensitive),
        |table, (pattern, view)| table.with_route(pattern, view.name()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("#/", "feed", None)]
    #[case("#/feed/page/3", "feed", Some(("page", "3")))]
    #[case("#/posts/new", "post-editor", None)]
    #[case("#/posts/42", "post", Some(("id", "42")))]
    #[case("#/profile/ada", "profile", Some(("id", "ada")))]
    #[case("#/Settings/", "settings", None)]
    fn test_blog_routes(
        #[case] hash: &str,
        #[case] view: &str,
        #[case] param: Option<(&str, &str)>,
    ) {
        let found = blog_routes(true).match_path(hash).unwrap();
        assert_eq!(found.view, view);
        if let Some((name, value)) = param {
            assert_eq!(found.param(name), Some(value));
        }
    }

    #[test]
    fn test_posts_new_is_not_a_post_id() {
        let found = blog_routes(true).match_path("#/posts/new").unwrap();
        assert!(found.params.is_empty());
    }

    #[test]
    fn test_every_route_names_a_view() {
        for route in blog_routes(true).routes() {
            assert!(View::from_name(&route.view).is_some(), "{}", route.pattern);
        }
    }
}
