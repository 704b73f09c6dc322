//! # Adwaita Router
//!
//! A zero-dependency hash-fragment router:
//! - Static routes (`/login`)
//! - Parameter segments (`/posts/:id`)
//! - Exact literal lookup before the ordered scan
//! - First-declared-wins among structurally equal candidates
//!
//! There are no wildcard, optional or catch-all segments: a route can only
//! match a path with the same number of segments.
//!
//! ## Path Normalization
//!
//! Incoming hashes are normalized before matching:
//! - Leading hash: `#/posts/42` → `/posts/42`
//! - Case folding: `/Posts` → `/posts` (default, see [`RouteTable::with_case_insensitive`])
//! - Trailing and double slashes: `/posts//42/` → `/posts/42`
//!
//! ## Example
//!
//! ```
//! use adw_router::RouteTable;
//!
//! let table = RouteTable::new()
//!     .with_route("/", "feed")
//!     .with_route("/posts/:id", "post");
//!
//! let found = table.match_path("#/posts/42").unwrap();
//! assert_eq!(found.view, "post");
//! assert_eq!(found.params.get("id"), Some(&"42".to_string()));
//!
//! assert!(table.match_path("#/unknownpath").is_none());
//! ```

use std::collections::HashMap;

pub mod path;
pub mod route;

pub use path::{is_canonical_path, normalize_path};
pub use route::pattern::{classify_segment, parse_pattern, split_segments, Segment};

// ============================================================================
// Core Types
// ============================================================================

/// A single entry of the route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Normalized pattern like "/posts/:id"
    pub pattern: String,
    /// Typed segments of the pattern
    pub segments: Vec<Segment>,
    /// Logical view rendered for this route
    pub view: String,
}

impl Route {
    /// Creates a route from a pattern and a view name
    ///
    /// # Examples
    ///
    /// ```
    /// use adw_router::Route;
    ///
    /// let route = Route::new("posts/:id/", "post", true);
    /// assert_eq!(route.pattern, "/posts/:id");
    /// assert_eq!(route.params(), vec!["id"]);
    /// ```
    pub fn new(pattern: &str, view: impl Into<String>, fold_case: bool) -> Self {
        // Parameter names must keep their spelling, so only the separators are
        // normalized here and literal folding happens in `parse_pattern`.
        let pattern = normalize_path(pattern, false).into_owned();
        let segments = parse_pattern(&pattern, fold_case);
        let pattern = render_pattern(&segments);

        Route {
            pattern,
            segments,
            view: view.into(),
        }
    }

    /// Names of the parameter segments, in order
    pub fn params(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Param(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Returns true when the pattern has no parameter segments
    pub fn is_literal(&self) -> bool {
        !self.segments.iter().any(Segment::is_param)
    }

    /// Matches this route against an already normalized path
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        route::match_segments(&self.segments, &split_segments(path))
    }

    /// Substitutes parameters into the pattern, producing a `#/...` hash
    ///
    /// Returns None if any parameter is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use adw_router::Route;
    /// use std::collections::HashMap;
    ///
    /// let route = Route::new("/posts/:id", "post", true);
    /// let mut params = HashMap::new();
    /// params.insert("id".to_string(), "42".to_string());
    ///
    /// assert_eq!(route.generate_hash(&params), Some("#/posts/42".to_string()));
    /// assert_eq!(route.generate_hash(&HashMap::new()), None);
    /// ```
    pub fn generate_hash(&self, params: &HashMap<String, String>) -> Option<String> {
        let parts = self
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => Some(text.clone()),
                Segment::Param(name) => params.get(name).cloned(),
            })
            .collect::<Option<Vec<_>>>()?;

        Some(format!("#/{}", parts.join("/")))
    }
}

fn render_pattern(segments: &[Segment]) -> String {
    let parts: Vec<String> = segments
        .iter()
        .map(|segment| match segment {
            Segment::Literal(text) => text.clone(),
            Segment::Param(name) => format!(":{}", name),
        })
        .collect();
    format!("/{}", parts.join("/"))
}

/// Result of matching a path against the route table
///
/// Created fresh per navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// View name of the matched route
    pub view: String,
    /// Pattern that matched
    pub pattern: String,
    /// Values bound to `:name` segments
    pub params: HashMap<String, String>,
}

impl RouteMatch {
    /// Gets a bound parameter by name
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

// ============================================================================
// Route Table
// ============================================================================

/// Static, ordered route table
///
/// - `routes` keeps declaration order for the structural scan
/// - `exact` indexes literal-only patterns for O(1) lookup
///
/// Routes are added during startup through the builder methods and are
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    exact: HashMap<String, usize>,
    case_insensitive: bool,
}

impl RouteTable {
    /// Creates an empty, case-insensitive route table
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            exact: HashMap::new(),
            case_insensitive: true,
        }
    }

    /// Configures case folding (functional builder)
    ///
    /// Must be called before routes are added; literal segments are folded
    /// when the route is added.
    ///
    /// # Examples
    ///
    /// ```
    /// use adw_router::RouteTable;
    ///
    /// let table = RouteTable::new()
    ///     .with_case_insensitive(false)
    ///     .with_route("/About", "about");
    ///
    /// assert!(table.match_path("#/About").is_some());
    /// assert!(table.match_path("#/about").is_none());
    /// ```
    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Appends a route (functional builder)
    ///
    /// Declaration order is matching order.
    pub fn with_route(mut self, pattern: &str, view: impl Into<String>) -> Self {
        let route = Route::new(pattern, view, self.case_insensitive);

        if route.is_literal() {
            // First declaration of a literal pattern owns the fast path
            self.exact
                .entry(route.pattern.clone())
                .or_insert(self.routes.len());
        }

        self.routes.push(route);
        self
    }

    /// Appends several routes in order (functional builder)
    pub fn with_routes<'a, I>(self, routes: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        routes
            .into_iter()
            .fold(self, |table, (pattern, view)| table.with_route(pattern, view))
    }

    /// Whether paths are case-folded before matching
    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// All routes in declaration order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Matches a hash fragment or path against the table
    ///
    /// 1. Normalize (strip `#`, fold case, tidy slashes)
    /// 2. Exact literal lookup
    /// 3. Ordered scan over routes with an equal segment count
    ///
    /// Returns None when nothing matches; callers render their not-found view.
    pub fn match_path(&self, path: &str) -> Option<RouteMatch> {
        let normalized = normalize_path(path, self.case_insensitive);

        if let Some(&index) = self.exact.get(normalized.as_ref()) {
            let route = &self.routes[index];
            return Some(RouteMatch {
                view: route.view.clone(),
                pattern: route.pattern.clone(),
                params: HashMap::new(),
            });
        }

        let segments = split_segments(&normalized);
        self.routes.iter().find_map(|route| {
            route::match_segments(&route.segments, &segments).map(|params| RouteMatch {
                view: route.view.clone(),
                pattern: route.pattern.clone(),
                params,
            })
        })
    }

    /// Builds a `#/...` hash for the first route rendering `view`
    ///
    /// # Examples
    ///
    /// ```
    /// use adw_router::RouteTable;
    /// use std::collections::HashMap;
    ///
    /// let table = RouteTable::new().with_route("/posts/:id", "post");
    /// let mut params = HashMap::new();
    /// params.insert("id".to_string(), "7".to_string());
    ///
    /// assert_eq!(table.url_for("post", &params), Some("#/posts/7".to_string()));
    /// assert_eq!(table.url_for("missing", &params), None);
    /// ```
    pub fn url_for(&self, view: &str, params: &HashMap<String, String>) -> Option<String> {
        let mut candidates = self.routes.iter().filter(|route| route.view == view);

        // Prefer the route that consumes exactly the given parameters
        candidates
            .clone()
            .filter(|route| route.params().len() == params.len())
            .find_map(|route| route.generate_hash(params))
            .or_else(|| candidates.find_map(|route| route.generate_hash(params)))
    }

    /// Builds a hash from parameter pairs (convenience wrapper)
    pub fn url_for_params(&self, view: &str, params: &[(&str, &str)]) -> Option<String> {
        let params = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.url_for(view, &params)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}
