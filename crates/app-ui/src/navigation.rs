//! Navigation system for CentreGuide
//!
//! This module provides a type-safe navigation framework with:
//! - Navigation stack management per tab
//! - Bottom tab navigation
//! - Route definitions with deep linking support
//! - Navigation state management

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Route Parameters
// =============================================================================

/// Parameters for a route
pub type RouteParams = HashMap<String, String>;

/// Parameters for the store details screen
///
/// `id`, `name`, and `floor` are always present; the rest is shown only when
/// the originating screen had it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreDetailsParams {
    /// Store identifier
    pub id: String,
    /// Store name shown in the title bar
    pub name: String,
    /// Floor label, e.g. "Level 1"
    pub floor: String,
    /// Category label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Walking distance label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
}

impl StoreDetailsParams {
    /// Create the required parameter set
    pub fn new(id: impl Into<String>, name: impl Into<String>, floor: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            floor: floor.into(),
            category: None,
            distance: None,
        }
    }

    /// Set the category label
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the distance label
    pub fn with_distance(mut self, distance: impl Into<String>) -> Self {
        self.distance = Some(distance.into());
        self
    }
}

impl From<&app_core::directory::StoreRecord> for StoreDetailsParams {
    fn from(store: &app_core::directory::StoreRecord) -> Self {
        Self::new(&store.id, &store.name, &store.floor)
            .with_category(&store.category)
            .with_distance(&store.distance)
    }
}

// =============================================================================
// Route Definitions
// =============================================================================

/// All possible routes in the application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "route", content = "params")]
pub enum Route {
    // Tab roots
    /// Home dashboard
    Home,
    /// Centre map and wayfinding
    Map,
    /// Offers list
    Offers,
    /// Trip planner
    Planner,
    /// Settings
    Settings,

    // Stack screens
    /// Store directory with search
    Directory {
        /// Initial search query
        #[serde(skip_serializing_if = "Option::is_none")]
        q: Option<String>,
    },
    /// Store details
    StoreDetails(StoreDetailsParams),
    /// Notification inbox
    Notifications,

    // Error
    /// Not found
    NotFound,
}

impl Default for Route {
    fn default() -> Self {
        Route::Home
    }
}

impl Route {
    /// Get the URL path for this route
    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Map => "/map".to_string(),
            Route::Offers => "/offers".to_string(),
            Route::Planner => "/planner".to_string(),
            Route::Settings => "/settings".to_string(),
            Route::Directory { q } => {
                let mut path = "/directory".to_string();
                if let Some(q) = q {
                    path.push_str(&format!("?q={}", urlencoding::encode(q)));
                }
                path
            }
            Route::StoreDetails(params) => {
                let mut query = vec![
                    format!("name={}", urlencoding::encode(&params.name)),
                    format!("floor={}", urlencoding::encode(&params.floor)),
                ];
                if let Some(category) = &params.category {
                    query.push(format!("category={}", urlencoding::encode(category)));
                }
                if let Some(distance) = &params.distance {
                    query.push(format!("distance={}", urlencoding::encode(distance)));
                }
                format!("/store/{}?{}", urlencoding::encode(&params.id), query.join("&"))
            }
            Route::Notifications => "/notifications".to_string(),
            Route::NotFound => "/not-found".to_string(),
        }
    }

    /// Get a display title for this route
    pub fn title(&self) -> String {
        match self {
            Route::Home => "Home".to_string(),
            Route::Map => "Map".to_string(),
            Route::Offers => "Offers".to_string(),
            Route::Planner => "Planner".to_string(),
            Route::Settings => "Settings".to_string(),
            Route::Directory { .. } => "Directory".to_string(),
            Route::StoreDetails(params) => params.name.clone(),
            Route::Notifications => "Notifications".to_string(),
            Route::NotFound => "Not Found".to_string(),
        }
    }
}

// =============================================================================
// Navigation Tabs
// =============================================================================

/// Bottom navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavigationTab {
    /// Home tab
    #[default]
    Home,
    /// Map tab
    Map,
    /// Offers tab
    Offers,
    /// Planner tab
    Planner,
    /// Settings tab
    Settings,
}

impl NavigationTab {
    /// Get the root route for this tab
    pub fn root_route(&self) -> Route {
        match self {
            NavigationTab::Home => Route::Home,
            NavigationTab::Map => Route::Map,
            NavigationTab::Offers => Route::Offers,
            NavigationTab::Planner => Route::Planner,
            NavigationTab::Settings => Route::Settings,
        }
    }

    /// Get icon name for this tab
    pub fn icon(&self) -> &'static str {
        match self {
            NavigationTab::Home => "home",
            NavigationTab::Map => "map",
            NavigationTab::Offers => "tag",
            NavigationTab::Planner => "clipboard-list",
            NavigationTab::Settings => "cog",
        }
    }

    /// Get label for this tab
    pub fn label(&self) -> &'static str {
        match self {
            NavigationTab::Home => "Home",
            NavigationTab::Map => "Map",
            NavigationTab::Offers => "Offers",
            NavigationTab::Planner => "Planner",
            NavigationTab::Settings => "Settings",
        }
    }

    /// Get all tabs in order
    pub fn all() -> [NavigationTab; 5] {
        [
            NavigationTab::Home,
            NavigationTab::Map,
            NavigationTab::Offers,
            NavigationTab::Planner,
            NavigationTab::Settings,
        ]
    }
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route: Route) -> Self {
        Self { route, key: uuid::Uuid::new_v4().to_string() }
    }
}

/// Navigation stack for a tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    /// Stack entries (bottom to top)
    entries: Vec<StackEntry>,
    /// Root route for this stack
    root: Route,
}

impl NavigationStack {
    /// Create a new navigation stack with a root route
    pub fn new(root: Route) -> Self {
        Self { entries: vec![StackEntry::new(root.clone())], root }
    }

    /// Push a route onto the stack
    pub fn push(&mut self, route: Route) {
        self.entries.push(StackEntry::new(route));
    }

    /// Pop the top route (returns true if popped, false if at root)
    pub fn pop(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    /// Pop to root
    pub fn pop_to_root(&mut self) {
        self.entries.truncate(1);
    }

    /// Replace the top route
    pub fn replace(&mut self, route: Route) {
        if let Some(last) = self.entries.last_mut() {
            *last = StackEntry::new(route);
        }
    }

    /// Get the current (top) route
    pub fn current(&self) -> &Route {
        &self.entries.last().expect("Stack should never be empty").route
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Get all entries
    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }

    /// Reset to a new root
    pub fn reset(&mut self, route: Route) {
        self.root = route.clone();
        self.entries = vec![StackEntry::new(route)];
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// Complete navigation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    /// Current active tab
    pub active_tab: NavigationTab,
    /// Stacks for each tab
    pub tab_stacks: HashMap<NavigationTab, NavigationStack>,
    /// Modal stack (overlays on top of tab content)
    pub modal_stack: Vec<StackEntry>,
}

impl Default for NavigationState {
    fn default() -> Self {
        let mut tab_stacks = HashMap::new();
        for tab in NavigationTab::all() {
            tab_stacks.insert(tab, NavigationStack::new(tab.root_route()));
        }

        Self { active_tab: NavigationTab::Home, tab_stacks, modal_stack: Vec::new() }
    }
}

impl NavigationState {
    /// Create a new navigation state
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current stack for the active tab
    pub fn current_stack(&self) -> &NavigationStack {
        self.tab_stacks.get(&self.active_tab).expect("All tabs should have stacks")
    }

    /// Get mutable current stack
    pub fn current_stack_mut(&mut self) -> &mut NavigationStack {
        self.tab_stacks.get_mut(&self.active_tab).expect("All tabs should have stacks")
    }

    /// Get the current route (considering modals)
    pub fn current_route(&self) -> &Route {
        if let Some(modal) = self.modal_stack.last() {
            &modal.route
        } else {
            self.current_stack().current()
        }
    }

    /// Navigate to a route on the active tab's stack
    pub fn navigate(&mut self, route: Route) {
        self.current_stack_mut().push(route);
    }

    /// Go back, dismissing a modal before popping the stack
    pub fn go_back(&mut self) -> bool {
        if !self.modal_stack.is_empty() {
            self.modal_stack.pop();
            return true;
        }
        self.current_stack_mut().pop()
    }

    /// Switch to a tab, preserving its stack
    pub fn switch_tab(&mut self, tab: NavigationTab) {
        self.active_tab = tab;
    }

    /// Reset a tab to its root and make it active
    pub fn reset_to_tab(&mut self, tab: NavigationTab) {
        if let Some(stack) = self.tab_stacks.get_mut(&tab) {
            stack.pop_to_root();
        }
        self.active_tab = tab;
    }

    /// Present a modal
    pub fn present_modal(&mut self, route: Route) {
        self.modal_stack.push(StackEntry::new(route));
    }

    /// Dismiss the top modal
    pub fn dismiss_modal(&mut self) -> bool {
        self.modal_stack.pop().is_some()
    }

    /// Check if any modals are presented
    pub fn has_modals(&self) -> bool {
        !self.modal_stack.is_empty()
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        !self.modal_stack.is_empty() || self.current_stack().can_go_back()
    }

    /// Reset entire navigation state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// Router
// =============================================================================

/// Route pattern for matching
struct RoutePattern {
    /// Pattern segments
    segments: Vec<PatternSegment>,
    /// Route builder
    builder: fn(RouteParams) -> Option<Route>,
}

/// Segment type in a pattern
#[derive(Debug, Clone)]
enum PatternSegment {
    /// Literal segment
    Literal(String),
    /// Parameter segment
    Param(String),
}

/// URL Router for parsing paths to routes
pub struct Router {
    /// Route patterns
    patterns: Vec<RoutePattern>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Create a new router with all routes
    pub fn new() -> Self {
        let mut router = Self { patterns: Vec::new() };

        router.add_route("/", |_| Some(Route::Home));
        router.add_route("/map", |_| Some(Route::Map));
        router.add_route("/offers", |_| Some(Route::Offers));
        router.add_route("/planner", |_| Some(Route::Planner));
        router.add_route("/settings", |_| Some(Route::Settings));
        router.add_route("/directory", |params| {
            Some(Route::Directory { q: params.get("q").cloned() })
        });
        // name and floor are mandatory; a link without them is not a store link
        router.add_route("/store/:id", |params| {
            Some(Route::StoreDetails(StoreDetailsParams {
                id: params.get("id")?.clone(),
                name: params.get("name")?.clone(),
                floor: params.get("floor")?.clone(),
                category: params.get("category").cloned(),
                distance: params.get("distance").cloned(),
            }))
        });
        router.add_route("/notifications", |_| Some(Route::Notifications));

        router
    }

    /// Add a route pattern
    fn add_route(&mut self, pattern: &str, builder: fn(RouteParams) -> Option<Route>) {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                if let Some(param) = s.strip_prefix(':') {
                    PatternSegment::Param(param.to_string())
                } else {
                    PatternSegment::Literal(s.to_string())
                }
            })
            .collect();

        self.patterns.push(RoutePattern { segments, builder });
    }

    /// Match a path to a route
    pub fn match_path(&self, path: &str) -> Route {
        let (pathname, query) = match path.find('?') {
            Some(idx) => (&path[..idx], Some(&path[idx + 1..])),
            None => (path, None),
        };

        let path_segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();

        for pattern in &self.patterns {
            if let Some(params) = Self::match_pattern(&pattern.segments, &path_segments, query) {
                if let Some(route) = (pattern.builder)(params) {
                    return route;
                }
            }
        }

        Route::NotFound
    }

    /// Match a pattern against path segments, merging in query parameters
    fn match_pattern(
        pattern: &[PatternSegment],
        segments: &[&str],
        query: Option<&str>,
    ) -> Option<RouteParams> {
        if pattern.len() != segments.len() {
            return None;
        }

        let mut params = RouteParams::new();
        for (expected, actual) in pattern.iter().zip(segments) {
            match expected {
                PatternSegment::Literal(literal) => {
                    if literal != actual {
                        return None;
                    }
                }
                PatternSegment::Param(name) => {
                    let value = urlencoding::decode(actual).ok()?;
                    params.insert(name.clone(), value.into_owned());
                }
            }
        }

        if let Some(query) = query {
            for pair in query.split('&') {
                if let Some((key, value)) = pair.split_once('=') {
                    if let Ok(value) = urlencoding::decode(value) {
                        params.insert(key.to_string(), value.into_owned());
                    }
                }
            }
        }

        Some(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Offers.to_path(), "/offers");
        assert_eq!(Route::Directory { q: None }.to_path(), "/directory");
        assert_eq!(
            Route::Directory { q: Some("shoes".to_string()) }.to_path(),
            "/directory?q=shoes"
        );
    }

    #[test]
    fn test_store_details_path_round_trip() {
        let route = Route::StoreDetails(
            StoreDetailsParams::new("2", "Apple Store", "Level 2")
                .with_category("Tech")
                .with_distance("6 min"),
        );
        let path = route.to_path();
        assert_eq!(Router::new().match_path(&path), route);
    }

    #[test]
    fn test_store_link_requires_name_and_floor() {
        let router = Router::new();
        assert_eq!(router.match_path("/store/2"), Route::NotFound);
        assert_eq!(router.match_path("/store/2?name=Apple%20Store"), Route::NotFound);

        let matched = router.match_path("/store/2?name=Apple%20Store&floor=Level%202");
        match matched {
            Route::StoreDetails(params) => {
                assert_eq!(params.name, "Apple Store");
                assert_eq!(params.floor, "Level 2");
                assert!(params.category.is_none());
            }
            other => panic!("unexpected route: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(Router::new().match_path("/nope"), Route::NotFound);
    }

    #[test]
    fn test_store_title_uses_store_name() {
        let route = Route::StoreDetails(StoreDetailsParams::new("1", "Uniqlo", "Level 1"));
        assert_eq!(route.title(), "Uniqlo");
        assert_eq!(Route::Map.title(), "Map");
    }

    #[test]
    fn test_stack_push_pop() {
        let mut stack = NavigationStack::new(Route::Home);
        assert!(!stack.can_go_back());
        assert!(!stack.pop());

        stack.push(Route::Notifications);
        assert_eq!(stack.current(), &Route::Notifications);
        assert!(stack.pop());
        assert_eq!(stack.current(), &Route::Home);
    }

    #[test]
    fn test_tab_switch_preserves_stacks() {
        let mut state = NavigationState::new();
        state.navigate(Route::Directory { q: None });
        assert_eq!(state.current_stack().depth(), 2);

        state.switch_tab(NavigationTab::Offers);
        assert_eq!(state.current_route(), &Route::Offers);

        state.switch_tab(NavigationTab::Home);
        assert_eq!(state.current_route(), &Route::Directory { q: None });
    }

    #[test]
    fn test_go_back_prefers_modal() {
        let mut state = NavigationState::new();
        state.navigate(Route::Notifications);
        state.present_modal(Route::Settings);

        assert!(state.go_back());
        assert!(!state.has_modals());
        assert_eq!(state.current_route(), &Route::Notifications);

        assert!(state.go_back());
        assert_eq!(state.current_route(), &Route::Home);
        assert!(!state.go_back());
    }

    #[test]
    fn test_reset_to_tab_pops_its_stack() {
        let mut state = NavigationState::new();
        state.navigate(Route::Directory { q: None });
        state.reset_to_tab(NavigationTab::Home);
        assert_eq!(state.current_route(), &Route::Home);
        assert!(!state.can_go_back());
    }

    #[test]
    fn test_all_tabs_have_distinct_roots() {
        let roots: std::collections::HashSet<Route> =
            NavigationTab::all().iter().map(|t| t.root_route()).collect();
        assert_eq!(roots.len(), NavigationTab::all().len());
    }
}
