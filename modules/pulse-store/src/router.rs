use pulse_common::EventId;
use tracing::debug;

/// A navigable view plus its typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    EventDetails { id: EventId },
    AddEvent,
    MyEvents,
    RegisteredEvents,
    /// Any route name the router doesn't know. Rendered as "page not found".
    NotFound { name: String },
}

impl Route {
    /// Build a route from its name and an optional raw `id` parameter.
    ///
    /// `eventDetails` without a numeric id can never resolve to an event, so
    /// it goes straight to `Home`.
    pub fn from_name(name: &str, id: Option<&str>) -> Self {
        match name {
            "home" => Route::Home,
            "login" => Route::Login,
            "register" => Route::Register,
            "eventDetails" => match id.and_then(|raw| raw.parse().ok()) {
                Some(id) => Route::EventDetails { id },
                None => Route::Home,
            },
            "addEvent" => Route::AddEvent,
            "myEvents" => Route::MyEvents,
            "registeredEvents" => Route::RegisteredEvents,
            other => Route::NotFound {
                name: other.to_string(),
            },
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Route::Home => "home",
            Route::Login => "login",
            Route::Register => "register",
            Route::EventDetails { .. } => "eventDetails",
            Route::AddEvent => "addEvent",
            Route::MyEvents => "myEvents",
            Route::RegisteredEvents => "registeredEvents",
            Route::NotFound { name } => name,
        }
    }

    /// Canonical URL path for the route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::EventDetails { id } => format!("/events/{id}"),
            Route::AddEvent => "/events/new".to_string(),
            Route::MyEvents => "/my-events".to_string(),
            Route::RegisteredEvents => "/registered-events".to_string(),
            Route::NotFound { name } => {
                if name.starts_with('/') {
                    name.clone()
                } else {
                    format!("/{name}")
                }
            }
        }
    }

    /// Inverse of [`Route::path`]. Unknown paths become `NotFound`.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Home,
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/events/new" => Route::AddEvent,
            "/my-events" => Route::MyEvents,
            "/registered-events" => Route::RegisteredEvents,
            _ => match trimmed.strip_prefix("/events/") {
                Some(raw) if !raw.contains('/') => Route::from_name("eventDetails", Some(raw)),
                _ => Route::NotFound {
                    name: path.to_string(),
                },
            },
        }
    }

    /// Views that redirect anonymous visitors to the login page.
    pub fn requires_user(&self) -> bool {
        matches!(self, Route::AddEvent | Route::MyEvents | Route::RegisteredEvents)
    }
}

/// Current-route holder. No history: each navigation replaces the route.
#[derive(Debug, Clone)]
pub struct Router {
    current: Route,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            current: Route::Home,
        }
    }
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Set the current route. Unknown routes are accepted here and only turn
    /// into the not-found view when rendered.
    pub fn navigate(&mut self, route: Route) {
        debug!(from = self.current.name(), to = route.name(), "Navigate");
        self.current = route;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_covers_every_view() {
        assert_eq!(Route::from_name("home", None), Route::Home);
        assert_eq!(Route::from_name("login", None), Route::Login);
        assert_eq!(Route::from_name("register", None), Route::Register);
        assert_eq!(Route::from_name("addEvent", None), Route::AddEvent);
        assert_eq!(Route::from_name("myEvents", None), Route::MyEvents);
        assert_eq!(Route::from_name("registeredEvents", None), Route::RegisteredEvents);
        assert_eq!(
            Route::from_name("eventDetails", Some("3")),
            Route::EventDetails { id: EventId(3) }
        );
    }

    #[test]
    fn event_details_without_numeric_id_goes_home() {
        assert_eq!(Route::from_name("eventDetails", None), Route::Home);
        assert_eq!(Route::from_name("eventDetails", Some("abc")), Route::Home);
    }

    #[test]
    fn unknown_name_is_not_found() {
        assert_eq!(
            Route::from_name("settings", None),
            Route::NotFound {
                name: "settings".to_string()
            }
        );
    }

    #[test]
    fn paths_round_trip() {
        let routes = [
            Route::Home,
            Route::Login,
            Route::Register,
            Route::EventDetails { id: EventId(12) },
            Route::AddEvent,
            Route::MyEvents,
            Route::RegisteredEvents,
        ];
        for route in routes {
            assert_eq!(Route::from_path(&route.path()), route);
        }
    }

    #[test]
    fn unknown_path_keeps_raw_text() {
        let route = Route::from_path("/admin/settings");
        assert_eq!(
            route,
            Route::NotFound {
                name: "/admin/settings".to_string()
            }
        );
        assert_eq!(route.path(), "/admin/settings");
    }

    #[test]
    fn navigate_accepts_unknown_routes() {
        let mut router = Router::new();
        assert_eq!(router.current(), &Route::Home);
        router.navigate(Route::from_name("nowhere", None));
        assert_eq!(router.current().name(), "nowhere");
    }

    #[test]
    fn only_account_views_require_user() {
        assert!(Route::AddEvent.requires_user());
        assert!(Route::MyEvents.requires_user());
        assert!(Route::RegisteredEvents.requires_user());
        assert!(!Route::Home.requires_user());
        assert!(!Route::EventDetails { id: EventId(1) }.requires_user());
    }
}
