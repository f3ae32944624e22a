use pulse_common::{Event, EventId, NewEvent, PulseError, User};
use tracing::{debug, info};

use crate::router::{Route, Router};
use crate::session::Session;
use crate::store::EventStore;
use crate::view::View;

pub const EVENT_CREATED_NOTICE: &str = "Event created successfully!";
pub const REGISTERED_NOTICE: &str = "Successfully registered for the event!";

/// Outcome of a registration attempt by a logged-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Registered,
    AlreadyRegistered,
}

/// Owns the whole application state: events, the session, the current route,
/// the search box and queued notices. Every user action is a method call that
/// runs to completion before the next one.
#[derive(Debug, Clone, Default)]
pub struct Pulse {
    store: EventStore,
    session: Session,
    router: Router,
    search_query: String,
    notices: Vec<String>,
}

impl Pulse {
    pub fn new(store: EventStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.current_user()
    }

    pub fn current_route(&self) -> &Route {
        self.router.current()
    }

    // --- Events ---

    pub fn list_events(&self) -> &[Event] {
        self.store.list()
    }

    pub fn filter_events(&self, query: &str) -> Vec<&Event> {
        self.store.filter(query)
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Create an event authored by the current user and open its details
    /// page. Anonymous callers are sent to the login page instead.
    pub fn create_event(&mut self, fields: NewEvent) -> Result<Event, PulseError> {
        let Some(user) = self.session.current_user().cloned() else {
            self.router.navigate(Route::Login);
            return Err(PulseError::AuthRequired);
        };

        let event = self.store.insert(fields, &user).clone();
        self.session.mark_authored(event.id);
        info!(event_id = %event.id, organizer = %event.organizer, "Event created");

        self.notices.push(EVENT_CREATED_NOTICE.to_string());
        self.router.navigate(Route::EventDetails { id: event.id });
        Ok(event)
    }

    /// Register the current user for `id`. Registering twice is a no-op;
    /// events whose registration is closed are refused.
    pub fn register_for_event(&mut self, id: EventId) -> Result<Registration, PulseError> {
        if !self.session.is_authenticated() {
            self.router.navigate(Route::Login);
            return Err(PulseError::AuthRequired);
        }
        match self.store.get(id) {
            None => return Err(PulseError::EventNotFound(id)),
            Some(event) if !event.registration_open => {
                return Err(PulseError::RegistrationClosed(id));
            }
            Some(_) => {}
        }

        if self.session.mark_registered(id) {
            info!(event_id = %id, "Registered for event");
            self.notices.push(REGISTERED_NOTICE.to_string());
            Ok(Registration::Registered)
        } else {
            debug!(event_id = %id, "Already registered");
            Ok(Registration::AlreadyRegistered)
        }
    }

    // --- Auth ---

    pub fn login(&mut self, username: &str, password: &str) -> Result<User, PulseError> {
        let user = self.session.login(username, password)?.clone();
        self.router.navigate(Route::Home);
        Ok(user)
    }

    pub fn register(
        &mut self,
        username: &str,
        email: &str,
        phone: &str,
        password: &str,
    ) -> Result<User, PulseError> {
        let user = self.session.register(username, email, phone, password)?.clone();
        self.router.navigate(Route::Home);
        Ok(user)
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.router.navigate(Route::Home);
    }

    // --- Navigation ---

    pub fn navigate(&mut self, route: Route) {
        self.router.navigate(route);
    }

    /// Resolve the current route into a view, applying the page guards:
    /// account pages need a user (else `Login`), event details need an
    /// existing event (else `Home`). A guard that fires also moves the router.
    pub fn resolve(&mut self) -> View {
        let route = self.router.current().clone();

        if route.requires_user() && !self.session.is_authenticated() {
            debug!(route = route.name(), "Anonymous visitor, redirecting to login");
            self.router.navigate(Route::Login);
            return View::Login;
        }

        match route {
            Route::Home => self.home_view(),
            Route::Login => View::Login,
            Route::Register => View::Register,
            Route::EventDetails { id } => match self.store.get(id) {
                Some(event) => View::EventDetails {
                    event: event.clone(),
                    is_registered: self.session.is_registered(id),
                    is_authored: self.session.is_authored(id),
                },
                None => {
                    debug!(event_id = %id, "Unknown event, redirecting home");
                    self.router.navigate(Route::Home);
                    self.home_view()
                }
            },
            Route::AddEvent => View::AddEvent,
            Route::MyEvents => View::MyEvents {
                events: self.owned(|s, id| s.is_authored(id)),
            },
            Route::RegisteredEvents => View::RegisteredEvents {
                events: self.owned(|s, id| s.is_registered(id)),
            },
            Route::NotFound { name } => View::NotFound { name },
        }
    }

    /// Drain the notices queued since the last call.
    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    fn home_view(&self) -> View {
        View::Home {
            query: self.search_query.clone(),
            events: self
                .store
                .filter(&self.search_query)
                .into_iter()
                .cloned()
                .collect(),
        }
    }

    fn owned(&self, member: impl Fn(&Session, EventId) -> bool) -> Vec<Event> {
        self.store
            .select(|id| member(&self.session, id))
            .into_iter()
            .cloned()
            .collect()
    }
}
