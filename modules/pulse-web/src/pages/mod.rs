use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::{info, warn};

use pulse_common::{display_date, display_time, Category, Event, EventId, NewEvent, PulseError};
use pulse_store::{Pulse, Route, View};

use crate::components::{
    event_to_view, render_add_event, render_event_detail, render_home, render_login,
    render_my_events, render_not_found, render_register, render_registered_events, EventDraft,
    EventView, PageContext,
};
use crate::AppState;

const LOGIN_FAILED: &str = "Invalid credentials. Please try again.";
const REGISTRATION_FAILED: &str = "Registration failed. Please check your information and try again.";

// --- Forms ---

#[derive(Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct EventForm {
    pub name: String,
    pub location: String,
    pub description: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub category: String,
    pub contact: String,
}

impl EventForm {
    /// Label of the first required field left blank.
    fn missing_field(&self) -> Option<&'static str> {
        [
            ("Event name", &self.name),
            ("Location", &self.location),
            ("Description", &self.description),
            ("Start date", &self.start_date),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
    }

    fn draft(&self) -> EventDraft {
        EventDraft {
            name: self.name.clone(),
            location: self.location.clone(),
            description: self.description.clone(),
            start_date: self.start_date.clone(),
            start_time: self.start_time.clone(),
            end_date: self.end_date.clone(),
            end_time: self.end_time.clone(),
            category: self.category.trim().to_string(),
            contact: self.contact.clone(),
        }
    }

    fn into_new_event(self, image: &str) -> NewEvent {
        let category = match self.category.trim() {
            "" => Category::Cultural,
            key => Category::parse(key),
        };
        NewEvent {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            date: display_date(&self.start_date, Some(&self.end_date)),
            time: display_time(Some(&self.start_time), Some(&self.end_time)),
            location: self.location.trim().to_string(),
            category,
            contact: Some(self.contact.trim().to_string()).filter(|c| !c.is_empty()),
            image: image.to_string(),
        }
    }
}

// --- Helpers ---

/// Page chrome for the next render. Drains queued notices.
fn page_context(pulse: &mut Pulse) -> PageContext {
    PageContext {
        username: pulse.current_user().map(|u| u.username.clone()),
        notices: pulse.take_notices(),
    }
}

fn event_views(events: &[Event]) -> Vec<EventView> {
    events.iter().map(event_to_view).collect()
}

/// Navigate to `route` and render whatever it resolves to. When a guard moves
/// the router elsewhere, the browser is redirected to the canonical path.
fn show(pulse: &mut Pulse, route: Route, requested: &str) -> Response {
    pulse.navigate(route);
    let view = pulse.resolve();
    let landed = view.route().path();
    if landed != requested {
        return Redirect::to(&landed).into_response();
    }
    render_view(pulse, view)
}

fn render_view(pulse: &mut Pulse, view: View) -> Response {
    let ctx = page_context(pulse);
    let html = match view {
        View::Home { query, events } => render_home(ctx, query, event_views(&events)),
        View::Login => render_login(ctx, None),
        View::Register => render_register(ctx, None),
        View::EventDetails {
            event,
            is_registered,
            is_authored,
        } => render_event_detail(ctx, event_to_view(&event), is_registered, is_authored),
        View::AddEvent => render_add_event(ctx, None, EventDraft::default()),
        View::MyEvents { events } => render_my_events(ctx, event_views(&events)),
        View::RegisteredEvents { events } => render_registered_events(ctx, event_views(&events)),
        View::NotFound { name } => {
            return (StatusCode::NOT_FOUND, Html(render_not_found(ctx, name))).into_response();
        }
    };
    Html(html).into_response()
}

/// Redirect to wherever the last action left the router.
fn follow(pulse: &Pulse) -> Response {
    Redirect::to(&pulse.current_route().path()).into_response()
}

fn internal_error(e: PulseError) -> Response {
    warn!(error = %e, "Request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
}

// --- Browsing ---

pub async fn home_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Response {
    let mut pulse = state.pulse.lock().await;
    if let Some(q) = params.q {
        pulse.set_search_query(q);
    }
    show(&mut pulse, Route::Home, "/")
}

pub async fn event_details_page(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    uri: Uri,
) -> Response {
    let mut pulse = state.pulse.lock().await;
    show(
        &mut pulse,
        Route::from_name("eventDetails", Some(&raw_id)),
        uri.path(),
    )
}

pub async fn my_events_page(State(state): State<Arc<AppState>>) -> Response {
    let mut pulse = state.pulse.lock().await;
    show(&mut pulse, Route::MyEvents, "/my-events")
}

pub async fn registered_events_page(State(state): State<Arc<AppState>>) -> Response {
    let mut pulse = state.pulse.lock().await;
    show(&mut pulse, Route::RegisteredEvents, "/registered-events")
}

/// Any path no other route claims.
pub async fn fallback(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let mut pulse = state.pulse.lock().await;
    show(&mut pulse, Route::from_path(uri.path()), uri.path())
}

// --- Auth ---

pub async fn login_page(State(state): State<Arc<AppState>>) -> Response {
    let mut pulse = state.pulse.lock().await;
    show(&mut pulse, Route::Login, "/login")
}

pub async fn login_submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LoginForm>,
) -> Response {
    let mut pulse = state.pulse.lock().await;
    match pulse.login(&form.username, &form.password) {
        Ok(_) => follow(&pulse),
        Err(PulseError::InvalidCredentials) => {
            pulse.navigate(Route::Login);
            let ctx = page_context(&mut pulse);
            Html(render_login(ctx, Some(LOGIN_FAILED.to_string()))).into_response()
        }
        Err(e) => internal_error(e),
    }
}

pub async fn register_page(State(state): State<Arc<AppState>>) -> Response {
    let mut pulse = state.pulse.lock().await;
    show(&mut pulse, Route::Register, "/register")
}

pub async fn register_submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<RegisterForm>,
) -> Response {
    let mut pulse = state.pulse.lock().await;
    match pulse.register(&form.username, &form.email, &form.phone, &form.password) {
        Ok(_) => follow(&pulse),
        Err(PulseError::RegistrationFailed) => {
            pulse.navigate(Route::Register);
            let ctx = page_context(&mut pulse);
            Html(render_register(ctx, Some(REGISTRATION_FAILED.to_string()))).into_response()
        }
        Err(e) => internal_error(e),
    }
}

pub async fn logout(State(state): State<Arc<AppState>>) -> Response {
    let mut pulse = state.pulse.lock().await;
    pulse.logout();
    follow(&pulse)
}

// --- Events ---

pub async fn add_event_page(State(state): State<Arc<AppState>>) -> Response {
    let mut pulse = state.pulse.lock().await;
    show(&mut pulse, Route::AddEvent, "/events/new")
}

pub async fn create_event_submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<EventForm>,
) -> Response {
    let mut pulse = state.pulse.lock().await;

    if pulse.current_user().is_some() {
        if let Some(field) = form.missing_field() {
            pulse.navigate(Route::AddEvent);
            let ctx = page_context(&mut pulse);
            let html = render_add_event(ctx, Some(format!("{field} is required.")), form.draft());
            return (StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response();
        }
    }

    match pulse.create_event(form.into_new_event(&state.config.event_image_url)) {
        Ok(event) => {
            info!(event_id = %event.id, "Event submitted");
            follow(&pulse)
        }
        Err(PulseError::AuthRequired) => follow(&pulse),
        Err(e) => internal_error(e),
    }
}

pub async fn register_for_event_submit(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Response {
    let mut pulse = state.pulse.lock().await;
    let Ok(id) = raw_id.parse::<EventId>() else {
        pulse.navigate(Route::Home);
        return follow(&pulse);
    };

    match pulse.register_for_event(id) {
        Ok(_) => {
            pulse.navigate(Route::EventDetails { id });
            follow(&pulse)
        }
        Err(PulseError::AuthRequired) => follow(&pulse),
        Err(PulseError::RegistrationClosed(id)) => {
            warn!(event_id = %id, "Registration refused, event is closed");
            pulse.navigate(Route::EventDetails { id });
            follow(&pulse)
        }
        Err(PulseError::EventNotFound(id)) => {
            warn!(event_id = %id, "Registration for unknown event");
            pulse.navigate(Route::Home);
            follow(&pulse)
        }
        Err(e) => internal_error(e),
    }
}
