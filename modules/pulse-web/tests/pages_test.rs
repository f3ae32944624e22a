use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt; // for oneshot

use pulse_common::Config;
use pulse_web::{build_router, AppState};

struct Reply {
    status: StatusCode,
    location: Option<String>,
    cache_control: Option<String>,
    body: String,
}

fn app_state() -> Arc<AppState> {
    Arc::new(AppState::new(Config::default()))
}

async fn send(state: &Arc<AppState>, req: Request<Body>) -> Reply {
    let response = build_router(state.clone()).oneshot(req).await.unwrap();
    let header_value = |name: header::HeaderName| {
        response
            .headers()
            .get(name)
            .map(|v: &header::HeaderValue| v.to_str().unwrap().to_string())
    };
    let status = response.status();
    let location = header_value(header::LOCATION);
    let cache_control = header_value(header::CACHE_CONTROL);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    Reply {
        status,
        location,
        cache_control,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

async fn get(state: &Arc<AppState>, uri: &str) -> Reply {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(state, req).await
}

async fn post_form(state: &Arc<AppState>, uri: &str, form: &str) -> Reply {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    send(state, req).await
}

fn assert_redirect(reply: &Reply, to: &str) {
    assert_eq!(reply.status, StatusCode::SEE_OTHER);
    assert_eq!(reply.location.as_deref(), Some(to));
}

async fn logged_in() -> Arc<AppState> {
    let state = app_state();
    let reply = post_form(&state, "/login", "username=meera&password=secret").await;
    assert_redirect(&reply, "/");
    state
}

// --- Browsing ---

#[tokio::test]
async fn home_lists_seed_events() {
    let state = app_state();
    let reply = get(&state, "/").await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.cache_control.as_deref(), Some("no-store"));
    for name in [
        "Live Music Festival",
        "Jewelry exhibition",
        "Tennis Tournament",
        "Tennis Match",
    ] {
        assert!(reply.body.contains(name), "missing {name}");
    }
    assert!(reply.body.contains("href=\"/login\""));
}

#[tokio::test]
async fn card_badges_carry_category_accent() {
    let state = app_state();
    let reply = get(&state, "/").await;
    // cultural, exhibition and sports accents
    for hex in ["#3b82f6", "#a855f7", "#14b8a6"] {
        assert!(
            reply.body.contains(&format!("background-color:{hex}")),
            "missing accent {hex}"
        );
    }
}

#[tokio::test]
async fn search_filters_home() {
    let state = app_state();
    let reply = get(&state, "/?q=TENNIS").await;

    assert!(reply.body.contains("Tennis Tournament"));
    assert!(reply.body.contains("Tennis Match"));
    assert!(!reply.body.contains("Live Music Festival"));

    // The search box sticks until cleared.
    let reply = get(&state, "/").await;
    assert!(!reply.body.contains("Live Music Festival"));
    let reply = get(&state, "/?q=").await;
    assert!(reply.body.contains("Live Music Festival"));
}

#[tokio::test]
async fn search_without_matches_shows_empty_state() {
    let state = app_state();
    let reply = get(&state, "/?q=quidditch").await;
    assert!(reply.body.contains("No events found matching your search."));
    assert!(reply.body.contains("Clear Search"));
}

#[tokio::test]
async fn anonymous_account_pages_redirect_to_login() {
    let state = app_state();
    for path in ["/my-events", "/registered-events", "/events/new"] {
        let reply = get(&state, path).await;
        assert_redirect(&reply, "/login");
    }
}

#[tokio::test]
async fn unknown_or_malformed_event_redirects_home() {
    let state = app_state();
    assert_redirect(&get(&state, "/events/999").await, "/");
    assert_redirect(&get(&state, "/events/abc").await, "/");
}

#[tokio::test]
async fn event_details_render_for_anyone() {
    let state = app_state();
    let reply = get(&state, "/events/2").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.body.contains("Jewelry exhibition"));
    assert!(reply.body.contains("Crown Museum, Ahmedabad"));
    assert!(reply.body.contains("Register for Event"));
}

#[tokio::test]
async fn closed_registration_is_disabled() {
    let state = app_state();
    let reply = get(&state, "/events/3").await;
    assert!(reply.body.contains("Registration Not Yet Open"));
    assert!(!reply.body.contains("Register for Event"));
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let state = app_state();
    let reply = get(&state, "/calendar").await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert!(reply.body.contains("Page not found"));
}

#[tokio::test]
async fn trailing_slash_redirects_to_canonical_path() {
    let state = app_state();
    assert_redirect(&get(&state, "/login/").await, "/login");
}

// --- Auth ---

#[tokio::test]
async fn login_shows_username_in_nav() {
    let state = logged_in().await;
    let reply = get(&state, "/").await;
    assert!(reply.body.contains("meera"));
    assert!(reply.body.contains("action=\"/logout\""));
    assert!(reply.body.contains("href=\"/my-events\""));
}

#[tokio::test]
async fn blank_login_shows_error() {
    let state = app_state();
    let reply = post_form(&state, "/login", "username=&password=secret").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.body.contains("form-error"));
    assert!(reply.body.contains("Invalid credentials. Please try again."));
}

#[tokio::test]
async fn register_requires_email() {
    let state = app_state();
    let reply = post_form(&state, "/register", "username=meera&email=&phone=&password=pw").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply
        .body
        .contains("Registration failed. Please check your information and try again."));

    let reply = post_form(
        &state,
        "/register",
        "username=meera&email=meera%40pulse.test&phone=&password=pw",
    )
    .await;
    assert_redirect(&reply, "/");
}

#[tokio::test]
async fn logout_locks_account_pages_again() {
    let state = logged_in().await;
    assert_eq!(get(&state, "/my-events").await.status, StatusCode::OK);

    assert_redirect(&post_form(&state, "/logout", "").await, "/");
    assert_redirect(&get(&state, "/my-events").await, "/login");
}

// --- Events ---

const TREE_PLANTING: &str = "name=Tree+Planting&location=Riverfront&description=Saplings+provided\
&start_date=2024-08-11&start_time=13%3A30&end_date=2024-08-12&end_time=17%3A30&category=volunteer";

#[tokio::test]
async fn create_event_opens_details_with_notice() {
    let state = logged_in().await;
    let reply = post_form(&state, "/events", TREE_PLANTING).await;
    assert_redirect(&reply, "/events/5");

    let reply = get(&state, "/events/5").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.body.contains("Event created successfully!"));
    assert!(reply.body.contains("Tree Planting"));
    assert!(reply.body.contains("Aug 11-Aug 12"));
    assert!(reply.body.contains("1:30 PM - 5:30 PM"));
    assert!(reply.body.contains("meera@example.com"));
    assert!(reply.body.contains("Edit"));

    // Notices show once.
    let reply = get(&state, "/events/5").await;
    assert!(!reply.body.contains("Event created successfully!"));

    let reply = get(&state, "/my-events").await;
    assert!(reply.body.contains("Tree Planting"));
}

#[tokio::test]
async fn create_event_with_missing_field_is_rejected() {
    let state = logged_in().await;
    let reply = post_form(
        &state,
        "/events",
        "name=&location=Riverfront&description=Saplings+provided&start_date=2024-08-11&contact=555-0100",
    )
    .await;
    assert_eq!(reply.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(reply.body.contains("Event name is required."));

    // What was typed comes back in the form.
    assert!(reply.body.contains("value=\"Riverfront\""));
    assert!(reply.body.contains("value=\"2024-08-11\""));
    assert!(reply.body.contains("value=\"555-0100\""));
    assert!(reply.body.contains("Saplings provided"));

    let reply = get(&state, "/api/events").await;
    let events: Vec<serde_json::Value> = serde_json::from_str(&reply.body).unwrap();
    assert_eq!(events.len(), 4);
}

#[tokio::test]
async fn anonymous_create_redirects_to_login() {
    let state = app_state();
    let reply = post_form(&state, "/events", TREE_PLANTING).await;
    assert_redirect(&reply, "/login");

    let reply = get(&state, "/api/events").await;
    let events: Vec<serde_json::Value> = serde_json::from_str(&reply.body).unwrap();
    assert_eq!(events.len(), 4);
}

#[tokio::test]
async fn register_for_event_flow() {
    let state = logged_in().await;
    let reply = post_form(&state, "/events/1/register", "").await;
    assert_redirect(&reply, "/events/1");

    let reply = get(&state, "/events/1").await;
    assert!(reply.body.contains("Successfully registered for the event!"));
    assert!(reply.body.contains("Already Registered"));

    // A second registration is a no-op without a notice.
    assert_redirect(&post_form(&state, "/events/1/register", "").await, "/events/1");
    let reply = get(&state, "/events/1").await;
    assert!(!reply.body.contains("Successfully registered for the event!"));

    let reply = get(&state, "/registered-events").await;
    assert!(reply.body.contains("My Registered Events"));
    assert!(reply.body.contains("Live Music Festival"));
    assert!(!reply.body.contains("Tennis Match"));
}

#[tokio::test]
async fn closed_event_refuses_direct_registration() {
    let state = logged_in().await;
    assert_redirect(&post_form(&state, "/events/3/register", "").await, "/events/3");

    let reply = get(&state, "/events/3").await;
    assert!(reply.body.contains("Registration Not Yet Open"));
    assert!(!reply.body.contains("Already Registered"));
    assert!(!reply.body.contains("Successfully registered for the event!"));

    let reply = get(&state, "/registered-events").await;
    assert!(!reply.body.contains("Tennis Tournament"));
}

#[tokio::test]
async fn anonymous_registration_redirects_to_login() {
    let state = app_state();
    assert_redirect(&post_form(&state, "/events/1/register", "").await, "/login");
}

#[tokio::test]
async fn registering_for_unknown_event_goes_home() {
    let state = logged_in().await;
    assert_redirect(&post_form(&state, "/events/42/register", "").await, "/");
    let reply = get(&state, "/registered-events").await;
    assert!(reply.body.contains("You have not registered for any events yet."));
}

// --- API ---

#[tokio::test]
async fn api_events_returns_json() {
    let state = app_state();
    let reply = get(&state, "/api/events?q=tennis").await;
    assert_eq!(reply.status, StatusCode::OK);

    let events: Vec<serde_json::Value> = serde_json::from_str(&reply.body).unwrap();
    let names: Vec<&str> = events.iter().map(|e| e["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Tennis Tournament", "Tennis Match"]);
    assert_eq!(events[0]["registrationOpen"], serde_json::json!(false));
    assert_eq!(events[0]["category"], serde_json::json!("sports"));
}

#[tokio::test]
async fn health_check() {
    let state = app_state();
    let reply = get(&state, "/health").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, "ok");
}
