use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;

use pulse_common::Event;

use crate::AppState;

#[derive(Deserialize)]
pub struct EventsQuery {
    q: Option<String>,
}

/// Event list for `GET /api/events?q=`, filtered like the home page search.
/// Does not touch the session's search box.
pub async fn api_events(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EventsQuery>,
) -> Json<Vec<Event>> {
    let pulse = state.pulse.lock().await;
    let query = params.q.unwrap_or_default();
    Json(pulse.filter_events(&query).into_iter().cloned().collect())
}

pub async fn health() -> &'static str {
    "ok"
}
