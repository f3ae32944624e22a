use pulse_common::Event;

use crate::router::Route;

/// A resolved route together with the data its page shows.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Home {
        query: String,
        events: Vec<Event>,
    },
    Login,
    Register,
    EventDetails {
        event: Event,
        is_registered: bool,
        is_authored: bool,
    },
    AddEvent,
    MyEvents {
        events: Vec<Event>,
    },
    RegisteredEvents {
        events: Vec<Event>,
    },
    NotFound {
        name: String,
    },
}

impl View {
    pub fn route(&self) -> Route {
        match self {
            View::Home { .. } => Route::Home,
            View::Login => Route::Login,
            View::Register => Route::Register,
            View::EventDetails { event, .. } => Route::EventDetails { id: event.id },
            View::AddEvent => Route::AddEvent,
            View::MyEvents { .. } => Route::MyEvents,
            View::RegisteredEvents { .. } => Route::RegisteredEvents,
            View::NotFound { name } => Route::NotFound { name: name.clone() },
        }
    }
}
