use pulse_common::{Category, Event};

pub mod add_event;
pub mod event_detail;
pub mod events_list;
pub mod layout;
pub mod login;
pub mod member_events;
pub mod not_found;

pub use add_event::render_add_event;
pub use event_detail::render_event_detail;
pub use events_list::render_home;
pub use login::{render_login, render_register};
pub use member_events::{render_my_events, render_registered_events};
pub use not_found::render_not_found;

// --- View Models ---

/// Per-request page chrome: who is logged in and any notices to show.
#[derive(Clone, PartialEq, Default)]
pub struct PageContext {
    pub username: Option<String>,
    pub notices: Vec<String>,
}

/// Values typed into the add-event form, echoed back when it is re-rendered.
#[derive(Clone, PartialEq, Default)]
pub struct EventDraft {
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

#[derive(Clone, PartialEq)]
pub struct EventView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub date: String,
    pub time: Option<String>,
    pub location: String,
    pub category_label: String,
    pub badge_class: String,
    pub accent: String,
    pub organizer: String,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub image: String,
    pub registration_open: bool,
}

pub fn event_to_view(event: &Event) -> EventView {
    let accent = event.category.accent();
    EventView {
        id: event.id.to_string(),
        name: event.name.clone(),
        description: event.description.clone(),
        date: event.date.clone(),
        time: event.time.clone(),
        location: event.location.clone(),
        category_label: event.category.label().to_string(),
        badge_class: accent.badge_class().to_string(),
        accent: accent.hex().to_string(),
        organizer: event.organizer.clone(),
        contact: event.contact.clone(),
        email: event.email.clone(),
        image: event.image.clone(),
        registration_open: event.registration_open,
    }
}

/// `(key, label)` pairs for the category picker.
pub fn category_options() -> Vec<(String, String)> {
    Category::ALL
        .iter()
        .map(|c| (c.key().to_string(), c.label().to_string()))
        .collect()
}
