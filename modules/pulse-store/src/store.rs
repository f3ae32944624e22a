use pulse_common::{Event, EventId, NewEvent, User};
use tracing::debug;

use crate::seed::seed_events;

/// Append-only, insertion-ordered event collection.
#[derive(Debug, Clone)]
pub struct EventStore {
    events: Vec<Event>,
    next_id: u64,
}

impl Default for EventStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl EventStore {
    /// Build a store over `events`. Ids handed out later continue after the
    /// largest id present, so they never collide with the initial set.
    pub fn new(events: Vec<Event>) -> Self {
        let next_id = events.iter().map(|e| e.id.0).max().unwrap_or(0) + 1;
        Self { events, next_id }
    }

    pub fn seeded() -> Self {
        Self::new(seed_events())
    }

    pub fn list(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: EventId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Append a new event authored by `organizer`. The organizer's name and
    /// email are stamped onto the record and registration starts open.
    pub fn insert(&mut self, fields: NewEvent, organizer: &User) -> &Event {
        let id = EventId(self.next_id);
        self.next_id += 1;

        let NewEvent {
            name,
            description,
            date,
            time,
            location,
            category,
            contact,
            image,
        } = fields;

        self.events.push(Event {
            id,
            name,
            description,
            date,
            time,
            location,
            category,
            organizer: organizer.username.clone(),
            contact,
            email: Some(organizer.email.clone()),
            image,
            registration_open: true,
        });
        debug!(event_id = %id, total = self.events.len(), "Event appended");

        &self.events[self.events.len() - 1]
    }

    /// Events matching `query` (case-insensitive, see [`Event::matches`]),
    /// in collection order. Only the empty query matches everything;
    /// surrounding whitespace is part of the needle.
    pub fn filter(&self, query: &str) -> Vec<&Event> {
        let needle = query.to_lowercase();
        self.events.iter().filter(|e| e.matches(&needle)).collect()
    }

    /// Events whose id satisfies `pred`, in collection order.
    pub fn select(&self, pred: impl Fn(EventId) -> bool) -> Vec<&Event> {
        self.events.iter().filter(|e| pred(e.id)).collect()
    }
}
