use dioxus::prelude::*;

use super::events_list::EventCard;
use super::layout::Layout;
use super::{EventView, PageContext};
use crate::templates::render_to_html;

const LINK_BUTTON: &str = "bg-teal-500 text-white px-4 py-2 rounded-md hover:bg-teal-600 no-underline";

#[allow(non_snake_case)]
#[component]
fn EventGrid(events: Vec<EventView>) -> Element {
    rsx! {
        div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
            for event in events.iter() {
                EventCard { key: "{event.id}", event: event.clone() }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn MyEvents(ctx: PageContext, events: Vec<EventView>) -> Element {
    rsx! {
        Layout { title: "My Events".to_string(), ctx: ctx,
            div { class: "py-4",
                div { class: "flex justify-between items-center mb-6",
                    h2 { class: "text-2xl font-bold text-gray-800", "My Events" }
                    a { href: "/events/new", class: LINK_BUTTON, "Add Event" }
                }
                if events.is_empty() {
                    div { class: "text-center py-10",
                        p { class: "text-gray-500 mb-4", "You have not created any events yet." }
                        a { href: "/events/new", class: LINK_BUTTON, "Create your first event" }
                    }
                } else {
                    EventGrid { events: events.clone() }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn RegisteredEvents(ctx: PageContext, events: Vec<EventView>) -> Element {
    rsx! {
        Layout { title: "Registered Events".to_string(), ctx: ctx,
            div { class: "py-4",
                h2 { class: "text-2xl font-bold text-gray-800 mb-6", "My Registered Events" }
                if events.is_empty() {
                    div { class: "text-center py-10",
                        p { class: "text-gray-500 mb-4", "You have not registered for any events yet." }
                        a { href: "/", class: LINK_BUTTON, "Browse events" }
                    }
                } else {
                    EventGrid { events: events.clone() }
                }
            }
        }
    }
}

pub fn render_my_events(ctx: PageContext, events: Vec<EventView>) -> String {
    let mut dom = VirtualDom::new_with_props(MyEvents, MyEventsProps { ctx, events });
    dom.rebuild_in_place();
    render_to_html(&dom)
}

pub fn render_registered_events(ctx: PageContext, events: Vec<EventView>) -> String {
    let mut dom =
        VirtualDom::new_with_props(RegisteredEvents, RegisteredEventsProps { ctx, events });
    dom.rebuild_in_place();
    render_to_html(&dom)
}
