use dioxus::prelude::*;

use super::layout::Layout;
use super::{EventView, PageContext};
use crate::templates::render_to_html;

/// Card used by every event grid.
#[allow(non_snake_case)]
#[component]
pub fn EventCard(event: EventView) -> Element {
    let badge = format!(
        "inline-block px-2 py-1 text-xs font-semibold text-white rounded-full {}",
        event.badge_class
    );
    rsx! {
        div { class: "event-card bg-white overflow-hidden shadow-lg rounded-lg border-2 border-teal-500",
            img { src: "{event.image}", alt: "{event.name}", class: "w-full h-48 object-cover" }
            div { class: "p-4",
                span { class: "{badge}", style: "background-color:{event.accent};", "{event.category_label}" }
                p { class: "mt-1 text-sm text-gray-600", "{event.date}" }
                h3 { class: "text-xl font-semibold mt-2", "{event.name}" }
                p { class: "text-gray-600 mt-1 line-clamp-2", "{event.description}" }
                p { class: "mt-2 text-sm text-gray-500", "{event.location}" }
                div { class: "mt-4 flex justify-end",
                    a {
                        href: "/events/{event.id}",
                        class: "bg-teal-500 text-white px-4 py-2 rounded-md hover:bg-teal-600 no-underline",
                        "View Details"
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn Home(ctx: PageContext, query: String, events: Vec<EventView>) -> Element {
    rsx! {
        Layout { title: "Discover Events".to_string(), ctx: ctx,
            div { class: "py-4",
                div { class: "flex flex-col md:flex-row justify-between items-center mb-6 gap-4",
                    h2 { class: "text-2xl font-bold text-gray-800", "Discover Events" }
                    form { method: "GET", action: "/",
                        class: "flex items-center border-2 border-teal-500 rounded-full overflow-hidden",
                        input {
                            r#type: "search", name: "q", value: "{query}",
                            placeholder: "Search events",
                            class: "py-2 px-4 outline-none w-full md:w-64"
                        }
                        button { r#type: "submit", class: "bg-teal-500 px-4 py-2 text-white", "Search" }
                    }
                }
                if events.is_empty() {
                    div { class: "text-center py-10",
                        p { class: "text-gray-500 mb-4", "No events found matching your search." }
                        a {
                            href: "/?q=",
                            class: "bg-teal-500 text-white px-4 py-2 rounded-md hover:bg-teal-600 no-underline",
                            "Clear Search"
                        }
                    }
                } else {
                    div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                        for event in events.iter() {
                            EventCard { key: "{event.id}", event: event.clone() }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_home(ctx: PageContext, query: String, events: Vec<EventView>) -> String {
    let mut dom = VirtualDom::new_with_props(Home, HomeProps { ctx, query, events });
    dom.rebuild_in_place();
    render_to_html(&dom)
}
