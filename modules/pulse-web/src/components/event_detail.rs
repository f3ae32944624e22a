use dioxus::prelude::*;

use super::layout::Layout;
use super::{EventView, PageContext};
use crate::templates::render_to_html;

const DISABLED_BUTTON: &str = "w-full border-2 px-4 py-2 rounded-md opacity-75 cursor-not-allowed";

#[allow(non_snake_case)]
#[component]
fn EventDetail(
    ctx: PageContext,
    event: EventView,
    is_registered: bool,
    is_authored: bool,
) -> Element {
    let badge = format!(
        "inline-block px-2 py-1 text-xs font-semibold text-white rounded-full {}",
        event.badge_class
    );
    let when = match &event.time {
        Some(time) => format!("{} • {time}", event.date),
        None => event.date.clone(),
    };
    let title = event.name.clone();

    rsx! {
        Layout { title: title, ctx: ctx,
            div { class: "bg-white rounded-lg shadow-md overflow-hidden my-6 flex flex-col md:flex-row",
                div { class: "md:w-1/2",
                    img { src: "{event.image}", alt: "{event.name}", class: "w-full h-64 object-cover" }
                }
                div { class: "p-6 md:w-1/2",
                    div { class: "flex justify-between items-start",
                        div {
                            span { class: "{badge}", style: "background-color:{event.accent};", "{event.category_label}" }
                            h1 { class: "text-3xl font-bold mt-2", "{event.name}" }
                            p { class: "mt-1 text-lg text-gray-600", "{when}" }
                        }
                        // Editing and deleting events is not supported yet.
                        if is_authored {
                            div { class: "owner-controls",
                                button {
                                    r#type: "button", disabled: true,
                                    class: "border border-teal-500 text-teal-500 px-3 py-1 rounded-md mr-2 opacity-50",
                                    "Edit"
                                }
                                button {
                                    r#type: "button", disabled: true,
                                    class: "bg-red-500 text-white px-3 py-1 rounded-md opacity-50",
                                    "Delete"
                                }
                            }
                        }
                    }
                    div { class: "mt-6",
                        h3 { class: "text-xl font-semibold", "Description" }
                        p { class: "text-gray-700 mt-2", "{event.description}" }
                    }
                    div { class: "mt-6",
                        h3 { class: "text-xl font-semibold", "Location" }
                        p { class: "text-gray-700 mt-2", "{event.location}" }
                    }
                    div { class: "mt-6",
                        h3 { class: "text-xl font-semibold", "Organizer" }
                        p { class: "text-gray-700 mt-2", "{event.organizer}" }
                        if let Some(contact) = &event.contact {
                            p { class: "text-gray-700 mt-1", "{contact}" }
                        }
                        if let Some(email) = &event.email {
                            p { class: "text-gray-700 mt-1", "{email}" }
                        }
                    }
                    div { class: "mt-8",
                        if is_registered {
                            button {
                                r#type: "button", disabled: true,
                                class: "{DISABLED_BUTTON} border-teal-500 text-teal-500",
                                "Already Registered"
                            }
                        } else if event.registration_open {
                            form { method: "POST", action: "/events/{event.id}/register",
                                button {
                                    r#type: "submit",
                                    class: "w-full bg-teal-500 text-white px-4 py-2 rounded-md hover:bg-teal-600 transition",
                                    "Register for Event"
                                }
                            }
                        } else {
                            button {
                                r#type: "button", disabled: true,
                                class: "{DISABLED_BUTTON} border-gray-300 text-gray-400",
                                "Registration Not Yet Open"
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_event_detail(
    ctx: PageContext,
    event: EventView,
    is_registered: bool,
    is_authored: bool,
) -> String {
    let mut dom = VirtualDom::new_with_props(
        EventDetail,
        EventDetailProps {
            ctx,
            event,
            is_registered,
            is_authored,
        },
    );
    dom.rebuild_in_place();
    render_to_html(&dom)
}
