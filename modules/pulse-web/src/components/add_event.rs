use dioxus::prelude::*;

use super::layout::Layout;
use super::{category_options, EventDraft, PageContext};
use crate::templates::render_to_html;

const INPUT: &str = "w-full border border-gray-300 rounded px-3 py-2 focus:outline-none focus:border-teal-500";
const LABEL: &str = "block text-gray-700 mb-1";

#[allow(non_snake_case)]
#[component]
fn AddEventForm(ctx: PageContext, error: Option<String>, draft: EventDraft) -> Element {
    let categories = category_options();
    let chosen = if draft.category.is_empty() {
        "cultural".to_string()
    } else {
        draft.category.clone()
    };
    rsx! {
        Layout { title: "Add Event".to_string(), ctx: ctx,
            div { class: "max-w-2xl mx-auto bg-white rounded-lg shadow-md overflow-hidden mt-6 p-6",
                h2 { class: "text-2xl font-bold text-gray-800 mb-6", "Add New Event" }
                if let Some(err) = &error {
                    div { class: "form-error bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4", "{err}" }
                }
                form { method: "POST", action: "/events", class: "space-y-4",
                    div {
                        label { r#for: "name", class: LABEL, "Event Name" }
                        input { r#type: "text", name: "name", id: "name", value: "{draft.name}", required: true, class: INPUT }
                    }
                    div {
                        label { r#for: "location", class: LABEL, "Location" }
                        input { r#type: "text", name: "location", id: "location", value: "{draft.location}", required: true, class: INPUT }
                    }
                    div {
                        label { r#for: "description", class: LABEL, "Description" }
                        textarea { name: "description", id: "description", rows: "4", required: true, class: INPUT, "{draft.description}" }
                    }
                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                        div {
                            label { r#for: "start_date", class: LABEL, "Start Date" }
                            input { r#type: "date", name: "start_date", id: "start_date", value: "{draft.start_date}", required: true, class: INPUT }
                        }
                        div {
                            label { r#for: "start_time", class: LABEL, "Start Time" }
                            input { r#type: "time", name: "start_time", id: "start_time", value: "{draft.start_time}", class: INPUT }
                        }
                        div {
                            label { r#for: "end_date", class: LABEL, "End Date" }
                            input { r#type: "date", name: "end_date", id: "end_date", value: "{draft.end_date}", class: INPUT }
                        }
                        div {
                            label { r#for: "end_time", class: LABEL, "End Time" }
                            input { r#type: "time", name: "end_time", id: "end_time", value: "{draft.end_time}", class: INPUT }
                        }
                    }
                    div {
                        label { r#for: "category", class: LABEL, "Category" }
                        select { name: "category", id: "category", class: INPUT,
                            for (key, label) in categories.iter() {
                                option { key: "{key}", value: "{key}", selected: *key == chosen, "{label}" }
                            }
                        }
                    }
                    div {
                        label { r#for: "contact", class: LABEL, "Contact" }
                        input { r#type: "text", name: "contact", id: "contact", value: "{draft.contact}", class: INPUT }
                    }
                    div { class: "flex justify-end gap-2",
                        a { href: "/", class: "border border-gray-300 text-gray-700 px-4 py-2 rounded-md no-underline", "Cancel" }
                        button {
                            r#type: "submit",
                            class: "bg-teal-500 text-white px-4 py-2 rounded-md hover:bg-teal-600 transition",
                            "Create Event"
                        }
                    }
                }
            }
        }
    }
}

pub fn render_add_event(ctx: PageContext, error: Option<String>, draft: EventDraft) -> String {
    let mut dom =
        VirtualDom::new_with_props(AddEventForm, AddEventFormProps { ctx, error, draft });
    dom.rebuild_in_place();
    render_to_html(&dom)
}
