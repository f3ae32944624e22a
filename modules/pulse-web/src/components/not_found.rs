use dioxus::prelude::*;

use super::layout::Layout;
use super::PageContext;
use crate::templates::render_to_html;

#[allow(non_snake_case)]
#[component]
fn NotFound(ctx: PageContext, name: String) -> Element {
    rsx! {
        Layout { title: "Not Found".to_string(), ctx: ctx,
            div { class: "text-center py-16",
                h2 { class: "text-3xl font-bold text-gray-800 mb-2", "Page not found" }
                p { class: "text-gray-500 mb-6", "Nothing lives at \"{name}\"." }
                a {
                    href: "/",
                    class: "bg-teal-500 text-white px-4 py-2 rounded-md hover:bg-teal-600 no-underline",
                    "Back to events"
                }
            }
        }
    }
}

pub fn render_not_found(ctx: PageContext, name: String) -> String {
    let mut dom = VirtualDom::new_with_props(NotFound, NotFoundProps { ctx, name });
    dom.rebuild_in_place();
    render_to_html(&dom)
}
