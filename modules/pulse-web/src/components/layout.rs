use dioxus::prelude::*;

use super::PageContext;

const NAV_LINK: &str = "text-gray-700 hover:text-teal-500 text-sm";
const NAV_BUTTON: &str = "bg-teal-500 text-white px-3 py-1 rounded-md hover:bg-teal-600 text-sm";

/// Site layout: top navigation, notice banner, page body and footer.
#[allow(non_snake_case)]
#[component]
pub fn Layout(title: String, ctx: PageContext, children: Element) -> Element {
    let full_title = format!("{title} | Community Pulse");
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{full_title}" }
            script { src: "https://cdn.tailwindcss.com" }
        }
        body { class: "min-h-screen bg-gray-100 font-sans text-gray-900",
            nav { class: "bg-white shadow-md p-4",
                div { class: "container mx-auto flex justify-between items-center",
                    a { href: "/", class: "text-xl font-bold text-teal-600 no-underline", "Community Pulse" }
                    div { class: "flex items-center gap-4",
                        if let Some(username) = &ctx.username {
                            a { href: "/my-events", class: NAV_LINK, "My Events" }
                            a { href: "/registered-events", class: NAV_LINK, "Registered" }
                            a { href: "/events/new", class: NAV_BUTTON, "Add Event" }
                            span { class: "text-sm text-gray-500", "{username}" }
                            form { method: "POST", action: "/logout",
                                button { r#type: "submit", class: NAV_LINK, "Logout" }
                            }
                        } else {
                            a {
                                href: "/login",
                                class: "text-teal-500 border border-teal-500 px-3 py-1 rounded-md hover:bg-teal-50 text-sm",
                                "Login"
                            }
                            a { href: "/register", class: NAV_BUTTON, "Register" }
                        }
                    }
                }
            }
            div { class: "container mx-auto p-4",
                for notice in ctx.notices.iter() {
                    div {
                        class: "notice bg-teal-50 border border-teal-300 text-teal-800 text-sm px-4 py-3 rounded mb-4",
                        role: "status",
                        "{notice}"
                    }
                }
                {children}
            }
            footer { class: "bg-white shadow-inner p-6 mt-10",
                div { class: "container mx-auto flex justify-between items-center text-sm text-gray-600",
                    span { class: "font-semibold text-gray-800", "Community Pulse" }
                    span { "All rights reserved." }
                }
            }
        }
    }
}
