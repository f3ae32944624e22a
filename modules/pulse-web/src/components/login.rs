use dioxus::prelude::*;

use super::layout::Layout;
use super::PageContext;
use crate::templates::render_to_html;

const INPUT: &str = "w-full border border-gray-300 rounded px-3 py-2 focus:outline-none focus:border-teal-500";
const ERROR_BOX: &str = "form-error bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4";
const SUBMIT: &str = "w-full bg-teal-500 text-white px-4 py-2 rounded-md hover:bg-teal-600 transition";

#[allow(non_snake_case)]
#[component]
fn LoginForm(ctx: PageContext, error: Option<String>) -> Element {
    rsx! {
        Layout { title: "Login".to_string(), ctx: ctx,
            div { class: "max-w-md mx-auto bg-white rounded-lg shadow-md overflow-hidden mt-10 p-6",
                h2 { class: "text-2xl font-bold text-center text-gray-800 mb-6", "Login to Community Pulse" }
                if let Some(err) = &error {
                    div { class: ERROR_BOX, "{err}" }
                }
                form { method: "POST", action: "/login", class: "space-y-4",
                    div {
                        label { r#for: "username", class: "block text-gray-700", "Username" }
                        input { r#type: "text", name: "username", id: "username", required: true, class: INPUT, autofocus: true }
                    }
                    div {
                        label { r#for: "password", class: "block text-gray-700", "Password" }
                        input { r#type: "password", name: "password", id: "password", required: true, class: INPUT }
                    }
                    button { r#type: "submit", class: SUBMIT, "Login" }
                }
                p { class: "mt-4 text-center text-gray-600",
                    "Don't have an account? "
                    a { href: "/register", class: "text-teal-500 hover:underline", "Register" }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn RegisterForm(ctx: PageContext, error: Option<String>) -> Element {
    rsx! {
        Layout { title: "Register".to_string(), ctx: ctx,
            div { class: "max-w-md mx-auto bg-white rounded-lg shadow-md overflow-hidden mt-10 p-6",
                h2 { class: "text-2xl font-bold text-center text-gray-800 mb-6", "Create an Account" }
                if let Some(err) = &error {
                    div { class: ERROR_BOX, "{err}" }
                }
                form { method: "POST", action: "/register", class: "space-y-4",
                    div {
                        label { r#for: "username", class: "block text-gray-700", "Username" }
                        input { r#type: "text", name: "username", id: "username", required: true, class: INPUT, autofocus: true }
                    }
                    div {
                        label { r#for: "email", class: "block text-gray-700", "Email" }
                        input { r#type: "email", name: "email", id: "email", required: true, class: INPUT }
                    }
                    div {
                        label { r#for: "phone", class: "block text-gray-700", "Phone" }
                        input { r#type: "tel", name: "phone", id: "phone", class: INPUT }
                    }
                    div {
                        label { r#for: "password", class: "block text-gray-700", "Password" }
                        input { r#type: "password", name: "password", id: "password", required: true, class: INPUT }
                    }
                    button { r#type: "submit", class: SUBMIT, "Register" }
                }
                p { class: "mt-4 text-center text-gray-600",
                    "Already have an account? "
                    a { href: "/login", class: "text-teal-500 hover:underline", "Login" }
                }
            }
        }
    }
}

pub fn render_login(ctx: PageContext, error: Option<String>) -> String {
    let mut dom = VirtualDom::new_with_props(LoginForm, LoginFormProps { ctx, error });
    dom.rebuild_in_place();
    render_to_html(&dom)
}

pub fn render_register(ctx: PageContext, error: Option<String>) -> String {
    let mut dom = VirtualDom::new_with_props(RegisterForm, RegisterFormProps { ctx, error });
    dom.rebuild_in_place();
    render_to_html(&dom)
}
