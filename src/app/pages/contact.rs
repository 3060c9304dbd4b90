//! Contact page component.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::dom;

const SENT_MESSAGE: &str = "Message sent! We will get back to you soon.";

/// Contact form. Nothing is sent anywhere; submission acknowledges and resets.
#[component]
pub fn Contact() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        dom::alert(SENT_MESSAGE);
        name.set(String::new());
        email.set(String::new());
        message.set(String::new());
    };

    rsx! {
        Layout {
            title: "Contact".to_string(),
            nav_active: "contact".to_string(),

            h1 { "Contact Us" }

            form { id: "contact-form", onsubmit: submit,
                label { "Name"
                    input {
                        r#type: "text",
                        name: "name",
                        required: true,
                        value: "{name}",
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                }
                label { "Email"
                    input {
                        r#type: "email",
                        name: "email",
                        required: true,
                        value: "{email}",
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }
                label { "Message"
                    textarea {
                        name: "message",
                        required: true,
                        value: "{message}",
                        oninput: move |evt: FormEvent| message.set(evt.value()),
                    }
                }
                button { r#type: "submit", "Send Message" }
            }
        }
    }
}
