//! Light/dark theme toggle button.

use dioxus::prelude::*;

use crate::app::dom;
use crate::storage::LocalStorage;
use crate::theme::{self, Theme};

/// Flips between dark and light. Uses localStorage for persistence and the
/// `data-theme` attribute on the document element.
#[component]
pub fn ThemeToggle() -> Element {
    let mut current_theme = use_signal(Theme::default);

    // Load theme from localStorage on mount
    use_effect(move || {
        let saved = theme::load_theme(&LocalStorage);
        dom::apply_theme(saved);
        current_theme.set(saved);
    });

    let toggle = move |_: MouseEvent| {
        let next = theme::toggle_theme(&LocalStorage, current_theme());
        dom::apply_theme(next);
        current_theme.set(next);
    };

    let icon = current_theme().icon_class();

    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            title: "Toggle theme",
            onclick: toggle,
            i { class: icon }
        }
    }
}
