//! Thin wrappers over browser APIs the views need outside Dioxus events.
//! Outside the browser they do nothing (`confirm` answers no).

use crate::theme::Theme;

#[cfg(target_arch = "wasm32")]
mod browser {
    use crate::theme::Theme;

    pub fn confirm(message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    pub fn alert(message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    pub fn navigate_to(href: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(href) {
                tracing::warn!("Navigation to {} failed: {:?}", href, e);
            }
        }
    }

    pub fn apply_theme(theme: Theme) {
        if let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod browser {
    use crate::theme::Theme;

    pub fn confirm(_message: &str) -> bool {
        false
    }

    pub fn alert(_message: &str) {}

    pub fn navigate_to(_href: &str) {}

    pub fn apply_theme(_theme: Theme) {}
}

/// Blocking confirmation prompt.
pub fn confirm(message: &str) -> bool {
    browser::confirm(message)
}

/// Blocking alert.
pub fn alert(message: &str) {
    browser::alert(message);
}

/// Full page navigation (reloads, as opposed to router navigation).
pub fn navigate_to(href: &str) {
    browser::navigate_to(href);
}

/// Set `data-theme` on the document element.
pub fn apply_theme(theme: Theme) {
    browser::apply_theme(theme);
}
