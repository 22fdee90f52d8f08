use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};
use log::warn;

/// Smoothly brings the element matching `selector` (e.g. `#rooms`) into view.
pub fn scroll_to_section(selector: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    match document.query_selector(selector) {
        Ok(Some(section)) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
        _ => warn!("No section matches {}", selector),
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn is_in_page_anchor(href: &str) -> bool {
    href.starts_with('#')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_hash_links_scroll_in_page() {
        assert!(is_in_page_anchor("#rooms"));
        assert!(!is_in_page_anchor("/privacy"));
        assert!(!is_in_page_anchor("https://facebook.com/jlkabinipalace"));
    }
}
