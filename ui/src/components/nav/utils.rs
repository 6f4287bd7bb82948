use leptos::prelude::document;

/// Vertical scroll (px) past which the header switches to its compact style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

pub fn is_scrolled(y: f64) -> bool {
    y > SCROLL_THRESHOLD
}

/// Element id an in-page link points at; `None` for "#" or external hrefs.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn scroll_to_anchor(href: &str) {
    let Some(id) = anchor_id(href) else { return };
    let Some(target) = document().get_element_by_id(id) else {
        return;
    };

    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    opts.set_block(web_sys::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Keeps the page behind the open mobile panel from scrolling.
pub fn lock_body_scroll(locked: bool) {
    if let Some(body) = document().body() {
        body.class_list().toggle_with_force("overflow-hidden", locked).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(800.0));
    }

    #[test]
    fn anchor_ids() {
        assert_eq!(anchor_id("#menu"), Some("menu"));
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id("/contact"), None);
        assert_eq!(anchor_id("https://example.com/#menu"), None);
    }
}
