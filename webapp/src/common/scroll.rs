use std::rc::Rc;

use dioxus::prelude::*;
use gloo_console::error as console_error;
use wasm_bindgen::{JsCast, prelude::Closure};

// past this many pixels the header switches to its compact look
pub const SCROLLED_PAST: f64 = 20.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderScroll {
    pub scrolled: bool,
    pub scrolling_down: bool,
}

impl HeaderScroll {
    pub fn between(previous_y: f64, y: f64) -> Self {
        HeaderScroll {
            scrolled: y > SCROLLED_PAST,
            scrolling_down: y > previous_y,
        }
    }

    // the header slides away while reading down the page, unless the menu is open
    pub fn hides_header(self, menu_open: bool) -> bool {
        self.scrolled && self.scrolling_down && !menu_open
    }

    pub fn header_class(self, menu_open: bool) -> &'static str {
        match (self.scrolled, self.hides_header(menu_open)) {
            (_, true) => "app-header scrolled hidden",
            (true, false) => "app-header scrolled",
            (false, false) => "app-header",
        }
    }
}

pub type ScrollListener = Rc<Closure<dyn FnMut()>>;

// the returned listener has to outlive the registration; hand it back to
// unwatch_scroll when the header goes away
pub fn watch_scroll(mut scroll_signal: Signal<HeaderScroll>) -> Option<ScrollListener> {
    let window = web_sys::window()?;
    let mut last_y = window.scroll_y().unwrap_or(0.0);

    let listener = Closure::<dyn FnMut()>::new(move || {
        let Some(y) = web_sys::window().and_then(|w| w.scroll_y().ok()) else {
            return;
        };

        let next = HeaderScroll::between(last_y, y);
        last_y = y;

        // scroll events are frequent, only touch the signal on a real change
        if *scroll_signal.peek() != next {
            scroll_signal.set(next);
        }
    });

    if let Err(err) =
        window.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
    {
        console_error!(format!("failed to watch scroll: {err:?}"));
        return None;
    }

    Some(Rc::new(listener))
}

pub fn unwatch_scroll(listener: &ScrollListener) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let closure: &Closure<dyn FnMut()> = listener;
    if let Err(err) =
        window.remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
    {
        console_error!(format!("failed to unwatch scroll: {err:?}"));
    }
}

// the page behind the open mobile menu must not scroll
pub fn lock_body_scroll(locked: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());

    let Some(body) = body else {
        console_error!("no document body to lock");
        return;
    };

    let overflow = if locked { "hidden" } else { "" };
    if let Err(err) = body.style().set_property("overflow", overflow) {
        console_error!(format!("failed to set body overflow: {err:?}"));
    }
}

// route changes keep the scroll position by default, which lands visitors in
// the middle of the next page
pub fn scroll_to_top() {
    match web_sys::window() {
        Some(window) => window.scroll_to_with_x_and_y(0.0, 0.0),
        None => console_error!("no window available to scroll"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_only_past_threshold() {
        assert!(!HeaderScroll::between(0.0, SCROLLED_PAST).scrolled);
        assert!(HeaderScroll::between(0.0, SCROLLED_PAST + 1.0).scrolled);
        assert!(HeaderScroll::between(400.0, 300.0).scrolled);
    }

    #[test]
    fn hidden_when_scrolling_down_past_threshold() {
        let down = HeaderScroll::between(100.0, 180.0);
        assert!(down.hides_header(false));
        assert_eq!(down.header_class(false), "app-header scrolled hidden");

        let up = HeaderScroll::between(180.0, 100.0);
        assert!(!up.hides_header(false));
        assert_eq!(up.header_class(false), "app-header scrolled");
    }

    #[test]
    fn open_menu_keeps_header_visible() {
        let down = HeaderScroll::between(100.0, 180.0);
        assert!(!down.hides_header(true));
        assert_eq!(down.header_class(true), "app-header scrolled");
    }

    #[test]
    fn near_the_top_never_hides() {
        let s = HeaderScroll::between(5.0, 15.0);
        assert!(s.scrolling_down);
        assert!(!s.hides_header(false));
        assert_eq!(s.header_class(false), "app-header");
    }
}
