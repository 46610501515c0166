//! Scroll tracking hook for the navbar's compact variant.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use super::theme::use_platform;
use crate::nav::is_past_threshold;
use crate::platform::ScrollGuard;

/// `true` while the page is scrolled past the threshold.
///
/// The listener is attached once on mount and detached when the calling
/// component unmounts.
pub fn use_scrolled() -> Signal<bool> {
    let platform = use_platform();
    let mut scrolled = use_signal(|| false);

    let guard: Rc<RefCell<Option<ScrollGuard>>> = use_hook(move || {
        let guard = platform.watch_scroll(Box::new(move |offset| {
            let next = is_past_threshold(offset);
            if *scrolled.peek() != next {
                scrolled.set(next);
            }
        }));
        Rc::new(RefCell::new(Some(guard)))
    });

    use_drop(move || {
        guard.borrow_mut().take();
    });

    scrolled
}
