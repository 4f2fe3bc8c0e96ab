//! Browser side effects: smooth scrolling, the scroll listener behind the
//! back-to-top button, one-shot section reveals, and user notifications.
//!
//! Listeners and observers are registered through leptos-use, which ties
//! them to the current reactive owner, so they are released exactly once
//! when the page view is disposed.

use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, use_window_scroll, UseIntersectionObserverOptions,
};
use web_sys::{
    IntersectionObserver, IntersectionObserverEntry, ScrollBehavior, ScrollIntoViewOptions,
    ScrollToOptions,
};

use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::content::SectionId;
use crate::error::{Notification, PortfolioError};
use crate::state::PageState;

fn scroll_into_view(id: &str) -> Result<(), PortfolioError> {
    let el = document()
        .get_element_by_id(id)
        .ok_or_else(|| PortfolioError::MissingTarget(id.to_string()))?;
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
    Ok(())
}

/// Smooth-scrolls to the element with `id` and closes the mobile menu.
/// An unknown id only closes the menu.
pub fn scroll_to_section(state: RwSignal<PageState>, id: &str) {
    if let Err(e) = scroll_into_view(id) {
        log::debug!("scroll_to_section: {e}");
    }
    state.update(|s| s.close_menu());
}

pub fn scroll_to_top() {
    let opts = ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

/// Keeps `back_to_top_visible` in step with the window's vertical offset.
pub fn use_back_to_top(state: RwSignal<PageState>) {
    let (_, scroll_y) = use_window_scroll();
    Effect::new(move |_| {
        let y = scroll_y.get();
        state.maybe_update(|s| s.record_scroll(y));
    });
}

/// Reveals `section` the first time enough of it enters the viewport, then
/// stops watching it.
pub fn use_reveal(state: RwSignal<PageState>, section: SectionId, target: NodeRef<html::Section>) {
    use_intersection_observer_with_options(
        target,
        move |entries: Vec<IntersectionObserverEntry>, observer: IntersectionObserver| {
            if !entries.iter().any(|e| e.is_intersecting()) {
                return;
            }
            state.maybe_update(|s| s.reveal(section));
            observer.disconnect();
        },
        UseIntersectionObserverOptions::default()
            .root_margin(REVEAL_ROOT_MARGIN.to_string())
            .thresholds(vec![REVEAL_THRESHOLD]),
    );
}

pub fn notify(notification: Notification) {
    if notification.is_failure() {
        log::warn!("{}", notification.message());
    }
    if let Err(e) = window().alert_with_message(notification.message()) {
        log::warn!("couldn't show notification: {e:?}");
    }
}
