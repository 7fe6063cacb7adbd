//! Process-wide scroll and pointer sources.
//!
//! Each source is a thread-local [`Hub`]: the first subscriber attaches the
//! window listeners, the last subscriber leaving removes them again.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use super::listener::WindowListener;
use crate::motion::hub::{notify, Hub};
use crate::motion::{PointerPosition, ScrollMetrics};

thread_local! {
    static SCROLL: RefCell<Hub<f64, Vec<WindowListener>>> = RefCell::new(Hub::new(0.0));
    static POINTER: RefCell<Hub<PointerPosition, WindowListener>> =
        RefCell::new(Hub::new(PointerPosition::ORIGIN));
}

/// Handle to a source subscription. Dropping it unsubscribes.
pub struct Subscription {
    id: Option<usize>,
    release: fn(usize),
}

impl Subscription {
    fn new(id: usize, release: fn(usize)) -> Self {
        Self {
            id: Some(id),
            release,
        }
    }

    pub fn detach(&mut self) {
        if let Some(id) = self.id.take() {
            (self.release)(id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}

pub struct ScrollProgressSource;

impl ScrollProgressSource {
    pub fn current_progress() -> f64 {
        SCROLL.with(|hub| hub.borrow().current())
    }

    pub fn subscribe(consumer: impl Fn(f64) + 'static) -> Subscription {
        let subscribed = SCROLL.with(|hub| hub.borrow_mut().subscribe(consumer));
        if subscribed.needs_binding {
            // resize changes the scrollable range, so it moves progress too
            let listeners: Vec<WindowListener> = ["scroll", "resize"]
                .into_iter()
                .filter_map(|event| WindowListener::new(event, |_| Self::refresh()))
                .collect();
            if !listeners.is_empty() {
                SCROLL.with(|hub| hub.borrow_mut().bind(listeners));
            }
        }
        Self::refresh();
        Subscription::new(subscribed.id, Self::release)
    }

    /// Re-reads the scroll geometry and notifies subscribers if progress moved.
    pub fn refresh() {
        let Some(metrics) = read_metrics() else {
            return;
        };
        let progress = metrics.progress();
        let consumers = SCROLL.with(|hub| hub.borrow_mut().publish(progress));
        notify(consumers, progress);
    }

    fn release(id: usize) {
        let listeners = SCROLL.with(|hub| hub.borrow_mut().unsubscribe(id));
        drop(listeners);
    }
}

fn read_metrics() -> Option<ScrollMetrics> {
    let window = web_sys::window()?;
    let offset = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let document_height = window.document()?.document_element()?.scroll_height();
    Some(ScrollMetrics::new(
        offset,
        f64::from(document_height),
        viewport_height,
    ))
}

pub struct PointerPositionSource;

impl PointerPositionSource {
    pub fn current() -> PointerPosition {
        POINTER.with(|hub| hub.borrow().current())
    }

    pub fn subscribe(consumer: impl Fn(PointerPosition) + 'static) -> Subscription {
        let subscribed = POINTER.with(|hub| hub.borrow_mut().subscribe(consumer));
        if subscribed.needs_binding {
            if let Some(listener) = WindowListener::new("mousemove", |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    Self::publish(PointerPosition::from((event.client_x(), event.client_y())));
                }
            }) {
                POINTER.with(|hub| hub.borrow_mut().bind(listener));
            }
        }
        Subscription::new(subscribed.id, Self::release)
    }

    fn publish(position: PointerPosition) {
        let consumers = POINTER.with(|hub| hub.borrow_mut().publish(position));
        notify(consumers, position);
    }

    fn release(id: usize) {
        let listener = POINTER.with(|hub| hub.borrow_mut().unsubscribe(id));
        drop(listener);
    }
}
