use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::sources::{PointerPositionSource, ScrollProgressSource};
use crate::config;
use crate::motion::{InViewOptions, PointerPosition, Rect, Spring, VisibilityTracker};

/// Scroll progress of the whole document, re-rendering on change.
#[hook]
pub fn use_scroll_progress() -> f64 {
    let progress = use_state_eq(ScrollProgressSource::current_progress);
    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = ScrollProgressSource::subscribe(move |value| progress.set(value));
                move || drop(subscription)
            },
            (),
        );
    }
    *progress
}

/// Latest raw pointer position. `(0, 0)` until the pointer first moves.
#[hook]
pub fn use_pointer_position() -> PointerPosition {
    let position = use_state_eq(PointerPositionSource::current);
    {
        let position = position.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = PointerPositionSource::subscribe(move |value| position.set(value));
                move || drop(subscription)
            },
            (),
        );
    }
    *position
}

/// Whether the element behind `node` is in the viewport.
///
/// With `options.once` the answer latches to `true` and the observer is
/// released as soon as the element has been seen.
#[hook]
pub fn use_in_view(node: NodeRef, options: InViewOptions) -> bool {
    let visible = use_state_eq(|| false);
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, options): &(NodeRef, InViewOptions)| {
                let observer = InViewObserver::start(node, *options, move |value| visible.set(value));
                move || drop(observer)
            },
            (node, options),
        );
    }
    *visible
}

/// False on the first render, true right after mount. Lets mount-time
/// entrances start from their hidden pose so the CSS transition plays.
#[hook]
pub fn use_mounted() -> bool {
    let mounted = use_state_eq(|| false);
    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::MOUNT_TICK_MS, move || mounted.set(true));
                move || drop(timeout)
            },
            (),
        );
    }
    *mounted
}

/// Smooths `target` through a pair of springs stepped once per frame.
#[hook]
pub fn use_spring(target: PointerPosition, spring: Spring) -> PointerPosition {
    let latest = use_mut_ref(|| target);
    *latest.borrow_mut() = target;
    let rendered = use_state_eq(|| target);
    {
        let latest = latest.clone();
        let rendered = rendered.clone();
        use_effect_with_deps(
            move |_| {
                let start = *latest.borrow();
                let (mut x, mut y) = (spring, spring);
                x.snap(start.x);
                y.snap(start.y);
                let dt = f64::from(config::FRAME_MS) / 1000.0;
                let interval = Interval::new(config::FRAME_MS, move || {
                    let target = *latest.borrow();
                    rendered.set(PointerPosition::new(x.step(target.x, dt), y.step(target.y, dt)));
                });
                move || drop(interval)
            },
            (),
        );
    }
    *rendered
}

fn viewport_rect() -> Option<Rect> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Rect::new(0.0, 0.0, width, height))
}

fn element_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

type IntersectionCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Live `IntersectionObserver` feeding a [`VisibilityTracker`]. Disconnects
/// on drop.
struct InViewObserver {
    tracker: Option<Rc<RefCell<VisibilityTracker>>>,
    observer: Option<IntersectionObserver>,
    _callback: Option<IntersectionCallback>,
}

impl InViewObserver {
    fn idle() -> Self {
        Self {
            tracker: None,
            observer: None,
            _callback: None,
        }
    }

    fn start(node: &NodeRef, options: InViewOptions, on_change: impl Fn(bool) + 'static) -> Self {
        let Some(element) = node.cast::<Element>() else {
            log::debug!("in-view target is not mounted, leaving it hidden");
            return Self::idle();
        };
        let tracker = Rc::new(RefCell::new(VisibilityTracker::new(options)));
        let on_change = Rc::new(on_change);

        if let Some(viewport) = viewport_rect() {
            let change = tracker.borrow_mut().observe_rect(&element_rect(&element), &viewport);
            if let Some(state) = change {
                on_change(state.is_visible());
            }
            if tracker.borrow().is_detached() {
                return Self::idle();
            }
        }

        let callback: IntersectionCallback = Closure::wrap(Box::new({
            let tracker = tracker.clone();
            let on_change = on_change.clone();
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let change = tracker
                        .borrow_mut()
                        .observe(entry.is_intersecting(), entry.intersection_ratio());
                    if let Some(state) = change {
                        on_change(state.is_visible());
                    }
                    if tracker.borrow().is_detached() {
                        observer.disconnect();
                        break;
                    }
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&options.root_margin());
        init.set_threshold(&JsValue::from_f64(options.amount));
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(&element);
                Self {
                    tracker: Some(tracker),
                    observer: Some(observer),
                    _callback: Some(callback),
                }
            }
            Err(err) => {
                log::warn!("IntersectionObserver unavailable, element stays static: {:?}", err);
                Self::idle()
            }
        }
    }
}

impl Drop for InViewObserver {
    fn drop(&mut self) {
        // a callback already queued by the browser must not touch the state
        if let Some(tracker) = self.tracker.take() {
            tracker.borrow_mut().detach();
        }
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}
