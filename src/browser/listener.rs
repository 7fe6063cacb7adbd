use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, Window};

/// A `window` event listener that is removed when the guard is dropped.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Option<Closure<dyn FnMut(Event)>>,
}

impl WindowListener {
    pub fn new<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        if let Err(err) = window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            log::error!("failed to attach {} listener: {:?}", event, err);
            return None;
        }
        log::debug!("attached window {} listener", event);
        Some(Self {
            window,
            event,
            callback: Some(callback),
        })
    }

    /// Removes the listener now. Later calls, and the drop, do nothing.
    pub fn detach(&mut self) {
        let Some(callback) = self.callback.take() else {
            return;
        };
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback(self.event, callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to detach {} listener: {:?}", self.event, err);
        }
        log::debug!("detached window {} listener", self.event);
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        self.detach();
    }
}
