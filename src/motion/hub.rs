use std::rc::Rc;

type Consumer<T> = Rc<dyn Fn(T)>;

/// Reference-counted registry behind a process-wide source (scroll, pointer).
///
/// The hub owns the latest value, the consumers in registration order and an
/// optional binding `B` (the live platform listener). The first subscriber
/// is told to attach a binding, and the binding is handed back when the last
/// subscriber leaves so the caller can drop it.
pub struct Hub<T, B> {
    value: T,
    consumers: Vec<(usize, Consumer<T>)>,
    next_id: usize,
    binding: Option<B>,
}

/// Result of [`Hub::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscribed {
    pub id: usize,
    /// This subscriber is the first one and no binding is attached yet.
    pub needs_binding: bool,
}

impl<T: Copy + PartialEq, B> Hub<T, B> {
    pub fn new(initial: T) -> Self {
        Self {
            value: initial,
            consumers: Vec::new(),
            next_id: 0,
            binding: None,
        }
    }

    pub fn current(&self) -> T {
        self.value
    }

    pub fn subscribers(&self) -> usize {
        self.consumers.len()
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    pub fn subscribe(&mut self, consumer: impl Fn(T) + 'static) -> Subscribed {
        let id = self.next_id;
        self.next_id += 1;
        self.consumers.push((id, Rc::new(consumer)));
        Subscribed {
            id,
            needs_binding: self.binding.is_none(),
        }
    }

    pub fn bind(&mut self, binding: B) {
        self.binding = Some(binding);
    }

    /// Removes a subscriber. Unknown ids are ignored, so unsubscribing twice
    /// is harmless. Returns the binding once nobody is left listening.
    pub fn unsubscribe(&mut self, id: usize) -> Option<B> {
        let before = self.consumers.len();
        self.consumers.retain(|(existing, _)| *existing != id);
        if self.consumers.len() == before || !self.consumers.is_empty() {
            return None;
        }
        self.binding.take()
    }

    /// Stores a new value and returns the consumers that must be told about
    /// it, in registration order. Empty when the value did not change.
    ///
    /// Consumers are returned rather than called so the caller can release
    /// any borrow on the hub before running them.
    pub fn publish(&mut self, value: T) -> Vec<Consumer<T>> {
        if value == self.value {
            return Vec::new();
        }
        self.value = value;
        self.consumers.iter().map(|(_, consumer)| consumer.clone()).collect()
    }
}

pub fn notify<T: Copy>(consumers: Vec<Consumer<T>>, value: T) {
    for consumer in consumers {
        consumer(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::PointerPosition;
    use std::cell::{Cell, RefCell};

    struct Binding(Rc<Cell<bool>>);

    impl Drop for Binding {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[test]
    fn first_subscriber_binds_and_last_releases() {
        let released = Rc::new(Cell::new(false));
        let mut hub: Hub<f64, Binding> = Hub::new(0.0);

        let first = hub.subscribe(|_| {});
        assert!(first.needs_binding);
        hub.bind(Binding(released.clone()));

        let second = hub.subscribe(|_| {});
        assert!(!second.needs_binding);

        assert!(hub.unsubscribe(first.id).is_none());
        assert!(hub.is_bound());

        drop(hub.unsubscribe(second.id));
        assert!(released.get());
        assert!(!hub.is_bound());
        assert_eq!(hub.subscribers(), 0);
    }

    #[test]
    fn unsubscribing_twice_is_a_no_op() {
        let mut hub: Hub<f64, Binding> = Hub::new(0.0);
        let sub = hub.subscribe(|_| {});
        hub.bind(Binding(Rc::new(Cell::new(false))));
        assert!(hub.unsubscribe(sub.id).is_some());
        assert!(hub.unsubscribe(sub.id).is_none());
    }

    #[test]
    fn consumers_run_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut hub: Hub<f64, ()> = Hub::new(0.0);
        for name in ["a", "b", "c"] {
            let log = log.clone();
            hub.subscribe(move |value| log.borrow_mut().push((name, value)));
        }
        let consumers = hub.publish(0.5);
        notify(consumers, 0.5);
        assert_eq!(*log.borrow(), [("a", 0.5), ("b", 0.5), ("c", 0.5)]);
    }

    #[test]
    fn unchanged_value_notifies_nobody() {
        let mut hub: Hub<f64, ()> = Hub::new(0.25);
        hub.subscribe(|_| panic!("should not be called"));
        assert!(hub.publish(0.25).is_empty());
    }

    #[test]
    fn pointer_hub_reports_origin_until_first_move() {
        let mut hub: Hub<PointerPosition, ()> = Hub::new(PointerPosition::default());
        assert_eq!(hub.current(), PointerPosition::new(0.0, 0.0));
        hub.publish(PointerPosition::new(120.0, 80.0));
        assert_eq!(hub.current(), PointerPosition::new(120.0, 80.0));
    }
}
