//! Typed publish/subscribe used for all change notification.
//!
//! Single-threaded by design: handlers run synchronously on `emit`, in
//! subscription order. A `Subscription` unsubscribes on drop, so a view that
//! stores its subscriptions tears its wiring down automatically.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Handler<T> = Rc<dyn Fn(&T)>;

struct Registry<T: 'static> {
    next_id: u64,
    handlers: Vec<(u64, Handler<T>)>,
}

/// A typed event stream. Cloning yields another handle to the same stream.
pub struct Event<T: 'static> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T> Clone for Event<T> {
    fn clone(&self) -> Self {
        Self {
            registry: Rc::clone(&self.registry),
        }
    }
}

impl<T> Default for Event<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Event<T> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 1,
                handlers: Vec::new(),
            })),
        }
    }

    /// Register a handler. The handler stays connected until the returned
    /// `Subscription` is dropped (or `forget`-ed, which leaks it on purpose).
    pub fn connect(&self, handler: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.handlers.push((id, Rc::new(handler)));
            id
        };

        let weak: Weak<RefCell<Registry<T>>> = Rc::downgrade(&self.registry);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(registry) = weak.upgrade() {
                    registry.borrow_mut().handlers.retain(|(hid, _)| *hid != id);
                }
            })),
        }
    }

    /// Invoke all connected handlers with `value`.
    ///
    /// The handler list is snapshotted first, so handlers may connect or
    /// drop subscriptions re-entrantly without poisoning the registry.
    pub fn emit(&self, value: &T) {
        let handlers: Vec<Handler<T>> = self
            .registry
            .borrow()
            .handlers
            .iter()
            .map(|(_, h)| Rc::clone(h))
            .collect();

        for handler in handlers {
            handler(value);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.registry.borrow().handlers.len()
    }
}

/// Handle to a connected event handler; dropping it unsubscribes.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Keep the handler connected for the lifetime of the event.
    pub fn forget(mut self) {
        self.cancel = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn emit_reaches_connected_handler() {
        let event: Event<i32> = Event::new();
        let seen = Rc::new(Cell::new(0));

        let seen_in = Rc::clone(&seen);
        let _sub = event.connect(move |v| seen_in.set(*v));

        event.emit(&42);
        assert_eq!(seen.get(), 42);
    }

    #[test]
    fn dropping_subscription_disconnects() {
        let event: Event<i32> = Event::new();
        let count = Rc::new(Cell::new(0));

        let count_in = Rc::clone(&count);
        let sub = event.connect(move |_| count_in.set(count_in.get() + 1));

        event.emit(&1);
        drop(sub);
        event.emit(&2);

        assert_eq!(count.get(), 1);
        assert_eq!(event.handler_count(), 0);
    }

    #[test]
    fn forget_keeps_handler_alive() {
        let event: Event<()> = Event::new();
        let count = Rc::new(Cell::new(0));

        let count_in = Rc::clone(&count);
        event.connect(move |_| count_in.set(count_in.get() + 1)).forget();

        event.emit(&());
        event.emit(&());
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn handlers_run_in_subscription_order() {
        let event: Event<()> = Event::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let order_a = Rc::clone(&order);
        let _a = event.connect(move |_| order_a.borrow_mut().push("a"));
        let order_b = Rc::clone(&order);
        let _b = event.connect(move |_| order_b.borrow_mut().push("b"));

        event.emit(&());
        assert_eq!(*order.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn handler_may_drop_its_own_subscription_reentrantly() {
        let event: Event<()> = Event::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let count = Rc::new(Cell::new(0));

        let slot_in = Rc::clone(&slot);
        let count_in = Rc::clone(&count);
        let sub = event.connect(move |_| {
            count_in.set(count_in.get() + 1);
            // one-shot: disconnect from inside the handler
            slot_in.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(sub);

        event.emit(&());
        event.emit(&());
        assert_eq!(count.get(), 1);
    }
}
