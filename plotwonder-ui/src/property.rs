//! Observable model properties.

use crate::event::{Event, Subscription};
use std::cell::RefCell;
use std::rc::Rc;

struct PropertyInner<T: 'static> {
    value: RefCell<T>,
    change: Event<T>,
}

/// A shared observable cell: the unit of the declarative model layer.
///
/// Cloning yields another handle to the same cell. `set` notifies only when
/// the value actually changes, so redundant writes never fan out.
pub struct Property<T: 'static> {
    inner: Rc<PropertyInner<T>>,
}

impl<T> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + PartialEq + 'static> Property<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(PropertyInner {
                value: RefCell::new(value),
                change: Event::new(),
            }),
        }
    }

    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Write a new value, notifying subscribers iff it differs.
    pub fn set(&self, value: T) {
        {
            let mut current = self.inner.value.borrow_mut();
            if *current == value {
                return;
            }
            *current = value.clone();
        }
        // Borrow released before handlers run: they may read the property.
        self.inner.change.emit(&value);
    }

    pub fn on_change(&self, handler: impl Fn(&T) + 'static) -> Subscription {
        self.inner.change.connect(handler)
    }
}
