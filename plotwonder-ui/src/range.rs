//! Shared numeric ranges.

use crate::event::{Event, Subscription};
use plotwonder_core::Interval;
use std::cell::Cell;
use std::rc::Rc;

struct RangeInner {
    bounds: Cell<Interval>,
    change: Event<Interval>,
}

/// A mutable numeric range shared by reference across views and tools.
///
/// `setv` writes both bounds atomically and fires a single change
/// notification, so listeners never observe a half-updated range.
/// Mutation is last-writer-wins; the environment is single-threaded.
#[derive(Clone)]
pub struct Range1d {
    inner: Rc<RangeInner>,
}

impl Range1d {
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            inner: Rc::new(RangeInner {
                bounds: Cell::new(Interval::new(start, end)),
                change: Event::new(),
            }),
        }
    }

    pub fn start(&self) -> f64 {
        self.inner.bounds.get().start
    }

    pub fn end(&self) -> f64 {
        self.inner.bounds.get().end
    }

    pub fn interval(&self) -> Interval {
        self.inner.bounds.get()
    }

    /// Set both bounds in one combined update (single notification).
    pub fn setv(&self, start: f64, end: f64) {
        let next = Interval::new(start, end);
        if self.inner.bounds.get() == next {
            return;
        }
        self.inner.bounds.set(next);
        self.inner.change.emit(&next);
    }

    pub fn on_change(&self, handler: impl Fn(&Interval) + 'static) -> Subscription {
        self.inner.change.connect(handler)
    }

    /// True if `other` is a handle to the same underlying range.
    pub fn same_range(&self, other: &Range1d) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
