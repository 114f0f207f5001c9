//! The plot's inner data area.
//!
//! The frame owns the per-axis scales keyed by range name and fires a change
//! notification whenever its screen extent moves (re-layout). Renderer views
//! subscribe to that notification to invalidate their cached transforms.

use crate::event::{Event, Subscription};
use plotwonder_core::{BBox, Interval, LinearScale};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

pub const DEFAULT_RANGE_NAME: &str = "default";

pub struct Frame {
    bbox: Cell<BBox>,
    x_scales: RefCell<HashMap<String, LinearScale>>,
    y_scales: RefCell<HashMap<String, LinearScale>>,
    change: Event<()>,
}

impl Frame {
    pub fn new(bbox: BBox) -> Rc<Self> {
        Rc::new(Self {
            bbox: Cell::new(bbox),
            x_scales: RefCell::new(HashMap::new()),
            y_scales: RefCell::new(HashMap::new()),
            change: Event::new(),
        })
    }

    /// Frame with `"default"` x/y scales mapping the given data intervals
    /// onto the frame's pixel extent (x left→right, y bottom→top).
    pub fn with_default_scales(bbox: BBox, x_range: Interval, y_range: Interval) -> Rc<Self> {
        let frame = Self::new(bbox);
        frame.set_x_scale(DEFAULT_RANGE_NAME, LinearScale::new(x_range, frame.x_target()));
        frame.set_y_scale(DEFAULT_RANGE_NAME, LinearScale::new(y_range, frame.y_target()));
        frame
    }

    pub fn bbox(&self) -> BBox {
        self.bbox.get()
    }

    /// Move the frame (re-layout). Retargets every scale onto the new pixel
    /// extent and fires the change notification.
    pub fn set_bbox(&self, bbox: BBox) {
        if self.bbox.get() == bbox {
            return;
        }
        self.bbox.set(bbox);

        let x_target = self.x_target();
        for scale in self.x_scales.borrow_mut().values_mut() {
            scale.target = x_target;
        }
        let y_target = self.y_target();
        for scale in self.y_scales.borrow_mut().values_mut() {
            scale.target = y_target;
        }

        self.change.emit(&());
    }

    fn x_target(&self) -> Interval {
        let bbox = self.bbox.get();
        Interval::new(bbox.left, bbox.right())
    }

    fn y_target(&self) -> Interval {
        let bbox = self.bbox.get();
        Interval::new(bbox.bottom(), bbox.top)
    }

    pub fn set_x_scale(&self, name: impl Into<String>, scale: LinearScale) {
        self.x_scales.borrow_mut().insert(name.into(), scale);
    }

    pub fn set_y_scale(&self, name: impl Into<String>, scale: LinearScale) {
        self.y_scales.borrow_mut().insert(name.into(), scale);
    }

    pub fn x_scale(&self, name: &str) -> Option<LinearScale> {
        self.x_scales.borrow().get(name).copied()
    }

    pub fn y_scale(&self, name: &str) -> Option<LinearScale> {
        self.y_scales.borrow().get(name).copied()
    }

    pub fn on_change(&self, handler: impl Fn(&()) + 'static) -> Subscription {
        self.change.connect(handler)
    }

    /// Fire the change notification without moving the frame.
    pub fn notify_change(&self) {
        self.change.emit(&());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn default_scales_span_the_frame() {
        let frame = Frame::with_default_scales(
            BBox::new(0.0, 0.0, 400.0, 200.0),
            Interval::new(0.0, 10.0),
            Interval::new(0.0, 5.0),
        );

        let x = frame.x_scale(DEFAULT_RANGE_NAME).unwrap();
        assert_eq!(x.compute(0.0), 0.0);
        assert_eq!(x.compute(10.0), 400.0);

        // y is inverted: data start at the frame bottom.
        let y = frame.y_scale(DEFAULT_RANGE_NAME).unwrap();
        assert_eq!(y.compute(0.0), 200.0);
        assert_eq!(y.compute(5.0), 0.0);
    }

    #[test]
    fn unknown_scale_name_is_none() {
        let frame = Frame::new(BBox::new(0.0, 0.0, 100.0, 100.0));
        assert!(frame.x_scale("missing").is_none());
        assert!(frame.y_scale(DEFAULT_RANGE_NAME).is_none());
    }

    #[test]
    fn set_bbox_retargets_scales_and_notifies() {
        let frame = Frame::with_default_scales(
            BBox::new(0.0, 0.0, 100.0, 100.0),
            Interval::new(0.0, 1.0),
            Interval::new(0.0, 1.0),
        );
        let fired = Rc::new(Cell::new(0));
        let fired_in = Rc::clone(&fired);
        let _sub = frame.on_change(move |_| fired_in.set(fired_in.get() + 1));

        frame.set_bbox(BBox::new(50.0, 0.0, 200.0, 100.0));

        assert_eq!(fired.get(), 1);
        let x = frame.x_scale(DEFAULT_RANGE_NAME).unwrap();
        assert_eq!(x.compute(0.0), 50.0);
        assert_eq!(x.compute(1.0), 250.0);
    }

    #[test]
    fn set_bbox_with_same_extent_is_silent() {
        let bbox = BBox::new(0.0, 0.0, 100.0, 100.0);
        let frame = Frame::new(bbox);
        let fired = Rc::new(Cell::new(false));
        let fired_in = Rc::clone(&fired);
        let _sub = frame.on_change(move |_| fired_in.set(true));

        frame.set_bbox(bbox);
        assert!(!fired.get());
    }
}
