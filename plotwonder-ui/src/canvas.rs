//! Canvas drawing layers.
//!
//! Actual pixel output is an external concern; here a layer is the paint
//! target handed to renderer views, with a counter that records how many
//! times it was painted. Interactive overlays draw on a separate layer above
//! the primary one so data repaints never disturb them.

use plotwonder_core::BBox;
use std::cell::Cell;
use std::rc::Rc;

pub struct CanvasLayer {
    name: &'static str,
    paint_count: Cell<u64>,
}

impl CanvasLayer {
    fn new(name: &'static str) -> Rc<Self> {
        Rc::new(Self {
            name,
            paint_count: Cell::new(0),
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn mark_painted(&self) {
        self.paint_count.set(self.paint_count.get() + 1);
    }

    pub fn paint_count(&self) -> u64 {
        self.paint_count.get()
    }
}

pub struct CanvasView {
    bbox: Cell<BBox>,
    primary: Rc<CanvasLayer>,
    overlays: Rc<CanvasLayer>,
}

impl CanvasView {
    pub fn new(bbox: BBox) -> Rc<Self> {
        Rc::new(Self {
            bbox: Cell::new(bbox),
            primary: CanvasLayer::new("primary"),
            overlays: CanvasLayer::new("overlays"),
        })
    }

    pub fn bbox(&self) -> BBox {
        self.bbox.get()
    }

    pub fn set_bbox(&self, bbox: BBox) {
        self.bbox.set(bbox);
    }

    pub fn primary(&self) -> Rc<CanvasLayer> {
        Rc::clone(&self.primary)
    }

    pub fn overlays(&self) -> Rc<CanvasLayer> {
        Rc::clone(&self.overlays)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_are_distinct_and_named() {
        let canvas = CanvasView::new(BBox::new(0.0, 0.0, 800.0, 600.0));
        assert!(!Rc::ptr_eq(&canvas.primary(), &canvas.overlays()));
        assert_eq!(canvas.primary().name(), "primary");
        assert_eq!(canvas.overlays().name(), "overlays");
    }

    #[test]
    fn paint_counter_advances() {
        let canvas = CanvasView::new(BBox::new(0.0, 0.0, 10.0, 10.0));
        let layer = canvas.primary();
        layer.mark_painted();
        layer.mark_painted();
        assert_eq!(layer.paint_count(), 2);
        assert_eq!(canvas.overlays().paint_count(), 0);
    }
}
