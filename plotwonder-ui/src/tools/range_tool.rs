//! Interactive range selection.
//!
//! A `RangeTool` keeps a rectangular overlay annotation synchronized with
//! one or two numeric ranges, in both directions: range changes reshape the
//! overlay, overlay drags write back into the ranges. The two update
//! procedures converge and must never trigger each other in a cycle; an
//! explicit sync-source tag makes that invariant checkable instead of
//! depending on which listeners happen to be wired.

use crate::annotations::{BoxAnnotation, BoxBounds, BoxEdge, Dimensions, PanPhase};
use crate::event::Subscription;
use crate::plot::PlotView;
use crate::property::Property;
use crate::range::Range1d;
use plotwonder_core::Node;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Range tool model.
///
/// The overlay's draggable axes (`movable`, `resizable`) are derived once at
/// construction from which ranges are present and interaction-enabled, and
/// never change afterwards.
pub struct RangeTool {
    x_range: Option<Range1d>,
    y_range: Option<Range1d>,
    x_interaction: bool,
    y_interaction: bool,
    overlay: Rc<BoxAnnotation>,
    pub active: Property<bool>,
}

impl RangeTool {
    /// Tool with both interactions enabled and the default frame-edge
    /// overlay.
    pub fn new(x_range: Option<Range1d>, y_range: Option<Range1d>) -> Rc<Self> {
        Self::with_options(x_range, y_range, true, true, None)
    }

    pub fn with_options(
        x_range: Option<Range1d>,
        y_range: Option<Range1d>,
        x_interaction: bool,
        y_interaction: bool,
        overlay: Option<Rc<BoxAnnotation>>,
    ) -> Rc<Self> {
        let overlay = overlay.unwrap_or_else(BoxAnnotation::with_frame_limits);

        let x_draggable = x_range.is_some() && x_interaction;
        let y_draggable = y_range.is_some() && y_interaction;
        let dims = match (x_draggable, y_draggable) {
            (true, true) => Dimensions::Both,
            (true, false) => Dimensions::X,
            (false, true) => Dimensions::Y,
            (false, false) => Dimensions::None,
        };
        overlay.set_movable(dims);
        overlay.set_resizable(dims);

        Rc::new(Self {
            x_range,
            y_range,
            x_interaction,
            y_interaction,
            overlay,
            active: Property::new(true),
        })
    }

    pub fn x_range(&self) -> Option<Range1d> {
        self.x_range.clone()
    }

    pub fn y_range(&self) -> Option<Range1d> {
        self.y_range.clone()
    }

    pub fn x_interaction(&self) -> bool {
        self.x_interaction
    }

    pub fn y_interaction(&self) -> bool {
        self.y_interaction
    }

    pub fn overlay(&self) -> &Rc<BoxAnnotation> {
        &self.overlay
    }
}

/// Which side of the bidirectional sync is currently writing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SyncSource {
    Ranges,
    Overlay,
}

/// Live counterpart of a `RangeTool` attached to one plot.
pub struct RangeToolView {
    tool: Rc<RangeTool>,
    plot: Weak<PlotView>,
    sync_source: Cell<Option<SyncSource>>,
    subscriptions: RefCell<Vec<Subscription>>,
}

impl RangeToolView {
    pub fn new(tool: Rc<RangeTool>, plot: &Rc<PlotView>) -> Rc<Self> {
        let view = Rc::new(Self {
            tool,
            plot: Rc::downgrade(plot),
            sync_source: Cell::new(None),
            subscriptions: RefCell::new(Vec::new()),
        });
        view.connect_signals();

        // Seed the overlay from current ranges; never the reverse, so
        // attaching the tool cannot silently mutate caller-supplied ranges.
        view.tool.overlay().editable.set(view.tool.active.get());
        view.update_overlay_from_ranges();
        view
    }

    pub fn tool(&self) -> &Rc<RangeTool> {
        &self.tool
    }

    fn connect_signals(self: &Rc<Self>) {
        let mut subs = self.subscriptions.borrow_mut();

        for range in [self.tool.x_range(), self.tool.y_range()].into_iter().flatten() {
            let weak = Rc::downgrade(self);
            subs.push(range.on_change(move |_| {
                if let Some(view) = weak.upgrade() {
                    view.update_overlay_from_ranges();
                }
            }));
        }

        let weak = Rc::downgrade(self);
        subs.push(self.tool.overlay().on_pan(move |(phase, _info)| {
            let Some(view) = weak.upgrade() else { return };
            match phase {
                PanPhase::Start | PanPhase::Pan => view.update_ranges_from_overlay(),
                PanPhase::End => {
                    if let Some(plot) = view.plot.upgrade() {
                        plot.trigger_ranges_update_event();
                    }
                }
            }
        }));

        // Inactive tool means a non-draggable overlay.
        let overlay = Rc::clone(self.tool.overlay());
        subs.push(self.tool.active.on_change(move |active| {
            overlay.editable.set(*active);
        }));
    }

    /// Read the overlay's numeric limits back into the ranges.
    ///
    /// Only axes with interaction enabled, a bound range, and numeric edges
    /// participate; each range is written with a single combined set.
    pub fn update_ranges_from_overlay(&self) {
        if self.sync_source.get().is_some() {
            return;
        }
        self.sync_source.set(Some(SyncSource::Overlay));

        let overlay = self.tool.overlay();
        if self.tool.x_interaction() {
            if let (Some(range), Some(left), Some(right)) = (
                self.tool.x_range(),
                overlay.left().value(),
                overlay.right().value(),
            ) {
                range.setv(left, right);
            }
        }
        if self.tool.y_interaction() {
            if let (Some(range), Some(bottom), Some(top)) = (
                self.tool.y_range(),
                overlay.bottom().value(),
                overlay.top().value(),
            ) {
                range.setv(bottom, top);
            }
        }

        self.sync_source.set(None);
    }

    /// Reshape the overlay from the current range bounds.
    ///
    /// An unbound axis falls back to the frame edges; with neither range
    /// bound there is no geometry to show, so the overlay is cleared.
    pub fn update_overlay_from_ranges(&self) {
        if self.sync_source.get().is_some() {
            return;
        }
        self.sync_source.set(Some(SyncSource::Ranges));

        let overlay = self.tool.overlay();
        match (self.tool.x_range(), self.tool.y_range()) {
            (None, None) => {
                log::warn!("range tool has no x_range nor y_range configured; clearing overlay");
                overlay.clear();
            }
            (x_range, y_range) => {
                let (left, right) = match x_range {
                    Some(r) => (BoxEdge::Data(r.start()), BoxEdge::Data(r.end())),
                    None => (
                        BoxEdge::Symbolic(Node::frame_left()),
                        BoxEdge::Symbolic(Node::frame_right()),
                    ),
                };
                let (bottom, top) = match y_range {
                    Some(r) => (BoxEdge::Data(r.start()), BoxEdge::Data(r.end())),
                    None => (
                        BoxEdge::Symbolic(Node::frame_bottom()),
                        BoxEdge::Symbolic(Node::frame_top()),
                    ),
                };
                overlay.update(BoxBounds {
                    left,
                    right,
                    top,
                    bottom,
                });
            }
        }

        self.sync_source.set(None);
    }
}
