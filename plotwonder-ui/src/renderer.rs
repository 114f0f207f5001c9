//! Renderer models and their live per-plot views.
//!
//! A `Renderer` is the declarative description of a renderable thing; a
//! `RendererView` is its live counterpart inside one plot. The view owns the
//! lazily computed coordinate transform, the paint/layout plumbing and the
//! symbolic node resolution entry point. Glyph-specific drawing is plugged
//! in through the `Painter` trait.

use crate::canvas::CanvasLayer;
use crate::event::Subscription;
use crate::frame::DEFAULT_RANGE_NAME;
use crate::plot::PlotView;
use crate::property::Property;
use plotwonder_core::{BBox, CoordinateMapping, CoordinateTransform, Node, RenderLevel, RendererId, ScreenPoint};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use thiserror::Error;

/// A shared visibility toggle broadcast to all renderers referencing it.
pub struct RendererGroup {
    visible: Property<bool>,
}

impl RendererGroup {
    pub fn new(visible: bool) -> Rc<Self> {
        Rc::new(Self {
            visible: Property::new(visible),
        })
    }

    pub fn visible(&self) -> bool {
        self.visible.get()
    }

    pub fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }

    pub fn on_visible_change(&self, handler: impl Fn(&bool) + 'static) -> Subscription {
        self.visible.on_change(handler)
    }
}

/// Declarative renderer model: range association, coordinate mapping,
/// visibility and draw-order level. Attached to exactly one plot and shared
/// with its view by reference.
pub struct Renderer {
    id: RendererId,
    pub level: Property<RenderLevel>,
    pub visible: Property<bool>,
    pub x_range_name: Property<String>,
    pub y_range_name: Property<String>,
    propagate_hover: Cell<bool>,
    coordinates: Cell<Option<CoordinateMapping>>,
    group: RefCell<Option<Rc<RendererGroup>>>,
    group_subscription: RefCell<Option<Subscription>>,
}

impl Renderer {
    pub fn new(level: RenderLevel) -> Rc<Self> {
        Rc::new(Self {
            id: RendererId::next(),
            level: Property::new(level),
            visible: Property::new(true),
            x_range_name: Property::new(DEFAULT_RANGE_NAME.to_string()),
            y_range_name: Property::new(DEFAULT_RANGE_NAME.to_string()),
            propagate_hover: Cell::new(false),
            coordinates: Cell::new(None),
            group: RefCell::new(None),
            group_subscription: RefCell::new(None),
        })
    }

    pub fn id(&self) -> RendererId {
        self.id
    }

    pub fn propagate_hover(&self) -> bool {
        self.propagate_hover.get()
    }

    pub fn set_propagate_hover(&self, propagate: bool) {
        self.propagate_hover.set(propagate);
    }

    /// Explicit coordinate mapping, overriding the named-range lookup.
    pub fn coordinates(&self) -> Option<CoordinateMapping> {
        self.coordinates.get()
    }

    pub fn set_coordinates(&self, mapping: Option<CoordinateMapping>) {
        self.coordinates.set(mapping);
    }

    pub fn group(&self) -> Option<Rc<RendererGroup>> {
        self.group.borrow().clone()
    }

    /// Attach (or detach) a visibility group.
    ///
    /// Group policy is mirror-on-change: every change of the group's
    /// `visible` flag is written into this renderer's own `visible`, and the
    /// renderer's effective visibility is its own flag alone. The renderer's
    /// current flag is left untouched at attach time.
    pub fn set_group(&self, group: Option<Rc<RendererGroup>>) {
        let subscription = group.as_ref().map(|g| {
            let visible = self.visible.clone();
            g.on_visible_change(move |v| visible.set(*v))
        });
        *self.group.borrow_mut() = group;
        *self.group_subscription.borrow_mut() = subscription;
    }
}

/// Error resolving a renderer's coordinate transform. Indicates structural
/// misconfiguration; there is no retry, the caller surfaces it immediately.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("frame has no x-range named {0:?}")]
    UnknownXRange(String),
    #[error("frame has no y-range named {0:?}")]
    UnknownYRange(String),
    #[error("renderer view is detached from its plot")]
    Detached,
}

/// Subclass-specific draw routine plugged into a `RendererView`.
pub trait Painter {
    fn paint(&self, view: &RendererView);
}

/// Painter for renderers whose drawing happens elsewhere (annotations driven
/// by an external geometry engine, composite renderers).
pub struct NoopPainter;

impl Painter for NoopPainter {
    fn paint(&self, _view: &RendererView) {}
}

/// Live per-plot counterpart of a `Renderer`.
pub struct RendererView {
    model: Rc<Renderer>,
    plot: Weak<PlotView>,
    /// Cache cell for the resolved transform: cleared on invalidation,
    /// recomputed on next access, never eagerly.
    coordinates: RefCell<Option<Rc<CoordinateTransform>>>,
    bbox: Cell<Option<BBox>>,
    has_rendered: Cell<bool>,
    painter: RefCell<Box<dyn Painter>>,
    subscriptions: RefCell<Vec<Subscription>>,
}

impl RendererView {
    pub(crate) fn new(model: Rc<Renderer>, plot: Weak<PlotView>) -> Rc<Self> {
        let view = Rc::new(Self {
            model,
            plot,
            coordinates: RefCell::new(None),
            bbox: Cell::new(None),
            has_rendered: Cell::new(false),
            painter: RefCell::new(Box::new(NoopPainter)),
            subscriptions: RefCell::new(Vec::new()),
        });
        view.connect_signals();
        view
    }

    /// Wire the cache invalidation triggers: either range name changing, or
    /// the owning frame signalling a structural change.
    fn connect_signals(self: &Rc<Self>) {
        let mut subs = self.subscriptions.borrow_mut();

        let weak = Rc::downgrade(self);
        subs.push(self.model.x_range_name.on_change(move |_| {
            if let Some(view) = weak.upgrade() {
                view.invalidate_coordinates();
            }
        }));

        let weak = Rc::downgrade(self);
        subs.push(self.model.y_range_name.on_change(move |_| {
            if let Some(view) = weak.upgrade() {
                view.invalidate_coordinates();
            }
        }));

        if let Some(plot) = self.plot.upgrade() {
            let weak = Rc::downgrade(self);
            subs.push(plot.frame().on_change(move |_| {
                if let Some(view) = weak.upgrade() {
                    view.invalidate_coordinates();
                }
            }));
        }
    }

    pub fn model(&self) -> &Rc<Renderer> {
        &self.model
    }

    pub fn set_painter(&self, painter: Box<dyn Painter>) {
        *self.painter.borrow_mut() = painter;
    }

    /// Screen bounding box, if this view has one. Symbolic nodes targeting a
    /// renderer without a bbox resolve to NaN.
    pub fn bbox(&self) -> Option<BBox> {
        self.bbox.get()
    }

    pub fn set_bbox(&self, bbox: Option<BBox>) {
        self.bbox.set(bbox);
    }

    /// The cached coordinate transform, computing it on first access.
    ///
    /// Repeated calls without an intervening invalidation return the same
    /// `Rc` (compare with `Rc::ptr_eq`).
    pub fn coordinates(&self) -> Result<Rc<CoordinateTransform>, CoordinateError> {
        if let Some(transform) = self.coordinates.borrow().as_ref() {
            return Ok(Rc::clone(transform));
        }
        let transform = Rc::new(self.initialize_coordinates()?);
        *self.coordinates.borrow_mut() = Some(Rc::clone(&transform));
        Ok(transform)
    }

    /// Clear the cached transform. No recomputation happens here.
    pub fn invalidate_coordinates(&self) {
        *self.coordinates.borrow_mut() = None;
    }

    fn initialize_coordinates(&self) -> Result<CoordinateTransform, CoordinateError> {
        let plot = self.plot.upgrade().ok_or(CoordinateError::Detached)?;
        let frame = plot.frame();

        // An explicit mapping bypasses named ranges entirely.
        if let Some(mapping) = self.model.coordinates() {
            return Ok(mapping.resolve(&frame.bbox()));
        }

        let x_name = self.model.x_range_name.get();
        let x_scale = frame
            .x_scale(&x_name)
            .ok_or(CoordinateError::UnknownXRange(x_name))?;

        let y_name = self.model.y_range_name.get();
        let y_scale = frame
            .y_scale(&y_name)
            .ok_or(CoordinateError::UnknownYRange(y_name))?;

        Ok(CoordinateTransform::new(x_scale, y_scale))
    }

    /// Effective visibility. The group, when present, mirrors into the
    /// model's own flag (see `Renderer::set_group`), so the flag alone
    /// decides.
    pub fn displayed(&self) -> bool {
        self.model.visible.get()
    }

    /// Paint if displayed; unconditionally mark the first render pass done
    /// so the plot's "finished" plumbing can settle even for hidden views.
    pub fn render(&self) {
        if self.displayed() {
            self.painter.borrow().paint(self);
        }
        self.has_rendered.set(true);
        if let Some(plot) = self.plot.upgrade() {
            plot.notify_finished_after_paint();
        }
    }

    pub fn has_rendered(&self) -> bool {
        self.has_rendered.get()
    }

    /// The canvas layer this view draws on: the overlay layer for
    /// `Overlay`-level renderers, the primary layer for everything else.
    pub fn layer(&self) -> Option<Rc<CanvasLayer>> {
        let plot = self.plot.upgrade()?;
        let canvas = plot.canvas();
        if self.model.level.get().is_overlay() {
            Some(canvas.overlays())
        } else {
            Some(canvas.primary())
        }
    }

    pub fn request_paint(&self) {
        if let Some(plot) = self.plot.upgrade() {
            plot.request_paint();
        }
    }

    pub fn request_layout(&self) {
        if let Some(plot) = self.plot.upgrade() {
            plot.request_layout();
        }
    }

    /// Resolve a symbolic node in this view's plot context. A detached view
    /// resolves everything to NaN.
    pub fn resolve_node(&self, node: &Node) -> ScreenPoint {
        match self.plot.upgrade() {
            Some(plot) => plot.resolve_node(node, Some(self)),
            None => ScreenPoint::NAN,
        }
    }
}
