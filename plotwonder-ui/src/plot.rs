//! The plot view: root of the renderer view tree.

use crate::canvas::CanvasView;
use crate::event::{Event, Subscription};
use crate::frame::Frame;
use crate::renderer::{Renderer, RendererView};
use plotwonder_core::{BBox, Node, NodeTarget, RendererId, ScreenPoint};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Per-plot live root: owns the canvas and frame collaborators, the registry
/// of renderer views, and the paint/layout request plumbing.
pub struct PlotView {
    bbox: Cell<BBox>,
    canvas: Rc<CanvasView>,
    frame: Rc<Frame>,
    renderer_views: RefCell<Vec<Rc<RendererView>>>,
    paint_requests: Cell<u64>,
    layout_requests: Cell<u64>,
    finished: Cell<bool>,
    finished_event: Event<()>,
    ranges_update: Event<()>,
}

impl PlotView {
    pub fn new(canvas: Rc<CanvasView>, frame: Rc<Frame>, bbox: BBox) -> Rc<Self> {
        Rc::new(Self {
            bbox: Cell::new(bbox),
            canvas,
            frame,
            renderer_views: RefCell::new(Vec::new()),
            paint_requests: Cell::new(0),
            layout_requests: Cell::new(0),
            finished: Cell::new(false),
            finished_event: Event::new(),
            ranges_update: Event::new(),
        })
    }

    pub fn canvas(&self) -> &Rc<CanvasView> {
        &self.canvas
    }

    pub fn frame(&self) -> &Rc<Frame> {
        &self.frame
    }

    pub fn bbox(&self) -> BBox {
        self.bbox.get()
    }

    pub fn set_bbox(&self, bbox: BBox) {
        self.bbox.set(bbox);
    }

    /// Build and register the live view for a renderer model.
    pub fn add_renderer(self: &Rc<Self>, model: Rc<Renderer>) -> Rc<RendererView> {
        let view = RendererView::new(model, Rc::downgrade(self));
        self.renderer_views.borrow_mut().push(Rc::clone(&view));
        view
    }

    /// Look up the live view for a renderer, if one has been registered.
    pub fn renderer_view(&self, id: RendererId) -> Option<Rc<RendererView>> {
        self.renderer_views
            .borrow()
            .iter()
            .find(|v| v.model().id() == id)
            .cloned()
    }

    pub fn request_paint(&self) {
        self.paint_requests.set(self.paint_requests.get() + 1);
    }

    pub fn paint_requests(&self) -> u64 {
        self.paint_requests.get()
    }

    pub fn request_layout(&self) {
        self.layout_requests.set(self.layout_requests.get() + 1);
    }

    pub fn layout_requests(&self) -> u64 {
        self.layout_requests.get()
    }

    /// Render every view in paint-bucket order onto its layer.
    pub fn paint(&self) {
        let mut views: Vec<Rc<RendererView>> = self.renderer_views.borrow().clone();
        // Stable sort keeps insertion order within a level.
        views.sort_by_key(|v| v.model().level.get());

        for view in views {
            view.render();
            if let Some(layer) = view.layer() {
                layer.mark_painted();
            }
        }
    }

    /// Called by each view after its render pass; flips to finished once
    /// every registered view has rendered at least once.
    pub fn notify_finished_after_paint(&self) {
        if self.finished.get() {
            return;
        }
        let all_rendered = self.renderer_views.borrow().iter().all(|v| v.has_rendered());
        if all_rendered {
            self.finished.set(true);
            self.finished_event.emit(&());
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished.get()
    }

    pub fn on_finished(&self, handler: impl Fn(&()) + 'static) -> Subscription {
        self.finished_event.connect(handler)
    }

    /// Notify downstream consumers that an interactive range update is done
    /// (fired by tools at the end of a drag, not on every move).
    pub fn trigger_ranges_update_event(&self) {
        self.ranges_update.emit(&());
    }

    pub fn on_ranges_update(&self, handler: impl Fn(&()) + 'static) -> Subscription {
        self.ranges_update.connect(handler)
    }

    /// Resolve a symbolic node to screen space.
    ///
    /// Fails softly: a target that is not (yet) available, or one without a
    /// bounding box, yields `ScreenPoint::NAN`. Callers treat NaN as
    /// "not resolvable yet", which is normal during initial layout.
    pub fn resolve_node(&self, node: &Node, invoking: Option<&RendererView>) -> ScreenPoint {
        let bbox = match node.target {
            NodeTarget::Canvas => Some(self.canvas.bbox()),
            NodeTarget::Frame => Some(self.frame.bbox()),
            NodeTarget::Plot => Some(self.bbox()),
            // The parent of a renderer view is the plot view itself; with no
            // invoking view there is no parent to speak of.
            NodeTarget::Parent => invoking.map(|_| self.bbox()),
            NodeTarget::Renderer(id) => self.renderer_view(id).and_then(|v| v.bbox()),
        };

        match bbox {
            Some(bbox) => bbox.anchor(node.anchor).offset(node.offset),
            None => ScreenPoint::NAN,
        }
    }
}
