//! Rectangular overlay annotation.
//!
//! The box's four limits are either plain data-space numbers or symbolic
//! nodes (typically the frame edges). Its resize/drag geometry engine is an
//! external collaborator: user drags arrive here as an already-interpreted
//! `pan` event stream plus updated limits.

use crate::event::{Event, Subscription};
use crate::property::Property;
use crate::renderer::Renderer;
use plotwonder_core::{Node, RenderLevel};
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;

/// Which axes an interaction applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimensions {
    Both,
    X,
    Y,
    None,
}

/// Drag lifecycle phase carried on the `pan` event stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanPhase {
    Start,
    Pan,
    End,
}

/// Pointer movement since the previous pan event, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PanInfo {
    pub dx: f64,
    pub dy: f64,
}

/// One limit of the box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxEdge {
    /// A concrete data-space coordinate.
    Data(f64),
    /// A symbolic anchor resolved against the live view tree.
    Symbolic(Node),
    Unset,
}

impl BoxEdge {
    /// The numeric value, if this edge carries one.
    pub fn value(&self) -> Option<f64> {
        match self {
            BoxEdge::Data(v) => Some(*v),
            _ => None,
        }
    }
}

/// All four limits, written as one unit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxBounds {
    pub left: BoxEdge,
    pub right: BoxEdge,
    pub top: BoxEdge,
    pub bottom: BoxEdge,
}

impl BoxBounds {
    pub const UNSET: BoxBounds = BoxBounds {
        left: BoxEdge::Unset,
        right: BoxEdge::Unset,
        top: BoxEdge::Unset,
        bottom: BoxEdge::Unset,
    };

    /// The default overlay limits: the four frame edges.
    pub fn frame_edges() -> Self {
        Self {
            left: BoxEdge::Symbolic(Node::frame_left()),
            right: BoxEdge::Symbolic(Node::frame_right()),
            top: BoxEdge::Symbolic(Node::frame_top()),
            bottom: BoxEdge::Symbolic(Node::frame_bottom()),
        }
    }
}

/// Overlay-level box annotation.
pub struct BoxAnnotation {
    model: Rc<Renderer>,
    bounds: Cell<BoxBounds>,
    movable: Cell<Dimensions>,
    resizable: Cell<Dimensions>,
    pub editable: Property<bool>,
    pan: Event<(PanPhase, PanInfo)>,
    change: Event<()>,
}

impl BoxAnnotation {
    /// Annotation with all limits unset.
    pub fn new() -> Rc<Self> {
        Self::with_bounds(BoxBounds::UNSET)
    }

    /// The default interactive overlay: frame-edge limits, nothing draggable
    /// until a tool derives the axes.
    pub fn with_frame_limits() -> Rc<Self> {
        Self::with_bounds(BoxBounds::frame_edges())
    }

    fn with_bounds(bounds: BoxBounds) -> Rc<Self> {
        Rc::new(Self {
            model: Renderer::new(RenderLevel::Overlay),
            bounds: Cell::new(bounds),
            movable: Cell::new(Dimensions::None),
            resizable: Cell::new(Dimensions::None),
            editable: Property::new(false),
            pan: Event::new(),
            change: Event::new(),
        })
    }

    pub fn model(&self) -> &Rc<Renderer> {
        &self.model
    }

    pub fn bounds(&self) -> BoxBounds {
        self.bounds.get()
    }

    pub fn left(&self) -> BoxEdge {
        self.bounds.get().left
    }

    pub fn right(&self) -> BoxEdge {
        self.bounds.get().right
    }

    pub fn top(&self) -> BoxEdge {
        self.bounds.get().top
    }

    pub fn bottom(&self) -> BoxEdge {
        self.bounds.get().bottom
    }

    /// Write all four limits in one combined update (single notification).
    pub fn update(&self, bounds: BoxBounds) {
        if self.bounds.get() == bounds {
            return;
        }
        self.bounds.set(bounds);
        self.change.emit(&());
    }

    /// Drop all limits; the box has no geometry to show.
    pub fn clear(&self) {
        self.update(BoxBounds::UNSET);
    }

    pub fn is_cleared(&self) -> bool {
        self.bounds.get() == BoxBounds::UNSET
    }

    pub fn movable(&self) -> Dimensions {
        self.movable.get()
    }

    pub fn set_movable(&self, dims: Dimensions) {
        self.movable.set(dims);
    }

    pub fn resizable(&self) -> Dimensions {
        self.resizable.get()
    }

    pub fn set_resizable(&self, dims: Dimensions) {
        self.resizable.set(dims);
    }

    pub fn on_change(&self, handler: impl Fn(&()) + 'static) -> Subscription {
        self.change.connect(handler)
    }

    pub fn on_pan(&self, handler: impl Fn(&(PanPhase, PanInfo)) + 'static) -> Subscription {
        self.pan.connect(handler)
    }

    /// Feed one pan event into the stream. The drag geometry engine (an
    /// external collaborator) calls this after it has moved the limits.
    pub fn emit_pan(&self, phase: PanPhase, info: PanInfo) {
        self.pan.emit(&(phase, info));
    }
}
