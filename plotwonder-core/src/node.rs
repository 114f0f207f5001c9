//! Symbolic coordinate references.
//!
//! A `Node` names an anchor point on some other view's bounding box —
//! canvas, frame, plot, the invoking view's parent, or another renderer —
//! without wiring a hard dependency to it. Resolution happens against the
//! live view tree and fails softly (NaN) while a target is not available
//! yet, e.g. during initial layout.

use crate::bbox::Anchor;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;

/// Opaque identity of a renderer model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RendererId(pub u64);

impl RendererId {
    /// Allocate the next id. Ids are process-unique per thread; the whole
    /// view system is single-threaded.
    pub fn next() -> Self {
        thread_local! {
            static COUNTER: Cell<u64> = const { Cell::new(1) };
        }
        COUNTER.with(|c| {
            let id = c.get();
            c.set(id + 1);
            RendererId(id)
        })
    }
}

impl fmt::Display for RendererId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "renderer#{}", self.0)
    }
}

/// What a `Node` points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeTarget {
    Canvas,
    Frame,
    Plot,
    /// The parent of the view that asks for resolution.
    Parent,
    Renderer(RendererId),
}

/// Immutable symbolic reference to an anchor point.
///
/// `offset` is added to both resulting coordinates uniformly.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub target: NodeTarget,
    pub anchor: Anchor,
    pub offset: f64,
}

impl Node {
    pub fn new(target: NodeTarget, anchor: Anchor) -> Self {
        Self {
            target,
            anchor,
            offset: 0.0,
        }
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    // Frame-edge nodes, the default limits of a box annotation.

    pub fn frame_left() -> Self {
        Self::new(NodeTarget::Frame, Anchor::Left)
    }

    pub fn frame_right() -> Self {
        Self::new(NodeTarget::Frame, Anchor::Right)
    }

    pub fn frame_top() -> Self {
        Self::new(NodeTarget::Frame, Anchor::Top)
    }

    pub fn frame_bottom() -> Self {
        Self::new(NodeTarget::Frame, Anchor::Bottom)
    }
}
