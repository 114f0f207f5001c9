//! Resolved coordinate transforms and explicit coordinate mappings.
//!
//! A renderer converts data coordinates to screen coordinates through a
//! `CoordinateTransform`: a pair of linear scales, one per axis. The
//! transform is normally derived from the frame's named scales, but a
//! renderer may carry an explicit `CoordinateMapping` that is resolved
//! against the frame's pixel extent instead, ignoring named ranges entirely.

use crate::bbox::BBox;
use crate::interval::Interval;
use crate::point::ScreenPoint;
use crate::scale::LinearScale;
use serde::{Deserialize, Serialize};

/// A resolved pair of scales usable to convert data coordinates to screen
/// coordinates for one renderer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoordinateTransform {
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
}

impl CoordinateTransform {
    pub fn new(x_scale: LinearScale, y_scale: LinearScale) -> Self {
        Self { x_scale, y_scale }
    }

    /// Data point → screen point.
    pub fn compute(&self, x: f64, y: f64) -> ScreenPoint {
        ScreenPoint::new(self.x_scale.compute(x), self.y_scale.compute(y))
    }

    /// Screen point → data point.
    pub fn invert(&self, sx: f64, sy: f64) -> (f64, f64) {
        (self.x_scale.invert(sx), self.y_scale.invert(sy))
    }
}

/// Explicit per-renderer coordinate mapping.
///
/// Declares the data intervals that should span the frame; resolving against
/// the frame's bounding box yields a transform independent of the frame's
/// named scales.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoordinateMapping {
    pub x_source: Interval,
    pub y_source: Interval,
}

impl CoordinateMapping {
    pub fn new(x_source: Interval, y_source: Interval) -> Self {
        Self { x_source, y_source }
    }

    /// Resolve against the frame's pixel extent.
    ///
    /// x maps onto [left, right]; y maps onto [bottom, top] because data y
    /// grows upward while screen y grows downward.
    pub fn resolve(&self, frame_bbox: &BBox) -> CoordinateTransform {
        let x_target = Interval::new(frame_bbox.left, frame_bbox.right());
        let y_target = Interval::new(frame_bbox.bottom(), frame_bbox.top);
        CoordinateTransform::new(
            LinearScale::new(self.x_source, x_target),
            LinearScale::new(self.y_source, y_target),
        )
    }
}
