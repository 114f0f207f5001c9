use crate::point::ScreenPoint;
use serde::{Deserialize, Serialize};

/// A named reference point on a rectangular bounding box.
///
/// Nine two-axis anchors (corners, edge centers, center) plus four
/// single-axis anchors. Single-axis anchors resolve the orthogonal
/// coordinate to NaN; callers that ask for `Left` only want an x.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
    Top,
    Bottom,
    Left,
    Right,
}

/// Axis-aligned bounding box in screen space (pixels, y grows downward).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn hcenter(&self) -> f64 {
        self.left + self.width / 2.0
    }

    pub fn vcenter(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// Check if a screen point is inside the box (right/bottom exclusive).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x < self.right() && y >= self.top && y < self.bottom()
    }

    /// Resolve a named anchor to a screen point on this box.
    ///
    /// The match is exhaustive: adding an `Anchor` variant without handling
    /// it here is a compile error, not a silent NaN fall-through.
    pub fn anchor(&self, anchor: Anchor) -> ScreenPoint {
        match anchor {
            Anchor::TopLeft => ScreenPoint::new(self.left, self.top),
            Anchor::TopCenter => ScreenPoint::new(self.hcenter(), self.top),
            Anchor::TopRight => ScreenPoint::new(self.right(), self.top),
            Anchor::CenterLeft => ScreenPoint::new(self.left, self.vcenter()),
            Anchor::Center => ScreenPoint::new(self.hcenter(), self.vcenter()),
            Anchor::CenterRight => ScreenPoint::new(self.right(), self.vcenter()),
            Anchor::BottomLeft => ScreenPoint::new(self.left, self.bottom()),
            Anchor::BottomCenter => ScreenPoint::new(self.hcenter(), self.bottom()),
            Anchor::BottomRight => ScreenPoint::new(self.right(), self.bottom()),
            Anchor::Top => ScreenPoint::new(f64::NAN, self.top),
            Anchor::Bottom => ScreenPoint::new(f64::NAN, self.bottom()),
            Anchor::Left => ScreenPoint::new(self.left, f64::NAN),
            Anchor::Right => ScreenPoint::new(self.right(), f64::NAN),
        }
    }
}
