use serde::{Deserialize, Serialize};

/// A point in screen space (pixels, y grows downward).
///
/// Either coordinate may be NaN: symbolic anchor resolution uses NaN as a
/// "not resolvable" sentinel, and single-axis anchors leave the orthogonal
/// coordinate NaN on purpose. Callers must treat NaN as "skip/defer".
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    /// The fully-unresolved sentinel point.
    pub const NAN: ScreenPoint = ScreenPoint {
        x: f64::NAN,
        y: f64::NAN,
    };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True if at least one coordinate carries a usable value.
    ///
    /// A point with exactly one NaN coordinate is a partial (single-axis)
    /// anchor and still counts as resolved.
    pub fn is_resolved(&self) -> bool {
        !(self.x.is_nan() && self.y.is_nan())
    }

    /// Add the same scalar to both coordinates.
    pub fn offset(&self, offset: f64) -> Self {
        Self {
            x: self.x + offset,
            y: self.y + offset,
        }
    }
}
