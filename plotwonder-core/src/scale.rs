use crate::interval::Interval;
use serde::{Deserialize, Serialize};

/// Monotonic linear mapping from a data interval onto a pixel span.
///
/// `compute` goes data → pixel, `invert` goes pixel → data. Either interval
/// may be reversed; the mapping preserves direction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    pub source: Interval,
    pub target: Interval,
}

impl LinearScale {
    pub fn new(source: Interval, target: Interval) -> Self {
        Self { source, target }
    }

    /// Map a data-space value to a pixel coordinate.
    ///
    /// A degenerate source interval (zero span) maps everything to the
    /// target start rather than producing infinities.
    pub fn compute(&self, value: f64) -> f64 {
        let span = self.source.span();
        if span == 0.0 {
            return self.target.start;
        }
        let t = (value - self.source.start) / span;
        self.target.start + t * self.target.span()
    }

    /// Map a pixel coordinate back to a data-space value.
    pub fn invert(&self, px: f64) -> f64 {
        let span = self.target.span();
        if span == 0.0 {
            return self.source.start;
        }
        let t = (px - self.target.start) / span;
        self.source.start + t * self.source.span()
    }
}
