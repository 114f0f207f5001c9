use serde::{Deserialize, Serialize};

/// A closed numeric interval in data space.
///
/// `start > end` is legal and means a reversed axis; scales preserve the
/// direction rather than normalizing it away.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Signed span; negative for reversed intervals.
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    pub fn is_reversed(&self) -> bool {
        self.start > self.end
    }
}
