use serde::{Deserialize, Serialize};

/// Paint ordering bucket.
///
/// Determines draw order within a plot and which canvas layer a renderer is
/// drawn on: `Overlay` goes to the overlay layer, everything else to the
/// primary layer. Variant order is paint order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderLevel {
    Image,
    Underlay,
    Glyph,
    Guide,
    Annotation,
    Overlay,
}

impl RenderLevel {
    /// Whether renderers at this level draw on the overlay canvas layer.
    pub fn is_overlay(&self) -> bool {
        matches!(self, RenderLevel::Overlay)
    }
}
