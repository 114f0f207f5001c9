pub mod box_annotation;

pub use box_annotation::{BoxAnnotation, BoxBounds, BoxEdge, Dimensions, PanInfo, PanPhase};
