//! Live view layer of the plotting toolkit: change notification, renderer
//! views with cached coordinate transforms, symbolic node resolution, and
//! the interactive range tool. Single-threaded and event-driven; all
//! handlers run synchronously.

pub mod annotations;
pub mod canvas;
pub mod event;
pub mod frame;
pub mod plot;
pub mod property;
pub mod range;
pub mod renderer;
pub mod tools;

pub use annotations::{BoxAnnotation, BoxBounds, BoxEdge, Dimensions, PanInfo, PanPhase};
pub use canvas::{CanvasLayer, CanvasView};
pub use event::{Event, Subscription};
pub use frame::{Frame, DEFAULT_RANGE_NAME};
pub use plot::PlotView;
pub use property::Property;
pub use range::Range1d;
pub use renderer::{CoordinateError, NoopPainter, Painter, Renderer, RendererGroup, RendererView};
pub use tools::{RangeTool, RangeToolView};
