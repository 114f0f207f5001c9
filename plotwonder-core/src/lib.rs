pub mod bbox;
pub mod coordinates;
pub mod interval;
pub mod level;
pub mod node;
pub mod point;
pub mod scale;

pub use bbox::{Anchor, BBox};
pub use coordinates::{CoordinateMapping, CoordinateTransform};
pub use interval::Interval;
pub use level::RenderLevel;
pub use node::{Node, NodeTarget, RendererId};
pub use point::ScreenPoint;
pub use scale::LinearScale;
