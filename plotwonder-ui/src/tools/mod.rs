pub mod range_tool;

pub use range_tool::{RangeTool, RangeToolView};
