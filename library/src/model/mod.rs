pub mod geometry;
pub mod template;

pub use geometry::CanvasSize;
pub use template::{AspectRatio, Guideline, GuidelineAxis, SafeZone, Template};
