pub mod camera;
pub mod geometry;
pub mod input;

pub use camera::Camera2D;
pub use geometry::{Circle, Rect, Segment};
pub use input::{InputState, Key, MouseBtn};
