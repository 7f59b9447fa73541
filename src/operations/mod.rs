mod resize;
mod stripes;
mod to_rgba;

pub use resize::SquareResizer;
pub use stripes::tricolour;
pub use to_rgba::to_rgba8;
