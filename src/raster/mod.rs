//! Software rasterizer: the pixel buffer, triangle fills and the 3D
//! submission path.

pub mod buffer;
pub mod project;
pub mod triangle;

pub use buffer::PixelBuffer;
