pub mod color;
pub mod instance;
pub mod pixel;
pub mod surface;

pub use color::Color;
pub use instance::{Backdrop, FrameBuffer, RectInstance};
pub use pixel::PixelGrid;
pub use surface::{ColorStop, RadialGradient, Surface};
