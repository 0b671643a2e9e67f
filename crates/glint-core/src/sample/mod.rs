// crates/glint-core/src/sample/mod.rs

pub mod channels;
pub mod ops;
pub mod sample;
pub mod scale;

pub use channels::{Channels, Hsb, Rgb, Rgbw};
pub use sample::Sample;
pub use scale::{EightBit, Normal, Range255, Scale};
