// crates/glint-core/src/color/mod.rs
//
// The color arithmetic layer: written once over `Sample<C, S>` and shared by
// every channel layout and scaling policy.

pub mod compare;
pub mod hex;
pub mod magic;
pub mod text;

use crate::sample::{EightBit, Normal, Range255, Rgb, Sample};

/// RGB with channels in `[0, 1]`.
pub type Color = Sample<Rgb, Normal>;
/// RGB with channels in `[0, 256)`.
pub type Color256 = Sample<Rgb, EightBit>;
/// RGB with channels in `[0, 255]`.
pub type Color255 = Sample<Rgb, Range255>;

pub use compare::{compare, compare_code, compare_rich};
pub use hex::{from_hex, to_hex};
pub use magic::*;
pub use text::{color_names, from_string, to_string};
