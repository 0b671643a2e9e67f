pub mod error;
pub mod validate;

pub mod color;
pub mod gamma;
pub mod math;
pub mod sample;
pub mod signal;

pub use crate::color::{Color, Color255, Color256};
pub use crate::error::{GlintError, Result};
pub use crate::gamma::GammaTable;
pub use crate::sample::Sample;
pub use crate::signal::fade::{Fade, FadeCurve};
