// crates/glint-core/src/signal/mod.rs

pub mod fade;

pub use fade::{apply_extend, apply_same, Fade, FadeCurve, Fadeable};
