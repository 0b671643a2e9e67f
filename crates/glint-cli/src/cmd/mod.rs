// crates/glint-cli/src/cmd/mod.rs

pub mod color;
pub mod fade;
pub mod gamma;
pub mod util;
