// crates/glint-core/src/math/mod.rs
//
// Scalar helpers that follow Python's numeric protocol rather than Rust's:
// floor-consistent modulo, true division, checked power, rich comparison,
// negative indexing and numeric hashing.

pub mod pyhash;
pub mod pyops;
