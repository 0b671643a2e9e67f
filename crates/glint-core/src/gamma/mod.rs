pub mod fingerprint;
pub mod table;

pub use table::GammaTable;
