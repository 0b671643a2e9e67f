// crates/glint-core/src/gamma/table.rs
//
// Brightness -> 8-bit gamma lookup. Built once, read-only afterwards.

use std::ops::Index;

use log::debug;

use crate::error::{GlintError, Result};
use crate::gamma::fingerprint::{fingerprint16, hex_lower};
use crate::validate::validate_gamma;

pub const DEFAULT_BEGIN: u8 = 0;
pub const DEFAULT_END: u8 = 255;

/// Upper bound on the derived table length (1 MiB of entries).
pub const MAX_TABLE_LEN: usize = 1 << 20;

/// Entries per output code the sizing heuristic aims for.
const ENTRIES_PER_LEVEL: f32 = 4.0;

/// Gamma lookup table mapping a normalized brightness in `[0, 1]` to an
/// 8-bit output in `[begin, end]`.
///
/// The table length is derived from `gamma`: the step between the top two
/// output codes is estimated as `1 - (255/256)^(1/gamma)` and the table is
/// sized so that step spans about four entries. This keeps every output
/// level reachable without a fixed 256-entry table starving the low end.
///
/// Entries are non-decreasing in index for every accepted `gamma`.
#[derive(Clone, Debug, PartialEq)]
pub struct GammaTable {
    gamma: f32,
    begin: u8,
    end: u8,
    table: Vec<u8>,
}

impl GammaTable {
    /// Build a table over the full `0..=255` output range.
    pub fn with_gamma(gamma: f32) -> Result<Self> {
        Self::new(gamma, DEFAULT_BEGIN, DEFAULT_END)
    }

    /// Build a table for `gamma` with outputs in `begin..=end`.
    ///
    /// Fails with `InvalidParameter` when `gamma` is not a positive finite
    /// number, when `begin > end`, or when `gamma` is so large that the
    /// sizing step underflows (or the table would exceed `MAX_TABLE_LEN`).
    pub fn new(gamma: f32, begin: u8, end: u8) -> Result<Self> {
        validate_gamma(gamma, begin, end)?;

        let size = table_len(gamma)?;
        let width = 1.0f32 + f32::from(end - begin);
        let begin_f = f32::from(begin);
        let end_f = f32::from(end);

        let mut table = Vec::with_capacity(size);
        for i in 0..size {
            let ratio = (i as f32 / size as f32).powf(gamma);
            let raw = begin_f + ratio * width;
            table.push(end_f.min(raw) as u8);
        }

        debug!(
            "gamma table built: gamma={} begin={} end={} len={}",
            gamma, begin, end, size
        );

        Ok(Self {
            gamma,
            begin,
            end,
            table,
        })
    }

    /// Look up the corrected value for brightness `x`.
    ///
    /// `x` is clamped below at 0; anything at or above 1 returns the last
    /// entry. NaN reads as 0.
    #[inline]
    pub fn get(&self, x: f32) -> u8 {
        let idx = (self.table.len() as f32 * x.max(0.0)) as usize;
        self.table[idx.min(self.table.len() - 1)]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Always false: construction guarantees at least four entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.table
    }

    pub fn gamma(&self) -> f32 {
        self.gamma
    }

    pub fn begin(&self) -> u8 {
        self.begin
    }

    pub fn end(&self) -> u8 {
        self.end
    }

    /// Stable 16-byte fingerprint over parameters and contents.
    pub fn id_16(&self) -> [u8; 16] {
        let gamma = self.gamma.to_le_bytes();
        let range = [self.begin, self.end];
        let len = (self.table.len() as u64).to_le_bytes();
        let parts: [&[u8]; 4] = [&gamma, &range, &len, &self.table];
        fingerprint16(&parts)
    }

    pub fn id_hex(&self) -> String {
        hex_lower(&self.id_16())
    }
}

impl Index<usize> for GammaTable {
    type Output = u8;

    fn index(&self, i: usize) -> &u8 {
        &self.table[i]
    }
}

/// Derived table length: `floor(4 / (1 - (255/256)^(1/gamma)))`.
fn table_len(gamma: f32) -> Result<usize> {
    let inv_gamma = 1.0f32 / gamma;
    let diff = 1.0f32 - (255.0f32 / 256.0f32).powf(inv_gamma);

    // Huge gammas push (255/256)^(1/gamma) to exactly 1.0 in f32.
    if diff.is_nan() || diff <= 0.0 {
        return Err(GlintError::InvalidParameter(format!(
            "gamma {gamma} too large: output step underflows"
        )));
    }

    let size = (ENTRIES_PER_LEVEL / diff).floor();
    if !size.is_finite() || size > MAX_TABLE_LEN as f32 {
        return Err(GlintError::InvalidParameter(format!(
            "gamma {gamma} needs a table of {size} entries (max {MAX_TABLE_LEN})"
        )));
    }

    Ok((size as usize).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_gamma_has_four_entries_per_level() {
        let t = GammaTable::with_gamma(1.0).unwrap();
        assert_eq!(t.len(), 1024);
        assert_eq!(t[0], 0);
        assert_eq!(t[4], 1);
        assert_eq!(t[1023], 255);
        assert_eq!(t.get(0.5), 128);
    }

    #[test]
    fn lookup_clamps_both_ends() {
        let t = GammaTable::with_gamma(2.5).unwrap();
        let last = t[t.len() - 1];
        assert_eq!(t.get(-3.0), t[0]);
        assert_eq!(t.get(0.0), t[0]);
        assert_eq!(t.get(1.0), last);
        assert_eq!(t.get(42.0), last);
        assert_eq!(t.get(f32::NAN), t[0]);
    }

    #[test]
    fn range_is_respected() {
        let t = GammaTable::new(1.0, 10, 20).unwrap();
        assert_eq!(t[0], 10);
        assert_eq!(t[t.len() - 1], 20);
        assert!(t.as_slice().iter().all(|&v| (10..=20).contains(&v)));
    }

    #[test]
    fn degenerate_range_is_constant() {
        let t = GammaTable::new(2.0, 77, 77).unwrap();
        assert!(t.as_slice().iter().all(|&v| v == 77));
    }

    #[test]
    fn rejects_non_positive_gamma() {
        for g in [0.0f32, -0.0, -2.2] {
            let e = GammaTable::with_gamma(g).unwrap_err();
            assert!(matches!(e, GlintError::InvalidParameter(_)), "gamma={g}");
        }
    }

    #[test]
    fn smallest_positive_gammas_still_build() {
        // 1/gamma overflows to inf here, (255/256)^inf == 0, diff == 1.
        let t = GammaTable::with_gamma(f32::MIN_POSITIVE).unwrap();
        assert_eq!(t.len(), 4);
        let t = GammaTable::with_gamma(0.01).unwrap();
        assert!(t.len() >= 4);
    }

    #[test]
    fn rejects_gamma_whose_step_underflows() {
        let e = GammaTable::with_gamma(1.0e30).unwrap_err();
        assert!(matches!(e, GlintError::InvalidParameter(_)));
    }

    #[test]
    fn id_tracks_parameters() {
        let a = GammaTable::with_gamma(2.2).unwrap();
        let b = GammaTable::with_gamma(2.2).unwrap();
        let c = GammaTable::new(2.2, 0, 254).unwrap();
        assert_eq!(a.id_hex(), b.id_hex());
        assert_ne!(a.id_hex(), c.id_hex());
        assert_eq!(a.id_hex().len(), 32);
    }
}
