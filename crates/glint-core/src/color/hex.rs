// 24-bit packed 0xRRGGBB <-> sample, always through the normal base.

use crate::sample::{Channels, Sample, Scale};

/// Unpack `0xRRGGBB` into the first three channels (any further channels
/// are zero), then scale. Bits above 24 are ignored.
pub fn from_hex<C: Channels, S: Scale>(hex: u32) -> Sample<C, S> {
    let mut x = Sample::<C, S>::zero();
    let bytes = [(hex >> 16) & 0xFF, (hex >> 8) & 0xFF, hex & 0xFF];
    for (v, b) in x.as_mut_slice().iter_mut().zip(bytes) {
        *v = b as f32 / 255.0;
    }
    x.scale()
}

/// Pack the first three unscaled channels, each rounded to the nearest
/// 8-bit code and clamped to `0..=255`.
pub fn to_hex<C: Channels, S: Scale>(x: &Sample<C, S>) -> u32 {
    x.to_normal()
        .iter()
        .take(3)
        .fold(0u32, |acc, v| (acc << 8) | to_byte(v))
}

#[inline]
fn to_byte(v: f32) -> u32 {
    (v * 255.0).round().clamp(0.0, 255.0) as u32
}
