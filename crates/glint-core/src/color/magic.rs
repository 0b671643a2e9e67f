// Operator-protocol helpers ("magic" methods): unary rounding family,
// element-wise binary arithmetic, clamping, rotation, distance, hashing.

use crate::error::Result;
use crate::math::pyhash::{hash_f32, hash_tuple};
use crate::math::pyops::{div_python, mod_python, pow_python};
use crate::sample::{Channels, Normal, Sample, Scale};

/// Per-channel values in the normal base, whatever `S` is.
pub fn unscale<C: Channels, S: Scale>(x: &Sample<C, S>) -> Sample<C, Normal> {
    x.to_normal()
}

pub fn magic_abs<C: Channels, S: Scale>(x: &Sample<C, S>) -> Sample<C, S> {
    x.map(f32::abs)
}

pub fn magic_ceil<C: Channels, S: Scale>(x: &Sample<C, S>) -> Sample<C, S> {
    x.map(f32::ceil)
}

pub fn magic_floor<C: Channels, S: Scale>(x: &Sample<C, S>) -> Sample<C, S> {
    x.map(f32::floor)
}

/// Rounds half away from zero.
pub fn magic_round<C: Channels, S: Scale>(x: &Sample<C, S>) -> Sample<C, S> {
    x.map(f32::round)
}

pub fn magic_trunc<C: Channels, S: Scale>(x: &Sample<C, S>) -> Sample<C, S> {
    x.map(f32::trunc)
}

/// Reflect every channel inside its scale's range.
pub fn magic_invert<C: Channels, S: Scale>(x: &Sample<C, S>) -> Sample<C, S> {
    x.invert()
}

pub fn magic_neg<C: Channels, S: Scale>(x: &Sample<C, S>) -> Sample<C, S> {
    -*x
}

/// Hash of the unscaled channel tuple. Samples that compare equal after
/// unscaling hash equal, independent of their scale.
pub fn magic_hash<C: Channels, S: Scale>(x: &Sample<C, S>) -> i64 {
    let lanes: Vec<i64> = unscale(x).iter().map(hash_f32).collect();
    hash_tuple(&lanes)
}

pub fn magic_add<C: Channels, S: Scale>(x: &Sample<C, S>, y: &Sample<C, S>) -> Sample<C, S> {
    *x + *y
}

pub fn magic_sub<C: Channels, S: Scale>(x: &Sample<C, S>, y: &Sample<C, S>) -> Sample<C, S> {
    *x - *y
}

pub fn magic_mul<C: Channels, S: Scale>(x: &Sample<C, S>, y: &Sample<C, S>) -> Sample<C, S> {
    *x * *y
}

/// True division per channel; fails on the first zero divisor.
pub fn magic_truediv<C: Channels, S: Scale>(
    x: &Sample<C, S>,
    y: &Sample<C, S>,
) -> Result<Sample<C, S>> {
    x.try_zip(*y, div_python)
}

/// Modulo per channel, result signed like the divisor.
pub fn magic_mod<C: Channels, S: Scale>(
    x: &Sample<C, S>,
    y: &Sample<C, S>,
) -> Result<Sample<C, S>> {
    x.try_zip(*y, mod_python)
}

pub fn magic_pow<C: Channels, S: Scale>(
    x: &Sample<C, S>,
    y: &Sample<C, S>,
) -> Result<Sample<C, S>> {
    x.try_zip(*y, pow_python)
}

/// Three-argument power: `(x ** y) % z` per channel.
pub fn magic_pow_mod<C: Channels, S: Scale>(
    x: &Sample<C, S>,
    y: &Sample<C, S>,
    z: &Sample<C, S>,
) -> Result<Sample<C, S>> {
    let p = magic_pow(x, y)?;
    magic_mod(&p, z)
}

/// Clamp from below: every channel becomes at least `y`'s.
pub fn limit_min<C: Channels, S: Scale>(x: &Sample<C, S>, y: &Sample<C, S>) -> Sample<C, S> {
    x.zip(*y, f32::max)
}

/// Clamp from above: every channel becomes at most `y`'s.
pub fn limit_max<C: Channels, S: Scale>(x: &Sample<C, S>, y: &Sample<C, S>) -> Sample<C, S> {
    x.zip(*y, f32::min)
}

/// Cyclic left rotation of the channel values.
///
/// Positive `positions` bring later channels to the front:
/// `(r, g, b)` rotated by 1 is `(g, b, r)`. Negative values rotate the other
/// way and any count is taken modulo the channel count.
pub fn rotated<C: Channels, S: Scale>(x: &Sample<C, S>, positions: i32) -> Sample<C, S> {
    let mut y = *x;
    let n = y.len();
    if n > 0 {
        let k = i64::from(positions).rem_euclid(n as i64) as usize;
        y.as_mut_slice().rotate_left(k);
    }
    y
}

/// Sum of squared channel differences.
pub fn distance2<C: Channels, S: Scale>(x: &Sample<C, S>, y: &Sample<C, S>) -> f32 {
    x.iter()
        .zip(y.iter())
        .map(|(a, b)| {
            let d = a - b;
            d * d
        })
        .sum()
}

pub fn distance<C: Channels, S: Scale>(x: &Sample<C, S>, y: &Sample<C, S>) -> f32 {
    distance2(x, y).sqrt()
}
