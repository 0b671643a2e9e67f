// crates/glint-core/src/signal/fade.rs
//
// Crossfade between two signals, per element, with a selectable response
// curve. A `Fade` is a plain value: copy it, tweak it, apply it.

use std::fmt;
use std::ops::{Add, Mul};
use std::str::FromStr;

use log::{trace, warn};

use crate::error::{GlintError, Result};
use crate::validate::validate_fade;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FadeCurve {
    /// Ratios used as computed.
    #[default]
    Linear,
    /// `r * |r|`: squares the magnitude, keeps the sign.
    Sqr,
    /// `sqrt(|r|) * sign(r)`.
    Sqrt,
}

impl FadeCurve {
    pub const ALL: [FadeCurve; 3] = [FadeCurve::Linear, FadeCurve::Sqr, FadeCurve::Sqrt];

    pub fn name(self) -> &'static str {
        match self {
            FadeCurve::Linear => "linear",
            FadeCurve::Sqr => "sqr",
            FadeCurve::Sqrt => "sqrt",
        }
    }

    #[inline]
    pub fn shape(self, r: f32) -> f32 {
        match self {
            FadeCurve::Linear => r,
            FadeCurve::Sqr => r * r.abs(),
            FadeCurve::Sqrt => r.abs().sqrt() * r.signum(),
        }
    }
}

impl fmt::Display for FadeCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FadeCurve {
    type Err = GlintError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == key)
            .ok_or_else(|| GlintError::NotFound(format!("fade curve '{s}'")))
    }
}

/// Anything a fade can blend: scalable by a ratio, offsettable by a ratio,
/// addable to itself, with `Default` as the zero value.
pub trait Fadeable:
    Copy + Default + Mul<f32, Output = Self> + Add<f32, Output = Self> + Add<Output = Self>
{
}

impl<T> Fadeable for T where
    T: Copy + Default + Mul<f32, Output = T> + Add<f32, Output = T> + Add<Output = T>
{
}

/// Crossfade descriptor. `fader` runs over `[0, 1]`, mapped into
/// `[begin, end]` before the curve is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    pub begin: f32,
    pub end: f32,
    pub fader: f32,
    pub curve: FadeCurve,
}

impl Default for Fade {
    fn default() -> Self {
        Self {
            begin: 0.0,
            end: 1.0,
            fader: 0.0,
            curve: FadeCurve::Linear,
        }
    }
}

impl Fade {
    pub fn new(fader: f32, curve: FadeCurve) -> Self {
        Self {
            fader,
            curve,
            ..Self::default()
        }
    }

    /// Fully specified fade; rejects non-finite fields.
    pub fn try_new(begin: f32, end: f32, fader: f32, curve: FadeCurve) -> Result<Self> {
        let f = Self {
            begin,
            end,
            fader,
            curve,
        };
        validate_fade(&f)?;
        Ok(f)
    }

    /// `(xratio, yratio)` after the curve.
    pub fn ratios(&self) -> (f32, f32) {
        let span = self.end - self.begin;
        let x = self.begin + self.fader * span;
        let y = self.begin + (1.0 - self.fader) * span;
        (self.curve.shape(x), self.curve.shape(y))
    }

    /// Blend one pair: `xratio * x + yratio + y`.
    ///
    /// `y` is offset by `yratio`, not scaled by it. A fader of 0.5 on
    /// `(1.0, 0.0)` gives 1.0, not the midpoint.
    #[inline]
    pub fn apply<T: Fadeable>(&self, x: T, y: T) -> T {
        let (xr, yr) = self.ratios();
        x * xr + yr + y
    }
}

/// Blend equal-length buffers into `out`.
///
/// All three lengths must match; on mismatch nothing is written.
pub fn apply_same<T: Fadeable>(fade: &Fade, a: &[T], b: &[T], out: &mut [T]) -> Result<()> {
    if a.len() != b.len() || a.len() != out.len() {
        return Err(GlintError::Precondition(format!(
            "apply_same needs equal lengths: a={} b={} out={}",
            a.len(),
            b.len(),
            out.len()
        )));
    }
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = fade.apply(x, y);
    }
    Ok(())
}

/// Blend buffers of any lengths; the shorter one is padded with zero values.
///
/// WARNING: `out` is resized to `max(a.len(), b.len())`. Any length the
/// caller set beforehand is discarded.
pub fn apply_extend<T: Fadeable>(fade: &Fade, a: &[T], b: &[T], out: &mut Vec<T>) {
    let size = a.len().max(b.len());
    if out.len() != size {
        warn!("apply_extend resizing output: {} -> {}", out.len(), size);
    }
    out.resize(size, T::default());
    trace!("apply_extend: a={} b={} out={}", a.len(), b.len(), size);

    let get = |c: &[T], i: usize| c.get(i).copied().unwrap_or_default();
    for (i, o) in out.iter_mut().enumerate() {
        *o = fade.apply(get(a, i), get(b, i));
    }
}
