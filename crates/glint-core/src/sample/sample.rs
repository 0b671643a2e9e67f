// crates/glint-core/src/sample/sample.rs

use std::marker::PhantomData;

use crate::error::{GlintError, Result};
use crate::math::pyops::resolve_python_index;
use crate::sample::channels::{Channels, Hsb, Rgb, Rgbw};
use crate::sample::scale::{Normal, Scale};

/// A fixed-size vector of channel values under one scaling policy.
///
/// `C` names the channels (and fixes their count), `S` fixes what the stored
/// numbers mean. Two samples with the same channels but different scales are
/// different types; move between them with [`Sample::rescale`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample<C: Channels, S: Scale> {
    values: C::Values,
    _marker: PhantomData<(C, S)>,
}

impl<C: Channels, S: Scale> Default for Sample<C, S> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<C: Channels, S: Scale> Sample<C, S> {
    #[inline]
    pub fn new(values: C::Values) -> Self {
        Self {
            values,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(C::Values::default())
    }

    pub fn splat(v: f32) -> Self {
        Self::zero().map(|_| v)
    }

    /// Build from a slice holding exactly `C::COUNT` values.
    pub fn from_slice(xs: &[f32]) -> Result<Self> {
        if xs.len() != C::COUNT {
            return Err(GlintError::InvalidParameter(format!(
                "expected {} channel values, got {}",
                C::COUNT,
                xs.len()
            )));
        }
        let mut s = Self::zero();
        s.as_mut_slice().copy_from_slice(xs);
        Ok(s)
    }

    #[inline]
    pub fn len(&self) -> usize {
        C::COUNT
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        C::COUNT == 0
    }

    #[inline]
    pub fn values(&self) -> C::Values {
        self.values
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        self.values.as_ref()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        self.values.as_mut()
    }

    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.as_slice().iter().copied()
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<f32> {
        self.as_slice().get(i).copied()
    }

    #[inline]
    pub fn channel(&self, c: C) -> f32 {
        self.as_slice()[c.index()]
    }

    #[inline]
    pub fn set(&mut self, c: C, v: f32) {
        self.as_mut_slice()[c.index()] = v;
    }

    /// Index with negative keys counting back from the last channel.
    pub fn get_python(&self, key: isize) -> Result<f32> {
        let i = resolve_python_index(key, C::COUNT).ok_or(GlintError::IndexOutOfRange {
            index: key,
            size: C::COUNT,
        })?;
        Ok(self.as_slice()[i])
    }

    pub fn set_python(&mut self, key: isize, v: f32) -> Result<()> {
        let i = resolve_python_index(key, C::COUNT).ok_or(GlintError::IndexOutOfRange {
            index: key,
            size: C::COUNT,
        })?;
        self.as_mut_slice()[i] = v;
        Ok(())
    }

    /// Apply `f` to every channel.
    pub fn map<F>(mut self, mut f: F) -> Self
    where
        F: FnMut(f32) -> f32,
    {
        for v in self.as_mut_slice() {
            *v = f(*v);
        }
        self
    }

    /// Combine channel-by-channel with `other`.
    pub fn zip<F>(mut self, other: Self, mut f: F) -> Self
    where
        F: FnMut(f32, f32) -> f32,
    {
        for (a, &b) in self.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *a = f(*a, b);
        }
        self
    }

    /// Like [`Sample::zip`], stopping at the first failing channel.
    pub fn try_zip<F>(mut self, other: Self, mut f: F) -> Result<Self>
    where
        F: FnMut(f32, f32) -> Result<f32>,
    {
        for (a, &b) in self.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *a = f(*a, b)?;
        }
        Ok(self)
    }

    /// Treat the stored values as normal and move them into this scale.
    #[inline]
    pub fn scale(self) -> Self {
        self.map(S::scale)
    }

    /// Move the stored values from this scale back to normal.
    #[inline]
    pub fn unscale(self) -> Self {
        self.map(S::unscale)
    }

    #[inline]
    pub fn invert(self) -> Self {
        self.map(S::invert)
    }

    /// Convert to another scaling policy, going through normal.
    pub fn rescale<T: Scale>(self) -> Sample<C, T> {
        Sample::<C, T>::new(self.unscale().values).scale()
    }

    #[inline]
    pub fn to_normal(self) -> Sample<C, Normal> {
        self.rescale::<Normal>()
    }
}

impl<S: Scale> Sample<Rgb, S> {
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new([r, g, b])
    }
}

impl<S: Scale> Sample<Rgbw, S> {
    pub fn rgbw(r: f32, g: f32, b: f32, w: f32) -> Self {
        Self::new([r, g, b, w])
    }
}

impl<S: Scale> Sample<Hsb, S> {
    pub fn hsb(h: f32, s: f32, b: f32) -> Self {
        Self::new([h, s, b])
    }
}
