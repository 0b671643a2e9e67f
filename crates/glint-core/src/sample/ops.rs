// Element-wise arithmetic. No clamping: samples are free to leave their
// nominal range, the color layer decides what to do about it.

use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use crate::sample::channels::Channels;
use crate::sample::sample::Sample;
use crate::sample::scale::Scale;

impl<C: Channels, S: Scale> Add for Sample<C, S> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a + b)
    }
}

impl<C: Channels, S: Scale> Sub for Sample<C, S> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a - b)
    }
}

impl<C: Channels, S: Scale> Mul for Sample<C, S> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a * b)
    }
}

impl<C: Channels, S: Scale> Neg for Sample<C, S> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

impl<C: Channels, S: Scale> Mul<f32> for Sample<C, S> {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        self.map(|a| a * rhs)
    }
}

/// Adds the scalar to every channel.
impl<C: Channels, S: Scale> Add<f32> for Sample<C, S> {
    type Output = Self;

    fn add(self, rhs: f32) -> Self {
        self.map(|a| a + rhs)
    }
}

impl<C: Channels, S: Scale> Index<usize> for Sample<C, S> {
    type Output = f32;

    fn index(&self, i: usize) -> &f32 {
        &self.as_slice()[i]
    }
}

impl<C: Channels, S: Scale> IndexMut<usize> for Sample<C, S> {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.as_mut_slice()[i]
    }
}
