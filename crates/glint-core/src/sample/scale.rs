use std::fmt::Debug;

/// Scaling policy: how a channel's stored value maps to its normal `[0, 1]`
/// meaning. Fixed per type; conversions are always explicit.
pub trait Scale: Copy + Clone + Debug + Default + PartialEq + Eq + 'static {
    const NAME: &'static str;
    /// Stored value corresponding to normal 1.0.
    const RANGE: f32;

    #[inline]
    fn scale(normal: f32) -> f32 {
        normal * Self::RANGE
    }

    #[inline]
    fn unscale(value: f32) -> f32 {
        value / Self::RANGE
    }

    /// Reflect a stored value inside the channel range.
    #[inline]
    fn invert(value: f32) -> f32 {
        Self::RANGE - value
    }
}

/// Values in `[0, 1]`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Normal;

/// Values in `[0, 256)`, one unit per 8-bit code.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EightBit;

/// Values in `[0, 255]` as floats.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Range255;

impl Scale for Normal {
    const NAME: &'static str = "normal";
    const RANGE: f32 = 1.0;

    #[inline]
    fn scale(normal: f32) -> f32 {
        normal
    }

    #[inline]
    fn unscale(value: f32) -> f32 {
        value
    }
}

impl Scale for EightBit {
    const NAME: &'static str = "eight-bit";
    const RANGE: f32 = 256.0;
}

impl Scale for Range255 {
    const NAME: &'static str = "range255";
    const RANGE: f32 = 255.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invert_reflects_inside_range() {
        assert_eq!(Normal::invert(0.25), 0.75);
        assert_eq!(EightBit::invert(56.0), 200.0);
        assert_eq!(Range255::invert(255.0), 0.0);
    }

    #[test]
    fn scale_unscale_roundtrip() {
        for v in [0.0f32, 0.1, 0.5, 0.999, 1.0] {
            assert!((EightBit::unscale(EightBit::scale(v)) - v).abs() < 1e-6);
            assert!((Range255::unscale(Range255::scale(v)) - v).abs() < 1e-6);
        }
    }
}
