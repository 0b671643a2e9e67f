use crate::error::Result;
use crate::math::pyops::RichCmp;
use crate::sample::{Channels, Sample, Scale};

/// First non-zero channel difference `x - y`, in channel order; 0 when every
/// channel is equal. Orders samples lexicographically by channel.
pub fn compare<C: Channels, S: Scale>(x: &Sample<C, S>, y: &Sample<C, S>) -> f32 {
    x.iter()
        .zip(y.iter())
        .map(|(a, b)| a - b)
        .find(|d| *d != 0.0)
        .unwrap_or(0.0)
}

/// [`compare`] passed through a rich comparison operator.
pub fn compare_rich<C: Channels, S: Scale>(x: &Sample<C, S>, y: &Sample<C, S>, op: RichCmp) -> bool {
    op.apply(compare(x, y))
}

/// Same as [`compare_rich`] with the operator given as its numeric code.
pub fn compare_code<C: Channels, S: Scale>(
    x: &Sample<C, S>,
    y: &Sample<C, S>,
    code: i32,
) -> Result<bool> {
    Ok(compare_rich(x, y, RichCmp::from_code(code)?))
}
