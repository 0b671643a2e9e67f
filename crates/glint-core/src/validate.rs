use crate::error::{GlintError, Result};
use crate::signal::fade::Fade;

/// Reject gamma-table parameters the construction formula cannot handle.
pub fn validate_gamma(gamma: f32, begin: u8, end: u8) -> Result<()> {
    // 1/gamma is undefined at zero and meaningless below it.
    if !gamma.is_finite() {
        return Err(GlintError::InvalidParameter(format!(
            "gamma must be finite, got {gamma}"
        )));
    }
    if gamma <= 0.0 {
        return Err(GlintError::InvalidParameter(format!(
            "gamma must be > 0, got {gamma}"
        )));
    }
    if begin > end {
        return Err(GlintError::InvalidParameter(format!(
            "begin must be <= end, got begin={begin} end={end}"
        )));
    }
    Ok(())
}

/// A fade is usable as long as its ratios stay finite.
pub fn validate_fade(f: &Fade) -> Result<()> {
    for (name, v) in [("begin", f.begin), ("end", f.end), ("fader", f.fader)] {
        if !v.is_finite() {
            return Err(GlintError::InvalidParameter(format!(
                "fade {name} must be finite, got {v}"
            )));
        }
    }
    Ok(())
}
