use crate::error::{GlintError, Result};

/// True division. Division by zero is an error, never inf/NaN.
#[inline]
pub fn div_python(a: f32, b: f32) -> Result<f32> {
    if b == 0.0 {
        return Err(GlintError::ZeroDivision(format!("{a} / {b}")));
    }
    Ok(a / b)
}

/// Modulo whose result takes the sign of the divisor.
///
/// Together with [`floordiv_python`] this satisfies
/// `a == b * floordiv(a, b) + mod(a, b)` (up to float rounding).
#[inline]
pub fn mod_python(a: f32, b: f32) -> Result<f32> {
    divmod_python(a, b).map(|(_, m)| m)
}

/// Floor division, consistent with [`mod_python`].
#[inline]
pub fn floordiv_python(a: f32, b: f32) -> Result<f32> {
    divmod_python(a, b).map(|(d, _)| d)
}

/// `(floordiv, mod)` pair computed the way Python's float `divmod` does.
pub fn divmod_python(a: f32, b: f32) -> Result<(f32, f32)> {
    if b == 0.0 {
        return Err(GlintError::ZeroDivision(format!("{a} % {b}")));
    }

    let mut m = a % b;
    let mut div = (a - m) / b;
    if m != 0.0 {
        if (b < 0.0) != (m < 0.0) {
            m += b;
            div -= 1.0;
        }
    } else {
        m = 0.0f32.copysign(b);
    }

    let floordiv = if div != 0.0 {
        let mut f = div.floor();
        if div - f > 0.5 {
            f += 1.0;
        }
        f
    } else {
        0.0f32.copysign(a / b)
    };

    Ok((floordiv, m))
}

/// `a ** b` over the reals.
///
/// `0 ** negative` is a zero division; a negative base with a fractional
/// exponent has no real result and is rejected.
pub fn pow_python(a: f32, b: f32) -> Result<f32> {
    if b == 0.0 {
        return Ok(1.0);
    }
    if a == 0.0 && b < 0.0 {
        return Err(GlintError::ZeroDivision(format!(
            "0 cannot be raised to a negative power ({b})"
        )));
    }
    if a < 0.0 && a.is_finite() && b.is_finite() && b.fract() != 0.0 {
        return Err(GlintError::InvalidParameter(format!(
            "negative base {a} with fractional exponent {b}"
        )));
    }
    Ok(a.powf(b))
}

/// Three-argument power: `(a ** b) % m` with Python modulo semantics.
pub fn pow_mod_python(a: f32, b: f32, m: f32) -> Result<f32> {
    mod_python(pow_python(a, b)?, m)
}

/// Rich comparison selector, numbered like Python's `Py_LT..Py_GE`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RichCmp {
    Lt,
    Le,
    Eq,
    Ne,
    Gt,
    Ge,
}

impl RichCmp {
    pub const ALL: [RichCmp; 6] = [
        RichCmp::Lt,
        RichCmp::Le,
        RichCmp::Eq,
        RichCmp::Ne,
        RichCmp::Gt,
        RichCmp::Ge,
    ];

    pub fn from_code(code: i32) -> Result<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| {
                GlintError::InvalidParameter(format!("unknown rich comparison code {code}"))
            })
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    /// Turn a signed comparison result into a boolean.
    #[inline]
    pub fn apply(self, cmp: f32) -> bool {
        match self {
            RichCmp::Lt => cmp < 0.0,
            RichCmp::Le => cmp <= 0.0,
            RichCmp::Eq => cmp == 0.0,
            RichCmp::Ne => cmp != 0.0,
            RichCmp::Gt => cmp > 0.0,
            RichCmp::Ge => cmp >= 0.0,
        }
    }
}

/// Normalize a possibly-negative index against `size`.
///
/// `-1` is the last element. Returns `None` when the index is out of range
/// after normalization.
#[inline]
pub fn resolve_python_index(key: isize, size: usize) -> Option<usize> {
    let size_i = isize::try_from(size).ok()?;
    let k = if key < 0 { key + size_i } else { key };
    if k >= 0 && k < size_i {
        Some(k as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modulo_takes_sign_of_divisor() {
        assert_eq!(mod_python(-7.5, 2.0).unwrap(), 0.5);
        assert_eq!(mod_python(7.5, -2.0).unwrap(), -0.5);
        assert_eq!(mod_python(7.5, 2.0).unwrap(), 1.5);
        assert!(mod_python(0.0, -3.0).unwrap().is_sign_negative());
        assert!(mod_python(-0.0, 3.0).unwrap().is_sign_positive());
    }

    #[test]
    fn divmod_matches_python() {
        assert_eq!(divmod_python(-7.5, 2.0).unwrap(), (-4.0, 0.5));
        assert_eq!(divmod_python(7.5, -2.0).unwrap(), (-4.0, -0.5));
        assert_eq!(divmod_python(9.0, 3.0).unwrap(), (3.0, 0.0));
    }

    #[test]
    fn floor_identity_holds() {
        let vals = [-7.25f32, -1.0, -0.5, 0.0, 0.75, 3.0, 11.5];
        for &a in &vals {
            for &b in &[-2.5f32, -1.0, 0.25, 4.0] {
                let d = floordiv_python(a, b).unwrap();
                let m = mod_python(a, b).unwrap();
                assert!((b * d + m - a).abs() < 1e-5, "a={a} b={b} d={d} m={m}");
                assert!(m == 0.0 || (m < 0.0) == (b < 0.0), "a={a} b={b} m={m}");
            }
        }
    }

    #[test]
    fn zero_divisors_are_errors() {
        assert!(matches!(div_python(1.0, 0.0), Err(GlintError::ZeroDivision(_))));
        assert!(matches!(mod_python(1.0, 0.0), Err(GlintError::ZeroDivision(_))));
        assert!(matches!(pow_python(0.0, -1.0), Err(GlintError::ZeroDivision(_))));
    }

    #[test]
    fn true_division_on_integral_values() {
        assert_eq!(div_python(7.0, 2.0).unwrap(), 3.5);
    }

    #[test]
    fn power_rules() {
        assert_eq!(pow_python(2.0, -1.0).unwrap(), 0.5);
        assert_eq!(pow_python(-2.0, 3.0).unwrap(), -8.0);
        assert_eq!(pow_python(0.0, 0.0).unwrap(), 1.0);
        assert_eq!(pow_python(f32::NAN, 0.0).unwrap(), 1.0);
        assert!(matches!(
            pow_python(-2.0, 0.5),
            Err(GlintError::InvalidParameter(_))
        ));
    }

    #[test]
    fn three_argument_power() {
        assert_eq!(pow_mod_python(3.0, 2.0, 4.0).unwrap(), 1.0);
        assert_eq!(pow_mod_python(-2.0, 3.0, 5.0).unwrap(), 2.0);
        assert!(pow_mod_python(3.0, 2.0, 0.0).is_err());
    }

    #[test]
    fn rich_codes_roundtrip() {
        for op in RichCmp::ALL {
            assert_eq!(RichCmp::from_code(op.code()).unwrap(), op);
        }
        assert!(RichCmp::from_code(6).is_err());
        assert!(RichCmp::from_code(-1).is_err());
    }

    #[test]
    fn rich_apply() {
        assert!(RichCmp::Lt.apply(-0.5));
        assert!(!RichCmp::Lt.apply(0.0));
        assert!(RichCmp::Le.apply(0.0));
        assert!(RichCmp::Eq.apply(0.0));
        assert!(RichCmp::Ne.apply(1.0));
        assert!(RichCmp::Gt.apply(1.0));
        assert!(RichCmp::Ge.apply(0.0));
        assert!(!RichCmp::Ge.apply(-1.0));
    }

    #[test]
    fn negative_indices_resolve() {
        assert_eq!(resolve_python_index(-1, 3), Some(2));
        assert_eq!(resolve_python_index(-3, 3), Some(0));
        assert_eq!(resolve_python_index(0, 3), Some(0));
        assert_eq!(resolve_python_index(3, 3), None);
        assert_eq!(resolve_python_index(-4, 3), None);
        assert_eq!(resolve_python_index(0, 0), None);
    }
}
