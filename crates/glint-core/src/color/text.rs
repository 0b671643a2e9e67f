// Canonical text form for samples.
//
// RGB samples that exactly match a basic name print as that name; everything
// else prints as a tuple of unscaled values, e.g. "(0.1, 0.25, 1)". Values
// use the shortest form that parses back to the same f32, so every string
// produced here parses back to the sample it came from.

use std::fmt;
use std::str::FromStr;

use crate::color::hex::from_hex;
use crate::error::{GlintError, Result};
use crate::sample::{Channels, Normal, Sample, Scale};

/// Basic names, normal base. The first entry for a value is canonical.
const NAMED: &[(&str, [f32; 3])] = &[
    ("black", [0.0, 0.0, 0.0]),
    ("white", [1.0, 1.0, 1.0]),
    ("red", [1.0, 0.0, 0.0]),
    ("green", [0.0, 1.0, 0.0]),
    ("blue", [0.0, 0.0, 1.0]),
    ("yellow", [1.0, 1.0, 0.0]),
    ("cyan", [0.0, 1.0, 1.0]),
    ("magenta", [1.0, 0.0, 1.0]),
    ("gray", [0.5, 0.5, 0.5]),
    ("orange", [1.0, 0.5, 0.0]),
    ("purple", [0.5, 0.0, 0.5]),
];

/// Accepted on input only.
const ALIASES: &[(&str, &str)] = &[
    ("lime", "green"),
    ("aqua", "cyan"),
    ("fuchsia", "magenta"),
    ("grey", "gray"),
];

/// Canonical color names, in table order.
pub fn color_names() -> Vec<&'static str> {
    NAMED.iter().map(|(n, _)| *n).collect()
}

fn lookup_name(s: &str) -> Option<[f32; 3]> {
    let key: String = s
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    let key = ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map_or(key.as_str(), |(_, canonical)| *canonical);
    NAMED.iter().find(|(n, _)| *n == key).map(|(_, v)| *v)
}

fn name_of(values: &[f32]) -> Option<&'static str> {
    NAMED
        .iter()
        .find(|(_, v)| v.as_slice() == values)
        .map(|(n, _)| *n)
}

/// Text form of `x`, always in the normal base.
pub fn to_string<C: Channels, S: Scale>(x: &Sample<C, S>) -> String {
    let n = x.to_normal();
    if C::HAS_COLOR_NAMES {
        if let Some(name) = name_of(n.as_slice()) {
            return name.to_string();
        }
    }
    let parts: Vec<String> = n.iter().map(|v| v.to_string()).collect();
    format!("({})", parts.join(", "))
}

/// Parse a name, a `(v, v, v)` tuple of normal values (parentheses
/// optional), or `#rrggbb` / `0xrrggbb`.
///
/// Fails with `NotFound` when `s` matches none of these.
pub fn from_string<C: Channels, S: Scale>(s: &str) -> Result<Sample<C, S>> {
    let t = s.trim();
    let not_found = || GlintError::NotFound(format!("no color matches '{s}'"));

    if C::HAS_COLOR_NAMES {
        if let Some(v) = lookup_name(t) {
            return Ok(Sample::<C, S>::from_slice(&v)?.scale());
        }
    }

    if C::COUNT >= 3 {
        if let Some(hex) = parse_hex(t) {
            return Ok(from_hex(hex));
        }
    }

    let inner = t
        .strip_prefix('(')
        .and_then(|r| r.strip_suffix(')'))
        .unwrap_or(t);
    let values: Vec<f32> = inner
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| not_found())?;
    if values.len() != C::COUNT {
        return Err(not_found());
    }
    Ok(Sample::<C, Normal>::from_slice(&values)?.rescale())
}

fn parse_hex(t: &str) -> Option<u32> {
    let digits = t
        .strip_prefix('#')
        .or_else(|| t.strip_prefix("0x"))
        .or_else(|| t.strip_prefix("0X"))?;
    if digits.len() != 6 {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

impl<C: Channels, S: Scale> fmt::Display for Sample<C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_string(self))
    }
}

impl<C: Channels, S: Scale> FromStr for Sample<C, S> {
    type Err = GlintError;

    fn from_str(s: &str) -> Result<Self> {
        from_string(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Color, Color255, Color256};
    use crate::sample::{Hsb, Rgbw};

    #[test]
    fn names_print_and_parse() {
        assert_eq!(to_string(&Color::rgb(1.0, 0.0, 0.0)), "red");
        assert_eq!(to_string(&Color256::rgb(128.0, 128.0, 128.0)), "gray");
        let c: Color255 = from_string("Yellow").unwrap();
        assert_eq!(c.as_slice(), &[255.0, 255.0, 0.0]);
        let c: Color = from_string(" lime ").unwrap();
        assert_eq!(c, Color::rgb(0.0, 1.0, 0.0));
    }

    #[test]
    fn numeric_tuple_form() {
        let c = Color::rgb(0.1, 0.25, 1.0);
        assert_eq!(to_string(&c), "(0.1, 0.25, 1)");
        let back: Color = from_string("(0.1, 0.25, 1)").unwrap();
        assert_eq!(back, c);
        let bare: Color = from_string("0.1,0.25,1").unwrap();
        assert_eq!(bare, c);
    }

    #[test]
    fn scaled_samples_print_unscaled() {
        let c = Color256::rgb(64.0, 0.0, 32.0);
        assert_eq!(to_string(&c), "(0.25, 0, 0.125)");
        assert_eq!(from_string::<_, crate::sample::EightBit>(&to_string(&c)), Ok(c));
    }

    #[test]
    fn hex_forms() {
        let c: Color = from_string("#ff0000").unwrap();
        assert_eq!(c, Color::rgb(1.0, 0.0, 0.0));
        let c: Color = from_string("0x00FF00").unwrap();
        assert_eq!(c, Color::rgb(0.0, 1.0, 0.0));
        assert!(from_string::<crate::sample::Rgb, Normal>("#ff00").is_err());
    }

    #[test]
    fn names_are_rgb_only() {
        assert!(from_string::<Hsb, Normal>("red").is_err());
        let h = Sample::<Hsb, Normal>::hsb(1.0, 0.0, 0.0);
        assert_eq!(to_string(&h), "(1, 0, 0)");
    }

    #[test]
    fn four_channel_tuples() {
        let w = Sample::<Rgbw, Normal>::rgbw(0.0, 0.5, 1.0, 0.75);
        let s = to_string(&w);
        assert_eq!(s, "(0, 0.5, 1, 0.75)");
        assert_eq!(s.parse::<Sample<Rgbw, Normal>>().unwrap(), w);
        assert!(from_string::<Rgbw, Normal>("(0, 0.5, 1)").is_err());
    }

    #[test]
    fn unknown_text_is_not_found() {
        for s in ["", "chartreuse-ish", "(a, b, c)", "1, 2"] {
            let e = from_string::<crate::sample::Rgb, Normal>(s).unwrap_err();
            assert!(matches!(e, GlintError::NotFound(_)), "{s:?} -> {e:?}");
        }
    }

    #[test]
    fn display_and_from_str() {
        let c = Color::rgb(0.0, 0.0, 1.0);
        assert_eq!(c.to_string(), "blue");
        assert_eq!("blue".parse::<Color>().unwrap(), c);
    }
}
