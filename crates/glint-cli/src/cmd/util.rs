// crates/glint-cli/src/cmd/util.rs

use anyhow::Context;
use clap::ValueEnum;
use glint_core::sample::{Rgb, Sample, Scale};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScaleArg {
    /// Values in [0, 1]
    Normal,
    /// Values in [0, 256)
    EightBit,
    /// Values in [0, 255]
    Range255,
}

/// Parse one color in any accepted text form.
pub fn parse_color<S: Scale>(s: &str) -> anyhow::Result<Sample<Rgb, S>> {
    s.parse::<Sample<Rgb, S>>()
        .with_context(|| format!("invalid color '{s}'"))
}

/// Parse a `;`-separated list of colors. Blank items are skipped.
pub fn parse_color_list<S: Scale>(s: &str) -> anyhow::Result<Vec<Sample<Rgb, S>>> {
    s.split(';')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(parse_color)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::sample::Normal;

    #[test]
    fn list_splits_on_semicolons() {
        let v = parse_color_list::<Normal>("red; (0, 0.5, 1) ;;#000000").unwrap();
        assert_eq!(v.len(), 3);
        assert_eq!(v[1].as_slice(), &[0.0, 0.5, 1.0]);
    }

    #[test]
    fn list_reports_bad_item() {
        let e = parse_color_list::<Normal>("red;nope").unwrap_err();
        assert!(e.to_string().contains("nope"));
    }
}
