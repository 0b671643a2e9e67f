use std::fmt::Debug;
use std::str::FromStr;

use crate::error::{GlintError, Result};

/// A fixed, ordered set of named channels.
///
/// The enum ordering is the storage ordering: channel `c` lives at
/// index `c.index()`.
pub trait Channels: Copy + Clone + Debug + PartialEq + Eq + 'static {
    /// Backing storage, one `f32` per channel.
    type Values: Copy + Debug + PartialEq + Default + AsRef<[f32]> + AsMut<[f32]>;

    const COUNT: usize;
    const NAMES: &'static [&'static str];
    /// Whether the basic color-name table applies to samples of this layout.
    const HAS_COLOR_NAMES: bool = false;

    fn index(self) -> usize;
    fn from_index(i: usize) -> Option<Self>;

    fn name(self) -> &'static str {
        Self::NAMES[self.index()]
    }
}

fn parse_channel<C: Channels>(s: &str) -> Result<C> {
    let key = s.trim().to_ascii_lowercase();
    C::NAMES
        .iter()
        .position(|n| *n == key)
        .and_then(C::from_index)
        .ok_or_else(|| GlintError::NotFound(format!("channel '{s}'")))
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rgb {
    Red,
    Green,
    Blue,
}

impl Rgb {
    pub const ALL: [Rgb; 3] = [Rgb::Red, Rgb::Green, Rgb::Blue];
}

impl Channels for Rgb {
    type Values = [f32; 3];

    const COUNT: usize = 3;
    const NAMES: &'static [&'static str] = &["red", "green", "blue"];
    const HAS_COLOR_NAMES: bool = true;

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rgbw {
    Red,
    Green,
    Blue,
    White,
}

impl Rgbw {
    pub const ALL: [Rgbw; 4] = [Rgbw::Red, Rgbw::Green, Rgbw::Blue, Rgbw::White];
}

impl Channels for Rgbw {
    type Values = [f32; 4];

    const COUNT: usize = 4;
    const NAMES: &'static [&'static str] = &["red", "green", "blue", "white"];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Hsb {
    Hue,
    Saturation,
    Brightness,
}

impl Hsb {
    pub const ALL: [Hsb; 3] = [Hsb::Hue, Hsb::Saturation, Hsb::Brightness];
}

impl Channels for Hsb {
    type Values = [f32; 3];

    const COUNT: usize = 3;
    const NAMES: &'static [&'static str] = &["hue", "saturation", "brightness"];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }
}

impl FromStr for Rgb {
    type Err = GlintError;

    fn from_str(s: &str) -> Result<Self> {
        parse_channel(s)
    }
}

impl FromStr for Rgbw {
    type Err = GlintError;

    fn from_str(s: &str) -> Result<Self> {
        parse_channel(s)
    }
}

impl FromStr for Hsb {
    type Err = GlintError;

    fn from_str(s: &str) -> Result<Self> {
        parse_channel(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_follows_declaration_order() {
        for (i, c) in Rgbw::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
            assert_eq!(Rgbw::from_index(i), Some(*c));
        }
        assert_eq!(Rgbw::from_index(4), None);
        assert_eq!(Hsb::Brightness.name(), "brightness");
    }

    #[test]
    fn names_parse() {
        assert_eq!("Green".parse::<Rgb>().unwrap(), Rgb::Green);
        assert_eq!(" white ".parse::<Rgbw>().unwrap(), Rgbw::White);
        assert!("white".parse::<Rgb>().is_err());
    }
}
