//! Fixed 10-colour palettes used to colour the key groups.
//!
//! The named qualitative palettes carry the same hex values as seaborn so a
//! palette name produces the colours a user of those tools would expect.

use std::ops::Index;
use std::str::FromStr;

use crate::colour::Colour;
use crate::error::Error;

pub const PALETTE_LEN: usize = 10;

pub const DEFAULT_PALETTE: &str = "bright";

pub const PALETTE_NAMES: [&str; 7] = [
    "deep",
    "muted",
    "pastel",
    "bright",
    "dark",
    "colorblind",
    "hls",
];

const fn hex(c: u32) -> Colour {
    Colour((c >> 16) as u8, (c >> 8) as u8, c as u8)
}

const DEEP: [Colour; PALETTE_LEN] = [
    hex(0x4C72B0),
    hex(0xDD8452),
    hex(0x55A868),
    hex(0xC44E52),
    hex(0x8172B3),
    hex(0x937860),
    hex(0xDA8BC3),
    hex(0x8C8C8C),
    hex(0xCCB974),
    hex(0x64B5CD),
];

const MUTED: [Colour; PALETTE_LEN] = [
    hex(0x4878D0),
    hex(0xEE854A),
    hex(0x6ACC64),
    hex(0xD65F5F),
    hex(0x956CB4),
    hex(0x8C613C),
    hex(0xDC7EC0),
    hex(0x797979),
    hex(0xD5BB67),
    hex(0x82C6E2),
];

const PASTEL: [Colour; PALETTE_LEN] = [
    hex(0xA1C9F4),
    hex(0xFFB482),
    hex(0x8DE5A1),
    hex(0xFF9F9B),
    hex(0xD0BBFF),
    hex(0xDEBB9B),
    hex(0xFAB0E4),
    hex(0xCFCFCF),
    hex(0xFFFEA3),
    hex(0xB9F2F0),
];

const BRIGHT: [Colour; PALETTE_LEN] = [
    hex(0x023EFF),
    hex(0xFF7C00),
    hex(0x1AC938),
    hex(0xE8000B),
    hex(0x8B2BE2),
    hex(0x9F4800),
    hex(0xF14CC1),
    hex(0xA3A3A3),
    hex(0xFFC400),
    hex(0x00D7FF),
];

const DARK: [Colour; PALETTE_LEN] = [
    hex(0x001C7F),
    hex(0xB1400D),
    hex(0x12711C),
    hex(0x8C0800),
    hex(0x591E71),
    hex(0x592F0D),
    hex(0xA23582),
    hex(0x3C3C3C),
    hex(0xB8850A),
    hex(0x006374),
];

const COLORBLIND: [Colour; PALETTE_LEN] = [
    hex(0x0173B2),
    hex(0xDE8F05),
    hex(0x029E73),
    hex(0xD55E00),
    hex(0xCC78BC),
    hex(0xCA9161),
    hex(0xFBAFE4),
    hex(0x949494),
    hex(0xECE133),
    hex(0x56B4E9),
];

/// A named set of exactly `PALETTE_LEN` colours. Key groups index in to this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourPalette {
    name: String,
    colours: [Colour; PALETTE_LEN],
}

impl ColourPalette {
    pub fn named(name: &str) -> Result<Self, Error> {
        let lower = name.to_lowercase();
        let colours = match lower.as_str() {
            "deep" => DEEP,
            "muted" => MUTED,
            "pastel" => PASTEL,
            "bright" => BRIGHT,
            "dark" => DARK,
            "colorblind" => COLORBLIND,
            "hls" => Self::hls(0.01, 0.6, 0.65),
            _ => return Err(Error::ParsePalette(name.to_owned())),
        };
        Ok(Self {
            name: lower,
            colours,
        })
    }

    /// Evenly spaced hues in HLS space, starting at hue `h`.
    pub fn hls(h: f64, l: f64, s: f64) -> [Colour; PALETTE_LEN] {
        let step = 1.0 / PALETTE_LEN as f64;
        let mut colours = [Colour::BLACK; PALETTE_LEN];
        for (i, c) in colours.iter_mut().enumerate() {
            let hue = (i as f64 * step + h).rem_euclid(1.0);
            let (r, g, b) = hls_to_rgb(hue, l, s);
            *c = Colour::from_unit_rgb(r, g, b);
        }
        colours
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn colours(&self) -> &[Colour; PALETTE_LEN] {
        &self.colours
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Colour> {
        self.colours.iter()
    }
}

impl Default for ColourPalette {
    fn default() -> Self {
        Self {
            name: DEFAULT_PALETTE.to_owned(),
            colours: BRIGHT,
        }
    }
}

impl FromStr for ColourPalette {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::named(s)
    }
}

impl Index<usize> for ColourPalette {
    type Output = Colour;

    fn index(&self, index: usize) -> &Self::Output {
        &self.colours[index]
    }
}

fn hls_to_rgb(h: f64, l: f64, s: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - (l * s) };
    let m1 = 2.0 * l - m2;
    (
        hue_channel(m1, m2, h + 1.0 / 3.0),
        hue_channel(m1, m2, h),
        hue_channel(m1, m2, h - 1.0 / 3.0),
    )
}

fn hue_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_resolves() {
        for name in PALETTE_NAMES {
            let pal = ColourPalette::named(name).unwrap();
            assert_eq!(pal.name(), name);
            assert_eq!(pal.iter().count(), PALETTE_LEN);
        }
    }

    #[test]
    fn names_are_case_insensitive() {
        let pal: ColourPalette = "Pastel".parse().unwrap();
        assert_eq!(pal.name(), "pastel");
        assert_eq!(pal[0], Colour(0xa1, 0xc9, 0xf4));
    }

    #[test]
    fn unknown_name_is_an_error() {
        assert_eq!(
            ColourPalette::named("viridis").unwrap_err(),
            Error::ParsePalette("viridis".to_owned())
        );
    }

    #[test]
    fn default_is_bright() {
        let pal = ColourPalette::default();
        assert_eq!(pal, ColourPalette::named("bright").unwrap());
        assert_eq!(pal[0], Colour(0x02, 0x3e, 0xff));
        assert_eq!(pal[9], Colour(0x00, 0xd7, 0xff));
    }

    #[test]
    fn hls_matches_colorsys() {
        let pal = ColourPalette::named("hls").unwrap();
        assert_eq!(pal[0], Colour(219, 94, 86));
        assert_eq!(pal[2], Colour(184, 219, 86));
        assert_eq!(pal[5], Colour(86, 211, 219));
        assert_eq!(pal[9], Colour(219, 86, 158));
    }

    #[test]
    fn grey_hls_has_equal_channels() {
        let (r, g, b) = hls_to_rgb(0.3, 0.4, 0.0);
        assert_eq!((r, g, b), (0.4, 0.4, 0.4));
    }
}
