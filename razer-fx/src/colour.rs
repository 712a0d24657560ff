use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A single 8-bit per channel RGB value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Colour(pub u8, pub u8, pub u8);

impl Colour {
    pub const BLACK: Colour = Colour(0, 0, 0);

    /// Convert float channels in `[0.0, 1.0]` the same way numpy does when
    /// casting `value * 255` to `uint8`, truncating rather than rounding.
    pub fn from_unit_rgb(r: f64, g: f64, b: f64) -> Self {
        let c = |v: f64| (v.clamp(0.0, 1.0) * 255.0) as u8;
        Colour(c(r), c(g), c(b))
    }

    pub const fn as_array(&self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }
}

impl From<[u8; 3]> for Colour {
    fn from(c: [u8; 3]) -> Self {
        Colour(c[0], c[1], c[2])
    }
}

impl From<Colour> for [u8; 3] {
    fn from(c: Colour) -> Self {
        c.as_array()
    }
}

impl FromStr for Colour {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::ParseColour);
        }
        let r = u8::from_str_radix(&s[0..2], 16).or(Err(Error::ParseColour))?;
        let g = u8::from_str_radix(&s[2..4], 16).or(Err(Error::ParseColour))?;
        let b = u8::from_str_radix(&s[4..6], 16).or(Err(Error::ParseColour))?;
        Ok(Colour(r, g, b))
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex() {
        assert_eq!(Colour::from_str("#023EFF").unwrap(), Colour(0x02, 0x3e, 0xff));
        assert_eq!(Colour::from_str("ff7c00").unwrap(), Colour(0xff, 0x7c, 0x00));
        assert_eq!(Colour::from_str("ff7c0").unwrap_err(), Error::ParseColour);
        assert_eq!(Colour::from_str("zz7c00").unwrap_err(), Error::ParseColour);
        assert_eq!(Colour::from_str("#ff7c00aa").unwrap_err(), Error::ParseColour);
    }

    #[test]
    fn parse_rejects_signs() {
        assert_eq!(Colour::from_str("+f+f+f").unwrap_err(), Error::ParseColour);
        assert_eq!(Colour::from_str("#+fffff").unwrap_err(), Error::ParseColour);
        assert_eq!(Colour::from_str("-10000").unwrap_err(), Error::ParseColour);
    }

    #[test]
    fn display_is_upper_hex() {
        assert_eq!(Colour(0x1a, 0xc9, 0x38).to_string(), "#1AC938");
    }

    #[test]
    fn unit_rgb_truncates() {
        assert_eq!(Colour::from_unit_rgb(1.0, 0.0, 0.5), Colour(255, 0, 127));
        assert_eq!(Colour::from_unit_rgb(2.0, -1.0, 0.999), Colour(255, 0, 254));
    }
}
