use std::fmt;
use std::str::FromStr;

use crate::error::Error;

pub const BRIGHTNESS_MIN: f64 = 0.0;
pub const BRIGHTNESS_MAX: f64 = 100.0;

/// LED backlight brightness as a percentage, always within `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Brightness(f64);

impl Brightness {
    pub fn new(value: f64) -> Result<Self, Error> {
        // NaN fails both comparisons so is rejected here too
        if (BRIGHTNESS_MIN..=BRIGHTNESS_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::BrightnessRange(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Brightness {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for Brightness {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value as f64)
    }
}

impl FromStr for Brightness {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s.trim().parse().map_err(|_| Error::ParseBrightness)?;
        Self::new(value)
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert_eq!(Brightness::new(0.0).unwrap().value(), 0.0);
        assert_eq!(Brightness::new(100.0).unwrap().value(), 100.0);
        assert_eq!(Brightness::try_from(42_i64).unwrap().value(), 42.0);
        assert_eq!(Brightness::try_from(55.5).unwrap().value(), 55.5);
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(Brightness::new(-1.0), Err(Error::BrightnessRange(-1.0)));
        assert_eq!(Brightness::new(100.5), Err(Error::BrightnessRange(100.5)));
        assert!(Brightness::try_from(101_i64).is_err());
        assert!(Brightness::new(f64::NAN).is_err());
        assert!(Brightness::new(f64::INFINITY).is_err());
    }

    #[test]
    fn parse_numeric_text() {
        assert_eq!("80".parse::<Brightness>().unwrap().value(), 80.0);
        assert_eq!("12.5".parse::<Brightness>().unwrap().value(), 12.5);
        assert_eq!(" 7 ".parse::<Brightness>().unwrap().value(), 7.0);
        assert_eq!("150".parse::<Brightness>(), Err(Error::BrightnessRange(150.0)));
    }

    #[test]
    fn parse_rejects_non_numeric() {
        assert_eq!("high".parse::<Brightness>(), Err(Error::ParseBrightness));
        assert_eq!("".parse::<Brightness>(), Err(Error::ParseBrightness));
        assert_eq!("50%".parse::<Brightness>(), Err(Error::ParseBrightness));
    }
}
