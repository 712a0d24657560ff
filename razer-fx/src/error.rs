use std::{error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    ParseColour,
    ParsePalette(String),
    ParseKey(String),
    ParseBrightness,
    BrightnessRange(f64),
    MatrixBounds {
        row: usize,
        column: usize,
        rows: usize,
        cols: usize,
    },
    /// Errors from the device backend, usually the daemon connection
    Device(String),
}

impl fmt::Display for Error {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ParseColour => write!(f, "Could not parse colour"),
            Error::ParsePalette(name) => write!(
                f,
                "{name} is not a valid palette name, must be one of: {}",
                crate::palette::PALETTE_NAMES.join(", ")
            ),
            Error::ParseKey(name) => write!(f, "Could not parse key name {name}"),
            Error::ParseBrightness => write!(f, "Could not parse brightness, should be int or float"),
            Error::BrightnessRange(v) => {
                write!(f, "Brightness {v} is out of range, must be in [0, 100]")
            }
            Error::MatrixBounds {
                row,
                column,
                rows,
                cols,
            } => write!(
                f,
                "Key at ({row}, {column}) does not fit a {rows}x{cols} lighting matrix"
            ),
            Error::Device(e) => write!(f, "Device error: {e}"),
        }
    }
}

impl error::Error for Error {}
