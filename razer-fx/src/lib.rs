//! Types for colouring a Razer keyboard key by key: palettes, the key to
//! lighting matrix table, frames, and the `LightingDevice` trait a backend
//! implements to receive them.

mod brightness;
pub use brightness::*;

mod colour;
pub use colour::*;

/// Device trait and the apply/inspect operations built on it
pub mod device;

pub mod error;

mod frame;
pub use frame::*;

mod keys;
pub use keys::*;

mod matrix;
pub use matrix::*;

pub mod palette;
pub use palette::ColourPalette;

pub static VERSION: &str = env!("CARGO_PKG_VERSION");
