//! The key matrix maps each lit key to its cell in the device's lighting
//! matrix and the palette colour it is given.

use std::collections::HashSet;
use std::fmt;
use std::slice::Iter;

use crate::colour::Colour;
use crate::error::Error;
use crate::frame::Frame;
use crate::keys::KeyCode;
use crate::palette::ColourPalette;

/// Rows in the BlackWidow 2019 lighting matrix as reported by the daemon
pub const BLACKWIDOW_2019_ROWS: usize = 6;
/// Columns in the BlackWidow 2019 lighting matrix as reported by the daemon
pub const BLACKWIDOW_2019_COLS: usize = 22;

/// `(key, row, column, palette index)` for the BlackWidow 2019 `en_US`.
///
/// Palette groups: 0 letters and space, 1 punctuation and numpad operators,
/// 2 editing keys and arrows, 3 function and navigation keys, 4 digits, 5/6
/// the control keys, 8 mode keys, 9 highlighted keys.
#[rustfmt::skip]
const BLACKWIDOW_2019_EN_US: [(KeyCode, usize, usize, usize); 105] = [
    (KeyCode::Esc, 0, 1, 2),
    (KeyCode::F1, 0, 3, 3),
    (KeyCode::F2, 0, 4, 3),
    (KeyCode::F3, 0, 5, 3),
    (KeyCode::F4, 0, 6, 3),
    (KeyCode::F5, 0, 7, 9),
    (KeyCode::F6, 0, 8, 3),
    (KeyCode::F7, 0, 9, 3),
    (KeyCode::F8, 0, 10, 3),
    (KeyCode::F9, 0, 11, 3),
    (KeyCode::F10, 0, 12, 3),
    (KeyCode::F11, 0, 13, 3),
    (KeyCode::F12, 0, 14, 9),
    (KeyCode::PrtSc, 0, 15, 3),
    (KeyCode::ScrLk, 0, 16, 3),
    (KeyCode::Pause, 0, 17, 3),
    //
    (KeyCode::Tilde, 1, 1, 1),
    (KeyCode::N1, 1, 2, 4),
    (KeyCode::N2, 1, 3, 4),
    (KeyCode::N3, 1, 4, 4),
    (KeyCode::N4, 1, 5, 4),
    (KeyCode::N5, 1, 6, 4),
    (KeyCode::N6, 1, 7, 4),
    (KeyCode::N7, 1, 8, 4),
    (KeyCode::N8, 1, 9, 4),
    (KeyCode::N9, 1, 10, 4),
    (KeyCode::N0, 1, 11, 4),
    (KeyCode::Hyphen, 1, 12, 1),
    (KeyCode::Equals, 1, 13, 1),
    (KeyCode::Backspace, 1, 14, 2),
    (KeyCode::Ins, 1, 15, 3),
    (KeyCode::Home, 1, 16, 3),
    (KeyCode::PgUp, 1, 17, 3),
    (KeyCode::NumLock, 1, 18, 8),
    (KeyCode::NumPadSlash, 1, 19, 1),
    (KeyCode::NumPadStar, 1, 20, 1),
    (KeyCode::NumPadMinus, 1, 21, 1),
    //
    (KeyCode::Tab, 2, 1, 8),
    (KeyCode::Q, 2, 2, 0),
    (KeyCode::W, 2, 3, 0),
    (KeyCode::E, 2, 4, 0),
    (KeyCode::R, 2, 5, 0),
    (KeyCode::T, 2, 6, 0),
    (KeyCode::Y, 2, 7, 0),
    (KeyCode::U, 2, 8, 0),
    (KeyCode::I, 2, 9, 0),
    (KeyCode::O, 2, 10, 0),
    (KeyCode::P, 2, 11, 0),
    (KeyCode::LBracket, 2, 12, 1),
    (KeyCode::RBracket, 2, 13, 1),
    (KeyCode::BackSlash, 2, 14, 1),
    (KeyCode::Del, 2, 15, 2),
    (KeyCode::End, 2, 16, 3),
    (KeyCode::PgDn, 2, 17, 3),
    (KeyCode::NumPad7, 2, 18, 4),
    (KeyCode::NumPad8, 2, 19, 4),
    (KeyCode::NumPad9, 2, 20, 4),
    (KeyCode::NumPadPlus, 2, 21, 1),
    //
    (KeyCode::Caps, 3, 1, 8),
    (KeyCode::A, 3, 2, 0),
    (KeyCode::S, 3, 3, 0),
    (KeyCode::D, 3, 4, 0),
    (KeyCode::F, 3, 5, 0),
    (KeyCode::G, 3, 6, 0),
    (KeyCode::H, 3, 7, 0),
    (KeyCode::J, 3, 8, 0),
    (KeyCode::K, 3, 9, 0),
    (KeyCode::L, 3, 10, 0),
    (KeyCode::SemiColon, 3, 11, 1),
    (KeyCode::Quote, 3, 12, 1),
    (KeyCode::Return, 3, 14, 8),
    (KeyCode::NumPad4, 3, 18, 4),
    (KeyCode::NumPad5, 3, 19, 4),
    (KeyCode::NumPad6, 3, 20, 4),
    //
    (KeyCode::LShift, 4, 1, 2),
    (KeyCode::Z, 4, 3, 0),
    (KeyCode::X, 4, 4, 0),
    (KeyCode::C, 4, 5, 0),
    (KeyCode::V, 4, 6, 0),
    (KeyCode::B, 4, 7, 0),
    (KeyCode::N, 4, 8, 0),
    (KeyCode::M, 4, 9, 0),
    (KeyCode::Comma, 4, 10, 1),
    (KeyCode::Period, 4, 11, 1),
    (KeyCode::FwdSlash, 4, 12, 1),
    (KeyCode::RShift, 4, 14, 2),
    (KeyCode::Up, 4, 16, 2),
    (KeyCode::NumPad1, 4, 18, 4),
    (KeyCode::NumPad2, 4, 19, 4),
    (KeyCode::NumPad3, 4, 20, 4),
    (KeyCode::NumPadEnter, 4, 21, 8),
    //
    (KeyCode::LCtrl, 5, 1, 5),
    (KeyCode::Meta, 5, 2, 9),
    (KeyCode::LAlt, 5, 3, 8),
    (KeyCode::Spacebar, 5, 6, 0),
    (KeyCode::RAlt, 5, 10, 5),
    (KeyCode::RazerLogo, 5, 11, 2),
    (KeyCode::Fn, 5, 12, 9),
    (KeyCode::Properties, 5, 13, 8),
    (KeyCode::RCtrl, 5, 14, 6),
    (KeyCode::Left, 5, 15, 2),
    (KeyCode::Down, 5, 16, 2),
    (KeyCode::Right, 5, 17, 2),
    (KeyCode::NumPad0, 5, 19, 4),
    (KeyCode::NumPadDel, 5, 20, 2),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEntry {
    pub key: KeyCode,
    pub row: usize,
    pub column: usize,
    pub colour: Colour,
}

/// Immutable once built. Entries are kept in physical order, row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardMatrix {
    entries: Vec<KeyEntry>,
}

impl KeyboardMatrix {
    /// Colour the Razer BlackWidow 2019 (`en_US`) key layout from `palette`
    pub fn blackwidow_2019(palette: &ColourPalette) -> Self {
        let entries = BLACKWIDOW_2019_EN_US
            .iter()
            .map(|&(key, row, column, idx)| KeyEntry {
                key,
                row,
                column,
                colour: palette[idx],
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, key: KeyCode) -> Option<&KeyEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn iter(&self) -> Iter<'_, KeyEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if no two keys share a `(row, column)` cell
    pub fn has_unique_positions(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.entries.len());
        self.entries.iter().all(|e| seen.insert((e.row, e.column)))
    }

    /// Write every entry in to a black frame of the device's dimensions
    pub fn to_frame(&self, rows: usize, cols: usize) -> Result<Frame, Error> {
        let mut frame = Frame::new(rows, cols);
        for e in &self.entries {
            frame.set(e.row, e.column, e.colour)?;
        }
        Ok(frame)
    }
}

impl<'a> IntoIterator for &'a KeyboardMatrix {
    type IntoIter = Iter<'a, KeyEntry>;
    type Item = &'a KeyEntry;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Tabular preview, one key per line
impl fmt::Display for KeyboardMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .entries
            .iter()
            .map(|e| e.key.name().len())
            .max()
            .unwrap_or(0);
        write!(f, "{:width$}  row  column  colour", "")?;
        for e in &self.entries {
            let Colour(r, g, b) = e.colour;
            write!(
                f,
                "\n{:<width$}  {:>3}  {:>6}  ({r}, {g}, {b})",
                e.key.name(),
                e.row,
                e.column
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{PALETTE_LEN, PALETTE_NAMES};

    #[test]
    fn blackwidow_positions_are_unique() {
        let matrix = KeyboardMatrix::blackwidow_2019(&ColourPalette::default());
        assert_eq!(matrix.len(), 105);
        assert!(matrix.has_unique_positions());
    }

    #[test]
    fn blackwidow_keys_are_unique() {
        let matrix = KeyboardMatrix::blackwidow_2019(&ColourPalette::default());
        let keys: HashSet<KeyCode> = matrix.iter().map(|e| e.key).collect();
        assert_eq!(keys.len(), matrix.len());
        assert_eq!(keys.len(), KeyCode::ALL.len());
    }

    #[test]
    fn blackwidow_fits_device_matrix() {
        for (key, row, column, idx) in BLACKWIDOW_2019_EN_US {
            assert!(row < BLACKWIDOW_2019_ROWS, "{key} row {row}");
            assert!(column < BLACKWIDOW_2019_COLS, "{key} column {column}");
            assert!(idx < PALETTE_LEN, "{key} palette index {idx}");
        }
    }

    #[test]
    fn colours_come_from_palette() {
        for name in PALETTE_NAMES {
            let palette = ColourPalette::named(name).unwrap();
            let matrix = KeyboardMatrix::blackwidow_2019(&palette);
            for e in &matrix {
                assert!(palette.iter().any(|c| *c == e.colour), "{}", e.key);
            }
        }
    }

    #[test]
    fn known_assignments() {
        let palette = ColourPalette::default();
        let matrix = KeyboardMatrix::blackwidow_2019(&palette);

        let esc = matrix.get(KeyCode::Esc).unwrap();
        assert_eq!((esc.row, esc.column, esc.colour), (0, 1, palette[2]));

        let space = matrix.get(KeyCode::Spacebar).unwrap();
        assert_eq!((space.row, space.column, space.colour), (5, 6, palette[0]));

        let rctrl = matrix.get(KeyCode::RCtrl).unwrap();
        assert_eq!((rctrl.row, rctrl.column, rctrl.colour), (5, 14, palette[6]));

        let enter = matrix.get(KeyCode::NumPadEnter).unwrap();
        assert_eq!((enter.row, enter.column, enter.colour), (4, 21, palette[8]));
    }

    #[test]
    fn physical_order() {
        let matrix = KeyboardMatrix::blackwidow_2019(&ColourPalette::default());
        let first = matrix.iter().next().unwrap();
        let last = matrix.iter().last().unwrap();
        assert_eq!(first.key, KeyCode::Esc);
        assert_eq!(last.key, KeyCode::NumPadDel);
        assert!(matrix
            .iter()
            .zip(matrix.iter().skip(1))
            .all(|(a, b)| (a.row, a.column) < (b.row, b.column)));
    }

    #[test]
    fn frame_holds_every_key() {
        let palette = ColourPalette::named("dark").unwrap();
        let matrix = KeyboardMatrix::blackwidow_2019(&palette);
        let frame = matrix
            .to_frame(BLACKWIDOW_2019_ROWS, BLACKWIDOW_2019_COLS)
            .unwrap();
        for e in &matrix {
            assert_eq!(frame.get(e.row, e.column), Some(e.colour));
        }
        // Column 0 is never lit
        for row in 0..BLACKWIDOW_2019_ROWS {
            assert_eq!(frame.get(row, 0), Some(Colour::BLACK));
        }
    }

    #[test]
    fn frame_too_small() {
        let matrix = KeyboardMatrix::blackwidow_2019(&ColourPalette::default());
        assert!(matches!(
            matrix.to_frame(6, 16),
            Err(Error::MatrixBounds { column: 16, .. })
        ));
    }

    #[test]
    fn preview_lists_every_key() {
        let matrix = KeyboardMatrix::blackwidow_2019(&ColourPalette::default());
        let text = matrix.to_string();
        assert_eq!(text.lines().count(), matrix.len() + 1);
        assert!(text.lines().nth(1).unwrap().starts_with("esc"));
        assert!(text.contains("(2, 62, 255)"));
    }
}
