use std::fmt;
use std::str::FromStr;

use crate::error::Error;

macro_rules! key_codes {
    ($($(#[$meta:meta])* $key:ident => $name:literal,)*) => {
        /// A lit key on the keyboard. The name is what is shown in the matrix
        /// preview and what `FromStr` accepts.
        #[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, PartialOrd, Ord)]
        pub enum KeyCode {
            $($(#[$meta])* $key,)*
        }

        impl KeyCode {
            pub const ALL: &'static [KeyCode] = &[$(KeyCode::$key,)*];

            pub const fn name(&self) -> &'static str {
                match self {
                    $(KeyCode::$key => $name,)*
                }
            }
        }

        impl FromStr for KeyCode {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(KeyCode::$key),)*
                    _ => Err(Error::ParseKey(s.to_owned())),
                }
            }
        }
    };
}

key_codes! {
    Esc => "esc",
    F1 => "F1",
    F2 => "F2",
    F3 => "F3",
    F4 => "F4",
    F5 => "F5",
    F6 => "F6",
    F7 => "F7",
    F8 => "F8",
    F9 => "F9",
    F10 => "F10",
    F11 => "F11",
    F12 => "F12",
    PrtSc => "prt sc",
    ScrLk => "scr lk",
    Pause => "pause",
    Tilde => "`",
    N1 => "1",
    N2 => "2",
    N3 => "3",
    N4 => "4",
    N5 => "5",
    N6 => "6",
    N7 => "7",
    N8 => "8",
    N9 => "9",
    N0 => "0",
    Hyphen => "-",
    Equals => "=",
    Backspace => "backspace",
    Ins => "ins",
    Home => "home",
    PgUp => "page_up",
    NumLock => "num_lk",
    NumPadSlash => "numpad_forward_slash",
    NumPadStar => "numpad_*",
    NumPadMinus => "numpad_-",
    Tab => "tab",
    Q => "Q",
    W => "W",
    E => "E",
    R => "R",
    T => "T",
    Y => "Y",
    U => "U",
    I => "I",
    O => "O",
    P => "P",
    LBracket => "[",
    RBracket => "]",
    BackSlash => "back_slash",
    Del => "del",
    End => "end",
    PgDn => "page_down",
    NumPad7 => "numpad_7",
    NumPad8 => "numpad_8",
    NumPad9 => "numpad_9",
    NumPadPlus => "numpad_+",
    Caps => "caps",
    A => "A",
    S => "S",
    D => "D",
    F => "F",
    G => "G",
    H => "H",
    J => "J",
    K => "K",
    L => "L",
    SemiColon => ";",
    Quote => "'",
    Return => "enter",
    NumPad4 => "numpad_4",
    NumPad5 => "numpad_5",
    NumPad6 => "numpad_6",
    LShift => "left_shift",
    Z => "Z",
    X => "X",
    C => "C",
    V => "V",
    B => "B",
    N => "N",
    M => "M",
    Comma => ",",
    Period => ".",
    FwdSlash => "forward_slash",
    RShift => "right_shift",
    Up => "arrow_up",
    NumPad1 => "numpad_1",
    NumPad2 => "numpad_2",
    NumPad3 => "numpad_3",
    NumPadEnter => "numpad_enter",
    LCtrl => "left_ctrl",
    /// The "windows" or super key
    Meta => "windows",
    LAlt => "left_alt",
    Spacebar => "space",
    RAlt => "right_alt",
    /// Not a key, the backlit logo below the arrow cluster
    RazerLogo => "razer_logo",
    Fn => "fn",
    /// The context menu key
    Properties => "properties",
    RCtrl => "right_ctrl",
    Left => "arrow_left",
    Down => "arrow_down",
    Right => "arrow_right",
    NumPad0 => "numpad_0",
    NumPadDel => "numpad_.",
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
