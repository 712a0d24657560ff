use std::fmt;
use std::str::FromStr;

use gumdrop::Options;
use razer_fx::Brightness;

#[derive(Debug, Default, Options)]
pub struct CliStart {
    #[options(help_flag, help = "print help message")]
    pub help: bool,
    #[options(help = "show program version number")]
    pub version: bool,
    #[options(
        meta = "NAME",
        help = "colour palette: deep, muted, pastel, bright, dark, colorblind, hls"
    )]
    pub colorpal: Option<String>,
    #[options(
        meta = "VALUE",
        help = "set brightness <0-100> when applying the advanced effect"
    )]
    pub brightness: Option<Brightness>,
    #[options(free, help = "apply, device_info, keyboard_matrix, show_colorpal")]
    pub command: Vec<String>,
}

impl CliStart {
    /// The command to run. Anything unrecognised, missing or extra gives
    /// `None` and the caller prints help instead.
    pub fn command(&self) -> Option<Command> {
        match self.command.as_slice() {
            [cmd] => cmd.parse().ok(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Set the per-key colours on the keyboard
    Apply,
    /// Print properties of every device the daemon manages
    DeviceInfo,
    /// Print the key to matrix cell table
    KeyboardMatrix,
    /// Preview the colour palette
    ShowColourPal,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::Apply,
        Command::DeviceInfo,
        Command::KeyboardMatrix,
        Command::ShowColourPal,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Command::Apply => "apply",
            Command::DeviceInfo => "device_info",
            Command::KeyboardMatrix => "keyboard_matrix",
            Command::ShowColourPal => "show_colorpal",
        }
    }

    /// Only these talk to the daemon
    pub const fn needs_daemon(&self) -> bool {
        matches!(self, Command::Apply | Command::DeviceInfo)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown command: {}", self.0)
    }
}

impl std::error::Error for UnknownCommand {}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownCommand(s.to_owned()))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
