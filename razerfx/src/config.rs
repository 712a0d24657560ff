use std::path::PathBuf;

use config_traits::{StdConfig, StdConfigLoad};
use razer_fx::error::Error;
use razer_fx::palette::DEFAULT_PALETTE;
use razer_fx::{Brightness, ColourPalette};
use serde::{Deserialize, Serialize};

use crate::cli_opts::CliStart;

const CONFIG_DIR: &str = "razerfx";
const CONFIG_FILE: &str = "razerfx.ron";

/// User defaults, overridden by command line flags
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RazerFxConfig {
    pub palette: String,
    /// `None` leaves the device brightness as it is
    pub brightness: Option<f64>,
}

impl StdConfig for RazerFxConfig {
    fn new() -> Self {
        Self {
            palette: DEFAULT_PALETTE.to_owned(),
            brightness: None,
        }
    }

    fn file_name(&self) -> String {
        CONFIG_FILE.to_owned()
    }

    fn config_dir() -> PathBuf {
        let mut dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("/tmp"));
        dir.push(CONFIG_DIR);
        dir
    }
}

impl StdConfigLoad for RazerFxConfig {}

impl RazerFxConfig {
    /// Merge with the command line. Flags win over the config file.
    pub fn resolve(&self, cli: &CliStart) -> Result<(ColourPalette, Option<Brightness>), Error> {
        let palette = ColourPalette::named(cli.colorpal.as_deref().unwrap_or(&self.palette))?;
        let brightness = match cli.brightness {
            Some(b) => Some(b),
            None => self.brightness.map(Brightness::new).transpose()?,
        };
        Ok((palette, brightness))
    }
}
