use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::PathBuf;

use log::{error, warn};
pub use ron;
use ron::ser::PrettyConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Config file helper traits. Only `new()`, `file_name()` and `config_dir()`
/// are required to be implemented, the rest are intended to be free methods.
pub trait StdConfig
where
    Self: Serialize + DeserializeOwned,
{
    /// Taking over the standard `new()` to ensure things can be generic
    fn new() -> Self;

    /// Return the config files names, such as `wibble.ron`
    fn file_name(&self) -> String;

    /// Return the full path to the directory the config file resides in
    fn config_dir() -> PathBuf;

    /// Return the full path to the config file. The directory is created if
    /// it does not exist yet.
    fn file_path(&self) -> PathBuf {
        let mut config = Self::config_dir();
        if !config.exists() {
            if let Err(e) = fs::create_dir_all(&config) {
                error!("Could not create {config:?}: {e}");
            }
        }
        config.push(self.file_name());
        config
    }

    /// Write the config file data to pretty ron format
    fn write(&self) {
        let mut file = match File::create(self.file_path()) {
            Ok(data) => data,
            Err(e) => {
                error!(
                    "Couldn't overwrite config {:?}, error: {e}",
                    self.file_path()
                );
                return;
            }
        };
        let ron = match ron::ser::to_string_pretty(&self, PrettyConfig::new().depth_limit(4)) {
            Ok(data) => data,
            Err(e) => {
                error!("Parse {:?} to RON failed, error: {e}", self.file_path());
                return;
            }
        };
        file.write_all(ron.as_bytes())
            .unwrap_or_else(|err| error!("Could not write config: {}", err));
    }

    /// Renames the existing file to `<file>-old`
    fn rename_file_old(&self) {
        warn!(
            "Renaming {} to {}-old and recreating config",
            self.file_name(),
            self.file_name()
        );
        let cfg_old = self.file_path().to_string_lossy().to_string() + "-old";
        fs::rename(self.file_path(), cfg_old).unwrap_or_else(|err| {
            error!(
                "Could not rename. Please remove {} then run again: Error {}",
                self.file_name(),
                err
            )
        });
    }
}

/// Load the config, creating it with defaults if it does not exist.
///
/// # Example
/// ```rust
/// use std::path::PathBuf;
/// use serde::{Deserialize, Serialize};
/// use config_traits::{StdConfig, StdConfigLoad};
///
/// #[derive(Deserialize, Serialize)]
/// struct LightingConfig {}
///
/// impl StdConfig for LightingConfig {
///     fn new() -> Self { Self {} }
///
///     fn file_name(&self) -> std::string::String { "test_name.ron".to_owned() }
///
///     fn config_dir() -> PathBuf { std::env::temp_dir() }
/// }
///
/// impl StdConfigLoad for LightingConfig {}
/// ```
///
/// If the file fails to parse, then the old config is renamed and a new one
/// created
pub trait StdConfigLoad
where
    Self: StdConfig + DeserializeOwned + Serialize,
{
    fn load(mut self) -> Self {
        let path = self.file_path();
        let mut buf = String::new();
        match OpenOptions::new().read(true).open(&path) {
            Ok(mut file) => match file.read_to_string(&mut buf) {
                Ok(0) => warn!("Config file {} is empty, recreating", self.file_name()),
                Ok(_) => {
                    if let Ok(data) = ron::from_str(&buf) {
                        self = data;
                    } else {
                        self.rename_file_old();
                        self = Self::new();
                    }
                }
                Err(e) => error!("Could not read {path:?}: {e}"),
            },
            Err(e) => warn!("No config at {path:?} ({e}), creating default"),
        }
        self.write();
        self
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use serde::{Deserialize, Serialize};

    use super::*;

    fn test_dir() -> PathBuf {
        let mut dir = std::env::temp_dir();
        dir.push(format!("config-traits-test-{}", std::process::id()));
        dir
    }

    #[derive(Debug, PartialEq, Deserialize, Serialize)]
    struct TestConfig {
        name: String,
        level: Option<u8>,
    }

    impl StdConfig for TestConfig {
        fn new() -> Self {
            Self {
                name: "default".to_owned(),
                level: None,
            }
        }

        fn file_name(&self) -> String {
            "test.ron".to_owned()
        }

        fn config_dir() -> PathBuf {
            test_dir()
        }
    }

    impl StdConfigLoad for TestConfig {}

    // One test so the shared file isn't raced by the parallel test runner
    #[test]
    fn load_create_and_recover() {
        let _ = fs::remove_dir_all(test_dir());

        let cfg = TestConfig::new().load();
        assert_eq!(cfg, TestConfig::new());
        assert!(cfg.file_path().exists());

        let custom = TestConfig {
            name: "custom".to_owned(),
            level: Some(3),
        };
        custom.write();
        let loaded = TestConfig::new().load();
        assert_eq!(loaded, custom);

        fs::write(custom.file_path(), "not ron at all {").unwrap();
        let recovered = TestConfig::new().load();
        assert_eq!(recovered, TestConfig::new());
        let mut old = custom.file_path().into_os_string();
        old.push("-old");
        assert!(PathBuf::from(old).exists());

        let _ = fs::remove_dir_all(test_dir());
    }
}
