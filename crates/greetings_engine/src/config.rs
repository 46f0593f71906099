use serde::Deserialize;
use tracing::{debug, instrument};

use greetings_base::{ErrorKind, FilePath, GreetingsError, GreetingsResult, PalHandle};

/// Name of the optional configuration file in the working directory.
pub const CONFIG_FILE_NAME: &str = "greetings.toml";

/// Contents of `greetings.toml`.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name to greet when neither an argument nor the environment provides one.
    #[serde(default)]
    pub name: Option<String>,
}

/// Loads and parses a configuration file through the PAL.
#[instrument(skip(pal), fields(path = %path))]
pub fn load_config(pal: &PalHandle, path: &FilePath) -> GreetingsResult<Config> {
    let contents = pal.read_file_to_string(path).map_err(|e| {
        Box::new(
            GreetingsError::new(ErrorKind::ConfigError {
                path: path.as_path().to_path_buf(),
                message: "file could not be read".to_string(),
            })
            .caused_by(e),
        )
    })?;
    let config = toml::from_str::<Config>(&contents).map_err(|e| {
        Box::new(GreetingsError::new(ErrorKind::ConfigError {
            path: path.as_path().to_path_buf(),
            message: e.message().to_string(),
        }))
    })?;
    debug!(has_name = config.name.is_some(), "configuration loaded");
    Ok(config)
}

/// Like [`load_config`], but a missing file yields `Ok(None)`.
pub fn load_optional_config(pal: &PalHandle, path: &FilePath) -> GreetingsResult<Option<Config>> {
    if !pal.file_exists(path)? {
        debug!(path = %path, "no configuration file");
        return Ok(None);
    }
    load_config(pal, path).map(Some)
}
