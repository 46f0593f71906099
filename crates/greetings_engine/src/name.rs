use std::fmt;

use tracing::{debug, instrument, warn};

use greetings_base::{FilePath, GreetingsResult, PalHandle, ResultExt};

use crate::config::{CONFIG_FILE_NAME, load_optional_config};

/// Environment variable consulted when no argument is given.
pub const NAME_ENV_VAR: &str = "GREETINGS_NAME";

/// Name greeted when no other source provides one.
pub const DEFAULT_NAME: &str = "Gladys";

/// Where a resolved name came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    Argument,
    Environment,
    ConfigFile,
    Default,
}

impl fmt::Display for NameSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NameSource::Argument => "argument",
            NameSource::Environment => "environment",
            NameSource::ConfigFile => "config file",
            NameSource::Default => "default",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    pub name: String,
    pub source: NameSource,
}

impl ResolvedName {
    fn new(name: impl Into<String>, source: NameSource) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }
}

/* 📖 # Name precedence

First match wins:
1. the first positional argument
2. the `GREETINGS_NAME` environment variable
3. `name` in `greetings.toml`
4. `DEFAULT_NAME`

An empty argument or an empty environment value still counts as a name. A
config file that cannot be read or parsed is skipped with a warning, so name
resolution itself never fails on bad input.
*/

/// Determines which name to greet.
#[instrument(skip(pal))]
pub fn resolve_name(pal: &PalHandle) -> GreetingsResult<ResolvedName> {
    let mut args = pal.args().into_iter();
    if let Some(name) = args.next() {
        let ignored = args.count();
        if ignored > 0 {
            warn!(ignored, "ignoring extra positional arguments");
        }
        return Ok(ResolvedName::new(name, NameSource::Argument));
    }

    if let Some(name) = pal.env_var(NAME_ENV_VAR) {
        debug!(var = NAME_ENV_VAR, "name taken from environment");
        return Ok(ResolvedName::new(name, NameSource::Environment));
    }

    let config_path = FilePath::from(CONFIG_FILE_NAME);
    match load_optional_config(pal, &config_path)
        .with_context(|| format!("loading {CONFIG_FILE_NAME}"))
    {
        Ok(Some(config)) => {
            if let Some(name) = config.name {
                return Ok(ResolvedName::new(name, NameSource::ConfigFile));
            }
        }
        Ok(None) => {}
        Err(e) => {
            warn!(path = %config_path, error = %e, "ignoring unusable configuration file");
        }
    }

    Ok(ResolvedName::new(DEFAULT_NAME, NameSource::Default))
}

#[cfg(test)]
mod tests {
    use super::*;
    use greetings_base::MockPal;

    fn resolve(mock: MockPal) -> ResolvedName {
        resolve_name(&PalHandle::new(mock)).unwrap()
    }

    fn with_config(mock: MockPal, contents: &str) -> MockPal {
        mock.add_file(FilePath::from(CONFIG_FILE_NAME), contents.as_bytes().to_vec());
        mock
    }

    #[test]
    fn test_default_name() {
        assert_eq!(
            resolve(MockPal::new()),
            ResolvedName::new("Gladys", NameSource::Default)
        );
    }

    #[test]
    fn test_argument_wins() {
        let mock = with_config(
            MockPal::new()
                .with_args(["Alice"])
                .with_env_var(NAME_ENV_VAR, "Eve"),
            "name = \"Carol\"",
        );
        assert_eq!(resolve(mock), ResolvedName::new("Alice", NameSource::Argument));
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let mock = MockPal::new().with_args(["Alice", "Bob"]);
        assert_eq!(resolve(mock).name, "Alice");
    }

    #[test]
    fn test_empty_argument_is_a_name() {
        let mock = MockPal::new().with_args([""]);
        assert_eq!(resolve(mock), ResolvedName::new("", NameSource::Argument));
    }

    #[test]
    fn test_environment_beats_config() {
        let mock = with_config(
            MockPal::new().with_env_var(NAME_ENV_VAR, "Eve"),
            "name = \"Carol\"",
        );
        assert_eq!(resolve(mock), ResolvedName::new("Eve", NameSource::Environment));
    }

    #[test]
    fn test_empty_environment_value_is_a_name() {
        let mock = MockPal::new().with_env_var(NAME_ENV_VAR, "");
        assert_eq!(resolve(mock), ResolvedName::new("", NameSource::Environment));
    }

    #[test]
    fn test_config_file_name() {
        let mock = with_config(MockPal::new(), "name = \"Carol\"");
        assert_eq!(resolve(mock), ResolvedName::new("Carol", NameSource::ConfigFile));
    }

    #[test]
    fn test_config_without_name_falls_back_to_default() {
        let mock = with_config(MockPal::new(), "");
        assert_eq!(resolve(mock).source, NameSource::Default);
    }

    #[test]
    fn test_broken_config_falls_back_to_default() {
        let mock = with_config(MockPal::new(), "name = [");
        assert_eq!(
            resolve(mock),
            ResolvedName::new("Gladys", NameSource::Default)
        );
    }

    #[test]
    fn test_name_source_display() {
        assert_eq!(NameSource::ConfigFile.to_string(), "config file");
    }
}
