pub mod config;
pub mod greeting;
pub mod name;

pub use config::{CONFIG_FILE_NAME, Config, load_config, load_optional_config};
pub use greeting::hello;
pub use name::{DEFAULT_NAME, NAME_ENV_VAR, NameSource, ResolvedName, resolve_name};
