use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;

use tracing::{debug, instrument};

use crate::{GreetingsError, GreetingsResult, error::ErrorKind};

use super::FilePath;
use super::traits::Pal;

/// PAL implementation backed by the running process.
///
/// File paths are resolved relative to a configured base directory, normally
/// the current working directory.
#[derive(Debug)]
pub struct RealPal {
    base_dir: PathBuf,
}

impl RealPal {
    /// Create a new RealPal with the given base directory.
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Resolve a FilePath to a filesystem path.
    fn resolve_path(&self, path: &FilePath) -> PathBuf {
        path.to_path(&self.base_dir)
    }
}

impl Pal for RealPal {
    fn args(&self) -> Vec<String> {
        std::env::args_os()
            .skip(1)
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }

    fn env_var(&self, name: &str) -> Option<String> {
        std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }

    #[instrument(skip(self), fields(path = %path))]
    fn file_exists(&self, path: &FilePath) -> GreetingsResult<bool> {
        let resolved = self.resolve_path(path);
        let exists = resolved.is_file();
        debug!(exists, resolved = %resolved.display(), "checked file existence");
        Ok(exists)
    }

    #[instrument(skip(self), fields(path = %path))]
    fn read_file(&self, path: &FilePath) -> GreetingsResult<Box<dyn Read + 'static>> {
        let resolved = self.resolve_path(path);
        debug!(resolved = %resolved.display(), "opening file for reading");
        let file = fs::File::open(&resolved).map_err(|e| {
            debug!(error = %e, "failed to open file");
            Box::new(GreetingsError::new(ErrorKind::FileError {
                path: resolved,
                source: e,
            }))
        })?;
        Ok(Box::new(file))
    }

    fn stdout(&self) -> Box<dyn Write> {
        Box::new(std::io::stdout())
    }
}
