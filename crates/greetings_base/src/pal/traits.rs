use std::io::{Read, Write};
use std::sync::Arc;

use crate::GreetingsResult;
use crate::error::{ErrorKind, GreetingsError};

use super::file_path::FilePath;

/// Platform Abstraction Layer (PAL) trait over the process environment.
///
/// Two implementations are provided:
/// - `RealPal`: real arguments, environment, filesystem and stdout
/// - `MockPal`: in-memory implementation for testing
pub trait Pal: std::fmt::Debug + Send + Sync + 'static {
    /// Positional command-line arguments, excluding the program name.
    fn args(&self) -> Vec<String>;

    /// Value of an environment variable, if set.
    fn env_var(&self, name: &str) -> Option<String>;

    /// Check if a file exists at the given path.
    fn file_exists(&self, path: &FilePath) -> GreetingsResult<bool>;

    /// Open a file for reading.
    fn read_file(&self, path: &FilePath) -> GreetingsResult<Box<dyn Read + 'static>>;

    /// Read entire file contents as a UTF-8 string.
    fn read_file_to_string(&self, path: &FilePath) -> GreetingsResult<String> {
        let mut reader = self.read_file(path)?;
        let mut contents = Vec::new();
        reader.read_to_end(&mut contents).map_err(|e| {
            Box::new(GreetingsError::new(ErrorKind::FileError {
                path: path.as_path().to_path_buf(),
                source: e,
            }))
        })?;
        String::from_utf8(contents).map_err(|_e| crate::err!("File is not valid UTF-8: {}", path))
    }

    /// Writer for the process's standard output.
    fn stdout(&self) -> Box<dyn Write>;
}

/// Shared handle to a PAL implementation.
///
/// ```
/// use greetings_base::{MockPal, PalHandle};
///
/// let pal = PalHandle::new(MockPal::new().with_args(["Alice"]));
/// assert_eq!(pal.args(), vec!["Alice".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct PalHandle(Arc<dyn Pal>);

impl PalHandle {
    /// Create a new PalHandle from a Pal implementation.
    pub fn new(pal: impl Pal + 'static) -> Self {
        Self(Arc::new(pal))
    }
}

impl std::ops::Deref for PalHandle {
    type Target = dyn Pal;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
