use std::collections::HashMap;
use std::io::{self, Cursor, Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::GreetingsError;
use crate::GreetingsResult;
use crate::error::ErrorKind;

use super::FilePath;
use super::traits::Pal;

/// In-memory PAL implementation for testing.
///
/// Arguments and environment variables are fixed at construction. Files and
/// captured standard output live behind `Arc<Mutex<_>>`, so a clone kept by the
/// test observes everything written through a `PalHandle`.
///
/// ```
/// use std::io::Write;
/// use greetings_base::{MockPal, Pal};
///
/// let mock = MockPal::new();
/// writeln!(mock.stdout(), "Hi").unwrap();
/// assert_eq!(mock.stdout_contents(), "Hi\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockPal {
    args: Vec<String>,
    env: HashMap<String, String>,
    files: Arc<Mutex<HashMap<FilePath, Vec<u8>>>>,
    stdout: Arc<Mutex<Vec<u8>>>,
    stdout_fails: Arc<AtomicBool>,
}

impl MockPal {
    /// Create a new MockPal with no arguments, environment or files.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the positional command-line arguments.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Set an environment variable.
    pub fn with_env_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(name.into(), value.into());
        self
    }

    /// Add a file to the mock storage.
    pub fn add_file(&self, path: FilePath, content: Vec<u8>) {
        self.files.lock().unwrap().insert(path, content);
    }

    /// Make every subsequent write to stdout fail with `BrokenPipe`.
    pub fn fail_stdout(&self) {
        self.stdout_fails.store(true, Ordering::SeqCst);
    }

    /// Everything written to stdout so far, decoded lossily.
    pub fn stdout_contents(&self) -> String {
        String::from_utf8_lossy(&self.stdout.lock().unwrap()).into_owned()
    }
}

impl Pal for MockPal {
    fn args(&self) -> Vec<String> {
        self.args.clone()
    }

    fn env_var(&self, name: &str) -> Option<String> {
        self.env.get(name).cloned()
    }

    fn file_exists(&self, path: &FilePath) -> GreetingsResult<bool> {
        Ok(self.files.lock().unwrap().contains_key(path))
    }

    fn read_file(&self, path: &FilePath) -> GreetingsResult<Box<dyn Read + 'static>> {
        let files = self.files.lock().unwrap();
        let content = files
            .get(path)
            .ok_or_else(|| {
                Box::new(GreetingsError::new(ErrorKind::FileError {
                    path: path.as_path().to_path_buf(),
                    source: io::Error::new(
                        io::ErrorKind::NotFound,
                        format!("File not found: {}", path),
                    ),
                }))
            })?
            .clone();
        Ok(Box::new(Cursor::new(content)))
    }

    fn stdout(&self) -> Box<dyn Write> {
        Box::new(MockStdout {
            buffer: Arc::clone(&self.stdout),
            fails: Arc::clone(&self.stdout_fails),
        })
    }
}

/// Writer capturing stdout into the shared MockPal buffer.
struct MockStdout {
    buffer: Arc<Mutex<Vec<u8>>>,
    fails: Arc<AtomicBool>,
}

impl MockStdout {
    fn check(&self) -> io::Result<()> {
        if self.fails.load(Ordering::SeqCst) {
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "mock stdout closed",
            ));
        }
        Ok(())
    }
}

impl Write for MockStdout {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.check()?;
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.check()
    }
}
