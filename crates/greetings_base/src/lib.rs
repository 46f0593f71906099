/* 📖 # Why have greetings_base as a core library?
greetings_base provides the error type, tracing setup and platform abstraction
shared by the engine and the CLI.
*/

pub mod error;
pub mod pal;
pub mod tracing;

// Re-export commonly used types for convenience
pub use error::{ErrorKind, GreetingsError, GreetingsResult, ResultExt};
pub use pal::{FilePath, MockPal, Pal, PalHandle, RealPal};
