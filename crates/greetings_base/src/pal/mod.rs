/* 📖 # What is the Platform Abstraction Layer?

The PAL is the only place that touches the process environment: command-line
arguments, environment variables, files and standard output. Everything above it
takes a `PalHandle`, so tests substitute `MockPal` for `RealPal`.
*/

mod file_path;
pub mod mock;
pub mod real_pal;
mod traits;

pub use file_path::FilePath;
pub use mock::MockPal;
pub use real_pal::RealPal;
pub use traits::{Pal, PalHandle};
