pub mod cli;
pub mod commands;
pub mod error;
pub mod inspect;
pub mod logging;
pub mod matcher;
pub mod message;
pub mod output;
pub mod profile;
pub mod scanner;
pub mod validator;

pub use error::{ImageInspectError, Result};
pub use inspect::{Inspector, inspect};
pub use message::Message;

/// The scan ran, whether or not it found violations.
pub const EXIT_SUCCESS: i32 = 0;
/// Configuration or runtime error.
pub const EXIT_ERROR: i32 = 1;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
