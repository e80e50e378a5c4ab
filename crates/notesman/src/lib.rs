//! `notesman` - an interactive notes manager over a plain text file
//!
//! Notes are appended as blocks of text lines, each followed by a `---`
//! separator line. The [`Session`] drives the menu; [`NotesFile`] does the
//! file work.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod note;
pub mod session;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use note::Note;
pub use session::{MenuChoice, Session};
pub use store::NotesFile;
