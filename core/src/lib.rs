//! Core of the GSD dispatcher: maps a command name to a workflow document
//! under the installation root and renders it for a coding agent to follow.
//!
//! Prefer the re-exports below over reaching into the modules.

pub mod error;
pub mod layout;
pub mod render;
pub mod resolve;
pub mod table;

pub use error::{DispatchError, LayoutError};
pub use layout::Layout;
pub use render::{write_document, write_error, write_help, HelpContext};
pub use resolve::{probe, resolve, Document, Resolution};
pub use table::{lookup, CommandEntry, CommandGroup, COMMANDS};
