use std::path::Path;

use crate::error::DispatchError;
use crate::table::{self, CommandEntry};

/// Outcome of probing a command's candidate documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found {
        /// Candidate that matched, relative to the root.
        path: &'static str,
        content: Vec<u8>,
    },
    NotFound {
        /// Every candidate, in the order it was tried.
        tried: Vec<&'static str>,
    },
}

/// A resolved command document, ready to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub entry: &'static CommandEntry,
    pub path: &'static str,
    pub content: Vec<u8>,
}

/// Walks `entry`'s candidates in priority order under `root` and reads the
/// first one that exists as a file.
pub fn probe(root: &Path, entry: &CommandEntry) -> Result<Resolution, DispatchError> {
    let mut tried = Vec::new();
    for candidate in entry.candidates() {
        let full = root.join(candidate);
        if !full.is_file() {
            tracing::debug!("candidate missing: {}", full.display());
            tried.push(candidate);
            continue;
        }
        let content = std::fs::read(&full).map_err(|source| DispatchError::Unreadable {
            path: full.clone(),
            source,
        })?;
        tracing::debug!("resolved {} to {} ({} bytes)", entry.name, candidate, content.len());
        return Ok(Resolution::Found {
            path: candidate,
            content,
        });
    }
    Ok(Resolution::NotFound { tried })
}

/// Looks `name` up in the command table and loads its document from `root`.
pub fn resolve(root: &Path, name: &str) -> Result<Document, DispatchError> {
    let entry = table::lookup(name).ok_or_else(|| DispatchError::UnknownCommand {
        name: name.to_string(),
    })?;

    match probe(root, entry)? {
        Resolution::Found { path, content } => Ok(Document {
            entry,
            path,
            content,
        }),
        Resolution::NotFound { tried } => Err(DispatchError::MissingDocument {
            name: name.to_string(),
            tried,
        }),
    }
}
