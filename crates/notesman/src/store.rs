//! Notes file access.
//!
//! [`NotesFile`] performs every filesystem operation the session needs. Each
//! call opens its own handle and drops it before returning, on success and on
//! error alike.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::note::{decode_line, Note};

/// A plain text notes file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesFile {
    path: PathBuf,
}

impl NotesFile {
    /// Point at `path`. Nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path as given.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The path resolved against the working directory, for display.
    ///
    /// Falls back to the path as given if it cannot be resolved.
    #[must_use]
    pub fn absolute_path(&self) -> PathBuf {
        std::path::absolute(&self.path).unwrap_or_else(|_| self.path.clone())
    }

    /// Create the file, and any missing parent directories, if it does not
    /// exist yet.
    ///
    /// Returns `true` if this call created the file.
    ///
    /// # Errors
    ///
    /// Returns an error if a parent directory or the file cannot be created.
    pub fn ensure_exists(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                debug!("Creating directory {}", parent.display());
                fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(_) => {
                debug!("Created notes file {}", self.path.display());
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(Error::file_access(&self.path, e)),
        }
    }

    /// Append a note block, creating the file if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or written.
    pub fn append(&self, note: &Note) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::file_access(&self.path, e))?;

        file.write_all(note.to_block().as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| Error::file_access(&self.path, e))?;

        debug!(
            "Appended {} line note to {}",
            note.lines().len(),
            self.path.display()
        );
        Ok(())
    }

    /// True if the file is missing, unreadable, or has zero length.
    #[must_use]
    pub fn is_empty_or_missing(&self) -> bool {
        fs::metadata(&self.path).map_or(true, |meta| meta.len() == 0)
    }

    /// Read every line of the file, without line endings.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read.
    pub fn read_lines(&self) -> Result<Vec<String>> {
        let file = File::open(&self.path).map_err(|e| Error::file_access(&self.path, e))?;

        BufReader::new(file)
            .split(b'\n')
            .map(|line| line.map(|bytes| decode_line(&bytes)))
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|e| Error::file_access(&self.path, e))
    }

    /// Truncate the file to zero length, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened for writing.
    pub fn clear(&self) -> Result<()> {
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| Error::file_access(&self.path, e))?;

        debug!("Cleared {}", self.path.display());
        Ok(())
    }
}
