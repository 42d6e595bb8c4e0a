use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use openssl::pkey::{PKey, Public};
use tempfile::NamedTempFile;

use crate::crypto::envelope::{self, EnvelopeError};
use crate::file::name;

/// Defines errors that can occur while sealing one file.
#[derive(Debug, thiserror::Error)]
pub enum SealError {
    /// The source path does not exist or is not a regular file.
    #[error("Source file not found at {0}")]
    SourceNotFound(PathBuf),

    /// An I/O error occurred while reading the source or staging the
    /// envelope.
    #[error("File I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding the envelope failed.
    #[error("Envelope encoding failed: {0}")]
    Envelope(#[from] EnvelopeError),

    /// The staged envelope could not be moved to its final name.
    #[error("Failed to persist sealed file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Seals one plaintext file into an envelope written next to it.
///
/// The whole file is read into memory and sealed under `public_key`; the
/// envelope is staged as a temp file in the same directory and renamed to
/// `<name>.enc`, so the output appears atomically. The source file is
/// left in place; removing it after success is the batch loop's job, so
/// a failure here can never destroy the original.
pub fn seal_file(source: &Path, public_key: &PKey<Public>) -> Result<PathBuf, SealError> {
    if !source.is_file() {
        return Err(SealError::SourceNotFound(source.to_path_buf()));
    }

    let plaintext = fs::read(source)?;
    let envelope = envelope::seal_bytes(&plaintext, public_key)?;

    let output = name::sealed_name(source);
    let parent = source.parent().unwrap_or(Path::new("."));
    let mut staged = NamedTempFile::new_in(parent)?;
    staged.write_all(&envelope)?;
    staged.persist(&output)?;

    Ok(output)
}
