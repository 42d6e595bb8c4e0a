use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use openssl::pkey::{PKey, Private};
use tempfile::NamedTempFile;

use crate::crypto::envelope::{self, EnvelopeError};
use crate::file::name;

/// Defines errors that can occur while unsealing one envelope file.
#[derive(Debug, thiserror::Error)]
pub enum UnsealError {
    /// The envelope path does not exist or is not a regular file.
    #[error("Sealed file not found at {0}")]
    SourceNotFound(PathBuf),

    /// The file name does not end with the sealed suffix, so there is no
    /// original name to restore. Historical tooling disagreed on what to
    /// do here; this implementation refuses instead of inventing a name.
    #[error("File name {0} does not carry the sealed suffix; cannot restore the original name")]
    MissingSealedSuffix(PathBuf),

    /// An I/O error occurred while reading the envelope or staging the
    /// plaintext.
    #[error("File I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Decoding the envelope failed.
    #[error("Envelope decoding failed: {0}")]
    Envelope(#[from] EnvelopeError),

    /// The staged plaintext could not be moved to its final name.
    #[error("Failed to persist unsealed file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Unseals one envelope file back into the plaintext it was made from.
///
/// The output name is the input name with the sealed suffix stripped
/// (`report.pdf.enc` -> `report.pdf`), written next to the envelope via a
/// staged temp file. The envelope is left in place; removing it after
/// success is the batch loop's job.
pub fn unseal_file(source: &Path, private_key: &PKey<Private>) -> Result<PathBuf, UnsealError> {
    if !source.is_file() {
        return Err(UnsealError::SourceNotFound(source.to_path_buf()));
    }
    let output = name::unsealed_name(source)
        .ok_or_else(|| UnsealError::MissingSealedSuffix(source.to_path_buf()))?;

    let envelope = fs::read(source)?;
    let plaintext = envelope::unseal_bytes(&envelope, private_key)?;

    let parent = source.parent().unwrap_or(Path::new("."));
    let mut staged = NamedTempFile::new_in(parent)?;
    staged.write_all(&plaintext)?;
    staged.persist(&output)?;

    Ok(output)
}
