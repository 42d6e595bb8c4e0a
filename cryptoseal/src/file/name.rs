//! Naming rules for sealed files.
//!
//! Sealing appends a fixed suffix to the complete file name
//! (`report.pdf` -> `report.pdf.enc`); unsealing strips it again. The
//! *inner* extension of a sealed name is the extension of the name with
//! the suffix removed, which is what batch filtering matches against.

use std::path::{Path, PathBuf};

use crate::common::constants::SEALED_SUFFIX;

/// Appends the sealed suffix to the file name.
pub fn sealed_name(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(SEALED_SUFFIX);
    PathBuf::from(name)
}

/// Strips the sealed suffix, restoring the original name. Returns `None`
/// when the name does not carry the suffix, or when stripping it would
/// leave nothing.
pub fn unsealed_name(path: &Path) -> Option<PathBuf> {
    let file_name = path.file_name()?.to_str()?;
    let stem = file_name.strip_suffix(SEALED_SUFFIX)?;
    if stem.is_empty() {
        return None;
    }
    Some(path.with_file_name(stem))
}

/// Whether the file name carries the sealed suffix.
pub fn is_sealed_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(SEALED_SUFFIX))
}

/// The final extension of the name, with a leading dot, lowercased.
/// `None` for names without an extension.
pub fn extension_of(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?;
    Some(format!(".{}", ext.to_lowercase()))
}

/// The extension of a sealed name once the suffix is stripped:
/// `archive.PDF.enc` -> `.pdf`.
pub fn inner_extension(path: &Path) -> Option<String> {
    extension_of(&unsealed_name(path)?)
}
