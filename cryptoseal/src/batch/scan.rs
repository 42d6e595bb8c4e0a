use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::batch::Mode;
use crate::batch::run::{BatchItem, Outcome};
use crate::common::constants::WILDCARD_EXTENSION;
use crate::file::name;

/// The configured allow-set, normalized for matching.
///
/// Entries are lowercased on construction; the wildcard `.*` makes every
/// file eligible, including files without any extension.
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    allow_all: bool,
    allowed: Vec<String>,
}

impl ExtensionFilter {
    pub fn new(allowed_extensions: &[String]) -> Self {
        let allowed: Vec<String> = allowed_extensions
            .iter()
            .map(|e| e.to_lowercase())
            .collect();
        let allow_all = allowed.iter().any(|e| e == WILDCARD_EXTENSION);
        Self { allow_all, allowed }
    }

    /// Whether a file with the given (lowercased, dot-prefixed) extension
    /// passes the filter. `None` means the name has no extension, which
    /// only the wildcard matches.
    pub fn matches(&self, extension: Option<&str>) -> bool {
        if self.allow_all {
            return true;
        }
        match extension {
            Some(ext) => self.allowed.iter().any(|a| a == ext),
            None => false,
        }
    }
}

/// Walks `root` and collects the files eligible for `mode`, in a
/// deterministic order.
///
/// Sealing considers regular files that do not already carry the sealed
/// suffix and whose extension passes the filter. Unsealing considers
/// exactly the files carrying the suffix whose inner extension passes the
/// filter. Directory entries that cannot be read become failed items so
/// the report still accounts for them.
pub(crate) fn discover(
    mode: Mode,
    root: &Path,
    filter: &ExtensionFilter,
) -> (Vec<PathBuf>, Vec<BatchItem>) {
    let mut eligible = Vec::new();
    let mut failed = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                failed.push(BatchItem {
                    path,
                    outcome: Outcome::Failed(err.to_string()),
                });
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();

        let keep = match mode {
            Mode::Seal => {
                !name::is_sealed_name(&path)
                    && filter.matches(name::extension_of(&path).as_deref())
            }
            Mode::Unseal => {
                name::unsealed_name(&path).is_some()
                    && filter.matches(name::inner_extension(&path).as_deref())
            }
        };
        if keep {
            eligible.push(path);
        }
    }

    (eligible, failed)
}
