use std::fs;
use std::path::{Path, PathBuf};

use crate::batch::scan::{self, ExtensionFilter};
use crate::batch::Mode;
use crate::file::{seal_file, unseal_file};
use crate::keys::Keyring;

/// What happened to one discovered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The file was sealed; the new envelope lives at the given path and
    /// the plaintext source was removed.
    Sealed(PathBuf),
    /// The envelope was unsealed; the restored file lives at the given
    /// path and the envelope was removed.
    Unsealed(PathBuf),
    /// The file could not be processed. The source artifact is untouched
    /// unless the message says otherwise.
    Failed(String),
}

/// One discovered file paired with its processing outcome.
#[derive(Debug, Clone)]
pub struct BatchItem {
    pub path: PathBuf,
    pub outcome: Outcome,
}

/// The result of one batch run.
#[derive(Debug)]
pub enum BatchReport {
    /// No eligible file was found under the root. This is not an error.
    NothingToDo,
    /// One entry per attempted file, in discovery order.
    Completed(Vec<BatchItem>),
}

impl BatchReport {
    pub fn items(&self) -> &[BatchItem] {
        match self {
            BatchReport::NothingToDo => &[],
            BatchReport::Completed(items) => items,
        }
    }

    pub fn sealed(&self) -> usize {
        self.items()
            .iter()
            .filter(|i| matches!(i.outcome, Outcome::Sealed(_)))
            .count()
    }

    pub fn unsealed(&self) -> usize {
        self.items()
            .iter()
            .filter(|i| matches!(i.outcome, Outcome::Unsealed(_)))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.items()
            .iter()
            .filter(|i| matches!(i.outcome, Outcome::Failed(_)))
            .count()
    }
}

/// Defines the errors that abort a batch run before its loop starts.
/// Everything that happens per file is captured in the item outcomes
/// instead.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("Watch directory does not exist or is not a directory: {0}")]
    RootNotFound(PathBuf),
}

/// Runs one batch over the tree rooted at `root`.
///
/// Discovery picks the eligible files for `mode`; each one is then
/// sealed or unsealed strictly in sequence. A failure on one file is
/// recorded in its outcome and the loop moves on; the run's job is to
/// convert as many files as it can, not to be all-or-nothing. The source
/// artifact is removed only after the replacement has been persisted.
pub fn run_batch(
    mode: Mode,
    root: &Path,
    filter: &ExtensionFilter,
    keys: &Keyring,
) -> Result<BatchReport, BatchError> {
    if !root.is_dir() {
        return Err(BatchError::RootNotFound(root.to_path_buf()));
    }

    let (eligible, mut items) = scan::discover(mode, root, filter);
    if eligible.is_empty() && items.is_empty() {
        tracing::info!(root = %root.display(), "nothing to do");
        return Ok(BatchReport::NothingToDo);
    }

    for path in eligible {
        let outcome = process_one(mode, &path, keys);
        match &outcome {
            Outcome::Failed(reason) => {
                tracing::warn!(path = %path.display(), %reason, "batch item failed");
            }
            _ => tracing::info!(path = %path.display(), "batch item done"),
        }
        items.push(BatchItem { path, outcome });
    }

    Ok(BatchReport::Completed(items))
}

fn process_one(mode: Mode, path: &Path, keys: &Keyring) -> Outcome {
    let produced = match mode {
        Mode::Seal => seal_file(path, &keys.public)
            .map(Outcome::Sealed)
            .map_err(|e| e.to_string()),
        Mode::Unseal => unseal_file(path, &keys.private)
            .map(Outcome::Unsealed)
            .map_err(|e| e.to_string()),
    };

    match produced {
        Ok(outcome) => {
            // The source goes away only once the replacement is on disk.
            if let Err(e) = fs::remove_file(path) {
                return Outcome::Failed(format!(
                    "output written but source could not be removed: {e}"
                ));
            }
            outcome
        }
        Err(reason) => Outcome::Failed(reason),
    }
}
