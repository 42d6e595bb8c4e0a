use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::errors::CliError;

/// Name of the sentinel file guarding against concurrent instances.
pub const LOCK_FILE: &str = "cryptoseal.lock";

/// Exclusive-instance guard backed by a sentinel file in the working
/// directory.
///
/// `acquire` has acquire-or-fail semantics: when the sentinel already
/// exists the whole process must stop immediately. The sentinel is
/// removed when the guard drops, so release happens on every exit path.
pub struct InstanceLock {
    path: PathBuf,
}

impl InstanceLock {
    pub fn acquire(dir: &Path) -> Result<Self, CliError> {
        let path = dir.join(LOCK_FILE);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut sentinel) => {
                // Best effort: record the owner pid for the operator.
                let _ = write!(sentinel, "{}", std::process::id());
                Ok(Self { path })
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                Err(CliError::AlreadyRunning(path))
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl Drop for InstanceLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}
