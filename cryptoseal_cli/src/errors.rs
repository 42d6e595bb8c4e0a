use std::io;
use std::path::PathBuf;

use thiserror::Error;

use cryptoseal::batch::BatchError;
use cryptoseal::keys::KeyError;
use cryptoseal::settings::SettingsError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Another instance is already running (lock file {0} exists)")]
    AlreadyRunning(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Settings(#[from] SettingsError),

    #[error("Key management error: {0}")]
    Key(#[from] KeyError),

    #[error("Batch error: {0}")]
    Batch(#[from] BatchError),
}
