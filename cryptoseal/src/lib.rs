pub mod batch;
pub mod common;
pub mod crypto;
pub mod file;
pub mod keys;
pub mod settings;

// High-level API, re-exported for callers.
pub use batch::{BatchItem, BatchReport, ExtensionFilter, Mode, Outcome, run_batch};
pub use file::{SealError, UnsealError, seal_file, unseal_file};
pub use keys::{KeyError, Keyring, ensure_keypair, ensure_keys};
pub use settings::{Settings, SettingsError};
