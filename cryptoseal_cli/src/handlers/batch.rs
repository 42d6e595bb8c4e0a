use std::path::Path;

use crate::errors::CliError;
use cryptoseal::keys::Keyring;
use cryptoseal::{BatchReport, ExtensionFilter, Mode, Outcome, Settings, run_batch};

/// Runs one seal or unseal batch over `root` and reports every attempted
/// file on stdout, one line each, followed by a summary.
pub fn handle_batch(mode: Mode, root: &Path, settings: &Settings) -> Result<(), CliError> {
    let filter = ExtensionFilter::new(&settings.allowed_extensions);
    let keys = Keyring::load(&settings.public_key_path, &settings.private_key_path)?;

    let report = run_batch(mode, root, &filter, &keys)?;
    match &report {
        BatchReport::NothingToDo => {
            match mode {
                Mode::Seal => println!("Nothing to seal."),
                Mode::Unseal => println!("Nothing to unseal."),
            }
            return Ok(());
        }
        BatchReport::Completed(items) => {
            for item in items {
                match &item.outcome {
                    Outcome::Sealed(output) => {
                        println!("Sealed: {} -> {}", item.path.display(), output.display());
                    }
                    Outcome::Unsealed(output) => {
                        println!("Unsealed: {} -> {}", item.path.display(), output.display());
                    }
                    Outcome::Failed(reason) => {
                        println!("FAILED {}: {}", item.path.display(), reason);
                    }
                }
            }
        }
    }

    let succeeded = report.sealed() + report.unsealed();
    println!("\n{} succeeded, {} failed.", succeeded, report.failed());
    Ok(())
}
