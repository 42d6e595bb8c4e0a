mod cli;
mod errors;
mod handlers;
mod instance;
mod ui;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::errors::CliError;
use crate::instance::InstanceLock;
use cryptoseal::keys::ensure_keys;
use cryptoseal::{Mode, Settings};

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Only one instance may work against a given directory at a time.
    // The guard's sentinel is removed on every exit path, including the
    // error returns below.
    let _lock = InstanceLock::acquire(&std::env::current_dir()?)?;

    let mut settings = Settings::bootstrap(&cli.settings_path)?;
    let keys_generated = ensure_keys(&mut settings, &cli.settings_path)?;
    if keys_generated {
        println!(
            "Generated a new RSA keypair:\n- {}\n- {}",
            settings.public_key_path.display(),
            settings.private_key_path.display()
        );
    }

    match cli.command {
        Command::Seal { directory } => {
            let root = directory.unwrap_or_else(|| settings.watch_directory.clone());
            handlers::batch::handle_batch(Mode::Seal, &root, &settings)
        }
        Command::Unseal { directory } => {
            let root = directory.unwrap_or_else(|| settings.watch_directory.clone());
            handlers::batch::handle_batch(Mode::Unseal, &root, &settings)
        }
        Command::Keygen => {
            if !keys_generated {
                println!(
                    "Keypair already present:\n- {}\n- {}",
                    settings.public_key_path.display(),
                    settings.private_key_path.display()
                );
            }
            Ok(())
        }
        Command::Config => handlers::config::run_editor(&mut settings, &cli.settings_path),
        Command::Show => {
            handlers::config::print_settings(&settings);
            Ok(())
        }
    }
}
