use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Seals and unseals a watched directory tree", long_about = None)]
pub struct Cli {
    /// Path of the settings file
    #[arg(short = 'c', long = "config", default_value = "settings.json")]
    pub settings_path: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Seal every eligible plaintext file under the watch directory
    Seal {
        /// Override the configured watch directory for this run
        #[arg(short = 'd', long = "directory")]
        directory: Option<PathBuf>,
    },
    /// Unseal every sealed file under the watch directory
    Unseal {
        /// Override the configured watch directory for this run
        #[arg(short = 'd', long = "directory")]
        directory: Option<PathBuf>,
    },
    /// Generate the RSA keypair if it does not exist yet
    Keygen,
    /// Edit the settings interactively
    Config,
    /// Print the current settings
    Show,
}
