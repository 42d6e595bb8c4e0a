use std::path::{Path, PathBuf};

use crate::errors::CliError;
use crate::ui::prompt::read_line;
use cryptoseal::Settings;

/// Prints the current settings in the same shape the editor shows them.
pub fn print_settings(settings: &Settings) {
    println!("Watch directory    : {}", settings.watch_directory.display());
    println!(
        "Allowed extensions : {}",
        if settings.allowed_extensions.is_empty() {
            "(none)".to_string()
        } else {
            settings.allowed_extensions.join(", ")
        }
    );
    println!("Public key path    : {}", settings.public_key_path.display());
    println!("Private key path   : {}", settings.private_key_path.display());
}

fn print_menu(settings: &Settings) {
    println!("\nCONFIGURATION");
    print_settings(settings);
    println!("\nOptions:");
    println!("1. Change watch directory");
    println!("2. Add an extension");
    println!("3. Remove an extension");
    println!("4. Change public key path");
    println!("5. Change private key path");
    println!("6. Save and quit");
    println!("7. Quit without saving");
}

/// Interactive settings editor. Changes are held in memory until the
/// operator picks "save and quit"; quitting without saving discards them.
pub fn run_editor(settings: &mut Settings, settings_path: &Path) -> Result<(), CliError> {
    loop {
        print_menu(settings);
        match read_line("Choice: ")?.as_str() {
            "1" => {
                let dir = read_line("New watch directory: ")?;
                if Path::new(&dir).is_dir() {
                    settings.watch_directory = PathBuf::from(dir);
                } else {
                    println!("That directory does not exist.");
                }
            }
            "2" => {
                let ext = read_line("New extension (e.g. .pdf): ")?.to_lowercase();
                if ext.starts_with('.') && !settings.allowed_extensions.contains(&ext) {
                    settings.allowed_extensions.push(ext);
                } else {
                    println!("Extensions must start with '.' and not already be listed.");
                }
            }
            "3" => {
                let ext = read_line("Extension to remove: ")?.to_lowercase();
                settings.allowed_extensions.retain(|e| e != &ext);
            }
            "4" => {
                let path = read_line("New public key path: ")?;
                if !path.is_empty() {
                    settings.public_key_path = PathBuf::from(path);
                }
            }
            "5" => {
                let path = read_line("New private key path: ")?;
                if !path.is_empty() {
                    settings.private_key_path = PathBuf::from(path);
                }
            }
            "6" => {
                settings.save(settings_path)?;
                println!("Settings saved.");
                break;
            }
            "7" => {
                println!("Changes discarded.");
                break;
            }
            _ => println!("Invalid choice."),
        }
    }
    Ok(())
}
