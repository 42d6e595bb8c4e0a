#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use cryptoseal::keys::{Keyring, ensure_keypair};
use tempfile::TempDir;

/// Generates a keypair inside the temp dir and loads it back, the way the
/// batch processor consumes it.
pub fn setup_keyring(dir: &TempDir) -> Keyring {
    let public = dir.path().join("public_key.pem");
    let private = dir.path().join("private_key.pem");
    ensure_keypair(&public, &private).unwrap();
    Keyring::load(&public, &private).unwrap()
}

/// Creates a file with the given content under the temp dir, creating
/// intermediate directories as needed.
pub fn create_dummy_file(dir: &TempDir, relative: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// The watch root used by batch tests, kept separate from the key files
/// so the PEMs never show up in discovery.
pub fn setup_watch_root(dir: &TempDir) -> PathBuf {
    let root = dir.path().join("watched");
    fs::create_dir_all(&root).unwrap();
    root
}

/// Shorthand for building an `ExtensionFilter` from string literals.
pub fn filter_of(entries: &[&str]) -> cryptoseal::ExtensionFilter {
    let owned: Vec<String> = entries.iter().map(|s| s.to_string()).collect();
    cryptoseal::ExtensionFilter::new(&owned)
}

/// Lists the file names (not paths) currently present under a directory
/// tree, sorted, for easy assertions.
pub fn tree_file_names(root: &Path) -> Vec<String> {
    let mut names: Vec<String> = walk_files(root)
        .into_iter()
        .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .collect();
    names.sort();
    names
}

fn walk_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir).unwrap() {
            let entry = entry.unwrap();
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else {
                files.push(path);
            }
        }
    }
    files
}
