//! Functions for user interaction in the interactive editor.

use std::io::{self, Write};

/// Prints a prompt and reads one trimmed line from stdin.
pub fn read_line(prompt: &str) -> Result<String, io::Error> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
