//! Workflow commands understood by the Actions runner.
//!
//! The runner scans stdout for `::command::message` lines. Messages are
//! escaped so multi-line errors stay on one command line.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

/// Escape data per the runner's rules: `%`, CR and LF.
pub fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

pub fn format_command(command: &str, message: &str) -> String {
    format!("::{command}::{}", escape_data(message))
}

pub fn warning(message: &str) {
    println!("{}", format_command("warning", message));
}

/// Append `name=value` to the file named by `GITHUB_OUTPUT`.
///
/// Multi-line values use the heredoc form with a delimiter not present in
/// the value.
pub fn set_output(output_file: &Path, name: &str, value: &str) -> Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(output_file)
        .with_context(|| format!("opening {}", output_file.display()))?;

    let entry = if value.contains('\n') {
        let mut delimiter = String::from("ghadelimiter");
        while value.contains(&delimiter) {
            delimiter.push('_');
        }
        format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
    } else {
        format!("{name}={value}\n")
    };

    file.write_all(entry.as_bytes())
        .with_context(|| format!("writing output {name} to {}", output_file.display()))
}
