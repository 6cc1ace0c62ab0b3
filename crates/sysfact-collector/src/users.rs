use crate::FactCollector;
use anyhow::{bail, Context, Result};
use std::process::Command;

/// Reports logged-in session users as one space-joined string.
///
/// Backed by `who -q`, whose first line lists the user of each open session
/// (a user with two sessions appears twice) and whose last line is a
/// `# users=N` summary.
pub struct SessionUserCollector;

impl SessionUserCollector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SessionUserCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts the user list from `who -q` output. An empty result means no
/// open sessions, which is a valid fact value.
fn parse_who_output(output: &str) -> Vec<String> {
    output
        .lines()
        .next()
        .filter(|line| !line.starts_with('#'))
        .map(|line| line.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

impl FactCollector for SessionUserCollector {
    fn name(&self) -> &str {
        "users"
    }

    fn collect(&mut self) -> Result<String> {
        let output = Command::new("who")
            .arg("-q")
            .output()
            .context("failed to run 'who -q'")?;
        if !output.status.success() {
            bail!("'who -q' exited with {}", output.status);
        }
        let text = String::from_utf8_lossy(&output.stdout);
        Ok(parse_who_output(&text).join(" "))
    }
}
