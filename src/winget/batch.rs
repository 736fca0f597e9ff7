use super::Winget;
use crate::error::Result;
use std::process::Stdio;

/// Placeholder returned when winget printed nothing at all.
pub const EMPTY_OUTPUT: &str = "Done.";

impl Winget {
    /// Run winget to completion and relay what it printed.
    ///
    /// A nonzero exit is not an error: winget reports its own failures as
    /// text and that text is relayed like any other output.
    pub fn run(&self, args: &[String]) -> Result<String> {
        self.ensure_available()?;

        let output = self
            .command(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| self.spawn_failed(e))?;

        if !output.status.success() {
            crate::ui::verbose(&format!("winget exited with {}", output.status));
        }

        Ok(relay_output(&output.stdout, &output.stderr))
    }
}

/// stdout then stderr, trimmed; [`EMPTY_OUTPUT`] when both are blank.
pub fn relay_output(stdout: &[u8], stderr: &[u8]) -> String {
    let mut combined = String::from_utf8_lossy(stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(stderr));

    match combined.trim() {
        "" => EMPTY_OUTPUT.to_string(),
        text => text.to_string(),
    }
}
