use super::Winget;
use super::progress::ProgressTracker;
use crate::error::Result;
use crate::ui;
use std::io::{self, BufReader, Write};

/// `winget install` arguments for an exact, non-interactive install of `id`.
pub fn install_args(id: &str) -> Vec<String> {
    [
        "install",
        "--exact",
        "--id",
        id,
        "--accept-source-agreements",
        "--accept-package-agreements",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Winget {
    /// Install `id`, echoing each progress update to `sink`.
    ///
    /// stdout and stderr of the child share one pipe, so progress printed on
    /// either stream is seen in order. Returns the last progress message.
    pub fn install(&self, id: &str, sink: &mut dyn Write) -> Result<String> {
        self.ensure_available()?;

        let (reader, writer) = io::pipe().map_err(|e| self.spawn_failed(e))?;
        let err_writer = writer.try_clone().map_err(|e| self.spawn_failed(e))?;

        // The command owns both write ends; dropping it leaves the child as
        // the only writer so the reader sees EOF when the child exits.
        let mut child = {
            let mut cmd = self.command(install_args(id));
            cmd.stdout(writer).stderr(err_writer);
            cmd.spawn().map_err(|e| self.spawn_failed(e))?
        };

        let mut tracker = ProgressTracker::new();
        if let Err(e) = tracker.consume(BufReader::new(reader), id, sink) {
            ui::warning(&format!("Lost winget output while installing {}: {}", id, e));
        }

        match child.wait() {
            Ok(status) if !status.success() => {
                ui::verbose(&format!("winget exited with {}", status));
            }
            Ok(_) => {}
            Err(e) => ui::warning(&format!("Failed to wait for winget: {}", e)),
        }

        Ok(tracker.message(id))
    }
}
