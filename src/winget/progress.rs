//! Install progress extraction.
//!
//! winget redraws its progress bar in place with carriage returns, so output
//! is split on `\n`, `\r` and `\r\n` alike. Each line is searched for the first
//! `NN%` token anywhere in the line.
//!
//! The pattern is unanchored: a percentage that is not install progress (a
//! package named `100% Orange Juice`, or `1234%` which yields `234`) is
//! reported as progress too.

use crate::ui;
use regex::Regex;
use std::io::{self, BufRead, Write};
use std::sync::LazyLock;

static PERCENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,3})%").expect("Invalid regex pattern"));

/// First percentage in `line`, if any.
pub fn parse_percent(line: &str) -> Option<u16> {
    PERCENT_PATTERN
        .captures(line)?
        .get(1)?
        .as_str()
        .parse()
        .ok()
}

/// `Installing {id}...`, prefixed with `[{pct}%] ` once progress is known.
pub fn installing_message(id: &str, percent: Option<u16>) -> String {
    match percent {
        Some(pct) => format!("[{}%] Installing {}...", pct, id),
        None => format!("Installing {}...", id),
    }
}

/// Lines of child output, yielded as soon as their terminator arrives.
pub struct OutputLines<R> {
    reader: R,
    skip_lf: bool,
    finished: bool,
}

impl<R: BufRead> OutputLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            skip_lf: false,
            finished: false,
        }
    }
}

impl<R: BufRead> Iterator for OutputLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut line = Vec::new();
        loop {
            let available = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            };

            if available.is_empty() {
                self.finished = true;
                return (!line.is_empty()).then(|| Ok(decode(&line)));
            }

            // second half of a \r\n pair
            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    self.reader.consume(1);
                    continue;
                }
            }

            match available.iter().position(|b| matches!(b, b'\n' | b'\r')) {
                Some(pos) => {
                    self.skip_lf = available[pos] == b'\r';
                    line.extend_from_slice(&available[..pos]);
                    self.reader.consume(pos + 1);
                    return Some(Ok(decode(&line)));
                }
                None => {
                    let len = available.len();
                    line.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }
    }
}

fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Latest progress seen for one install, plus the live echo to the host.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    last: Option<u16>,
    sink_broken: bool,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<u16> {
        self.last
    }

    pub fn message(&self, id: &str) -> String {
        installing_message(id, self.last)
    }

    /// Record one output line. A match updates the progress and writes one
    /// flushed status line to `sink`.
    ///
    /// A failing sink stops the echo but not the tracking, so the child's
    /// output keeps being drained.
    pub fn observe(&mut self, line: &str, id: &str, sink: &mut dyn Write) -> Option<u16> {
        let pct = parse_percent(line)?;
        self.last = Some(pct);

        if !self.sink_broken {
            let written = writeln!(sink, "{}", installing_message(id, Some(pct)))
                .and_then(|_| sink.flush());
            if let Err(e) = written {
                ui::verbose(&format!("Progress output stopped: {}", e));
                self.sink_broken = true;
            }
        }

        Some(pct)
    }

    /// Drain `reader` line by line, observing each line as it arrives.
    pub fn consume<R: BufRead>(&mut self, reader: R, id: &str, sink: &mut dyn Write) -> io::Result<()> {
        for line in OutputLines::new(reader) {
            self.observe(&line?, id, sink);
        }
        Ok(())
    }
}
