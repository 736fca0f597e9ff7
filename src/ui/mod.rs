//! Human-facing diagnostics.
//!
//! Command results are the host's business and go to stdout untouched; every
//! message here goes to stderr so a relayed winget transcript stays clean.

use crate::config::ColorMode;
use colored::Colorize;
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);
static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed) && !is_quiet()
}

/// Apply the color mode. `NO_COLOR` wins over `auto`.
pub fn init_colors(mode: ColorMode) {
    match mode {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {
            if std::env::var_os("NO_COLOR").is_some() {
                colored::control::set_override(false);
            } else {
                colored::control::unset_override();
            }
        }
    }
}

pub fn info(msg: &str) {
    if !is_quiet() {
        eprintln!("{} {}", "ℹ".blue().bold(), msg);
    }
}

pub fn verbose(msg: &str) {
    if is_verbose() {
        eprintln!("{} {}", "·".dimmed(), msg.dimmed());
    }
}

pub fn warning(msg: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}

pub fn keyval(key: &str, val: &str) {
    println!("{}: {}", key.bold(), val);
}
