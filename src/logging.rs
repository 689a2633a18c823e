//! Debug output switch.
//!
//! Progress and warnings go straight to stdout with `println!`. This module
//! only covers the `--verbose` channel, which writes to stderr so it never
//! interleaves with the prompt's rendering.

use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Turn debug output on or off for the rest of the process.
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

pub fn verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Write a `[DEBUG scope] msg` line to stderr when verbose output is on.
pub fn log_debug(scope: &str, msg: &str) {
    if verbose() {
        eprintln!("[DEBUG {}] {}", scope, msg);
    }
}
