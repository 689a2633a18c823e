//! Single-question yes/no prompt driven by raw keystrokes
//!
//! Public interface lives here; the state machine and rendering are in
//! `internal`, the crossterm glue in `terminal`.
//!
//! # Keys
//!
//! - `←` / `→`: flip the selection
//! - `y` / `n` (any case): pick Yes / No
//! - `Enter`: accept the current selection
//! - `Ctrl-C`: abandon the prompt
//!
//! # Example
//!
//! ```no_run
//! use create_vitepress_tailwind::prompt::{self, ConfirmOutcome};
//!
//! match prompt::confirm("Add Cursor rules for Tailwind CSS?", true)? {
//!     ConfirmOutcome::Answered(yes) => println!("answered {yes}"),
//!     ConfirmOutcome::Interrupted => std::process::exit(130),
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

mod internal;
mod terminal;

use anyhow::Result;
use std::io;

pub use internal::{run_prompt, ConfirmState, Key, KeySource, Transition};
pub use terminal::{key_from_event, RawModeGuard, TerminalKeys};

use crate::logging::log_debug;

/// How a confirm prompt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// Enter was pressed; carries the selection at that moment
    Answered(bool),
    /// Ctrl-C was pressed
    Interrupted,
}

/// Ask `question` on the controlling terminal.
///
/// Raw mode is held for the duration of the prompt and released on every
/// exit path, including errors and Ctrl-C. When stdin or stdout is not a
/// terminal, nothing is read and `default` is returned.
pub fn confirm(question: &str, default: bool) -> Result<ConfirmOutcome> {
    if !atty::is(atty::Stream::Stdin) || !atty::is(atty::Stream::Stdout) {
        log_debug("prompt", "not a terminal, using default answer");
        println!(
            "{question} (non-interactive, using default: {})",
            if default { "Yes" } else { "No" }
        );
        return Ok(ConfirmOutcome::Answered(default));
    }

    let _guard = RawModeGuard::enter()?;
    let mut keys = TerminalKeys;
    let mut stdout = io::stdout();
    run_prompt(question, default, &mut keys, &mut stdout)
}
