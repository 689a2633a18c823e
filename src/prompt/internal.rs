//! Confirm prompt state machine and rendering

use anyhow::Result;
use colored::Colorize;
use crossterm::cursor;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use std::io::Write;

use super::ConfirmOutcome;

/// A keystroke, reduced to what the prompt cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Char(char),
    Enter,
    /// Ctrl-C
    Interrupt,
    Other,
}

/// Effect of one key on the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// No state change, nothing to redraw
    Ignored,
    /// Selection updated, option line must be redrawn
    Changed,
    Resolved(bool),
    Interrupted,
}

/// Selection state of an unresolved prompt
#[derive(Debug, Clone)]
pub struct ConfirmState {
    selected: bool,
}

impl ConfirmState {
    pub fn new(default: bool) -> Self {
        Self { selected: default }
    }

    pub fn selected(&self) -> bool {
        self.selected
    }

    pub fn handle(&mut self, key: Key) -> Transition {
        match key {
            Key::Left | Key::Right => {
                self.selected = !self.selected;
                Transition::Changed
            }
            Key::Char(c) if c.eq_ignore_ascii_case(&'y') => {
                self.selected = true;
                Transition::Changed
            }
            Key::Char(c) if c.eq_ignore_ascii_case(&'n') => {
                self.selected = false;
                Transition::Changed
            }
            Key::Enter => Transition::Resolved(self.selected),
            Key::Interrupt => Transition::Interrupted,
            Key::Char(_) | Key::Other => Transition::Ignored,
        }
    }
}

/// Blocking supplier of keystrokes
pub trait KeySource {
    fn next_key(&mut self) -> Result<Key>;
}

/// Overwrite the current line with both options, the selected one emphasized.
fn render_options<W: Write>(out: &mut W, selected: bool) -> Result<()> {
    let (yes, no) = if selected {
        ("Yes".cyan().bold().underline(), "No".dimmed())
    } else {
        ("Yes".dimmed(), "No".cyan().bold().underline())
    };

    queue!(
        out,
        cursor::MoveToColumn(0),
        Clear(ClearType::UntilNewLine),
        Print(format!("  {yes} / {no}"))
    )?;
    out.flush()?;
    Ok(())
}

/// Drive one prompt to resolution.
///
/// Assumes the terminal is already in raw mode, so line breaks are written
/// as `\r\n`. The cursor is hidden while waiting and shown again on every
/// exit path.
pub fn run_prompt<K, W>(
    question: &str,
    default: bool,
    keys: &mut K,
    out: &mut W,
) -> Result<ConfirmOutcome>
where
    K: KeySource + ?Sized,
    W: Write,
{
    let result = drive(question, default, keys, out);

    if result.is_err() {
        let _ = queue!(out, Print("\r\n"), cursor::Show);
        let _ = out.flush();
    }

    result
}

fn drive<K, W>(question: &str, default: bool, keys: &mut K, out: &mut W) -> Result<ConfirmOutcome>
where
    K: KeySource + ?Sized,
    W: Write,
{
    let mut state = ConfirmState::new(default);

    queue!(
        out,
        Print(format!("{} {}\r\n", "?".green().bold(), question.bold()))
    )?;
    render_options(out, state.selected())?;
    queue!(out, cursor::Hide)?;
    out.flush()?;

    loop {
        let key = keys.next_key()?;

        match state.handle(key) {
            Transition::Ignored => {}
            Transition::Changed => render_options(out, state.selected())?,
            Transition::Resolved(answer) => {
                queue!(out, Print("\r\n"), cursor::Show)?;
                out.flush()?;
                return Ok(ConfirmOutcome::Answered(answer));
            }
            Transition::Interrupted => {
                queue!(out, Print("\r\n"), cursor::Show)?;
                out.flush()?;
                return Ok(ConfirmOutcome::Interrupted);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::collections::VecDeque;

    const CLEAR_LINE: &str = "\x1b[K";
    const HIDE_CURSOR: &str = "\x1b[?25l";
    const SHOW_CURSOR: &str = "\x1b[?25h";

    struct Scripted(VecDeque<Key>);

    impl Scripted {
        fn new(keys: &[Key]) -> Self {
            Self(keys.iter().copied().collect())
        }
    }

    impl KeySource for Scripted {
        fn next_key(&mut self) -> Result<Key> {
            self.0.pop_front().context("key script exhausted")
        }
    }

    fn run(keys: &[Key]) -> (Result<ConfirmOutcome>, String) {
        let mut source = Scripted::new(keys);
        let mut out = Vec::new();
        let result = run_prompt("Continue?", true, &mut source, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_n_then_enter_resolves_false() {
        let (result, _) = run(&[Key::Char('n'), Key::Enter]);
        assert_eq!(result.unwrap(), ConfirmOutcome::Answered(false));
    }

    #[test]
    fn test_left_arrow_flips_default() {
        let (result, _) = run(&[Key::Left, Key::Enter]);
        assert_eq!(result.unwrap(), ConfirmOutcome::Answered(false));
    }

    #[test]
    fn test_enter_alone_keeps_default() {
        let (result, _) = run(&[Key::Enter]);
        assert_eq!(result.unwrap(), ConfirmOutcome::Answered(true));
    }

    #[test]
    fn test_letters_are_case_insensitive() {
        let (result, _) = run(&[Key::Char('N'), Key::Char('Y'), Key::Enter]);
        assert_eq!(result.unwrap(), ConfirmOutcome::Answered(true));
    }

    #[test]
    fn test_arrows_toggle_back_and_forth() {
        let (result, _) = run(&[Key::Right, Key::Left, Key::Right, Key::Enter]);
        assert_eq!(result.unwrap(), ConfirmOutcome::Answered(false));
    }

    #[test]
    fn test_interrupt() {
        let (result, output) = run(&[Key::Char('n'), Key::Interrupt]);
        assert_eq!(result.unwrap(), ConfirmOutcome::Interrupted);
        assert!(output.ends_with(SHOW_CURSOR));
    }

    #[test]
    fn test_unknown_keys_do_not_rerender() {
        let (result, output) = run(&[Key::Other, Key::Char('x'), Key::Enter]);
        assert_eq!(result.unwrap(), ConfirmOutcome::Answered(true));
        assert_eq!(output.matches(CLEAR_LINE).count(), 1);
    }

    #[test]
    fn test_each_change_rerenders_in_place() {
        let (_, output) = run(&[Key::Left, Key::Char('y'), Key::Enter]);
        // initial render + two changes
        assert_eq!(output.matches(CLEAR_LINE).count(), 3);
        // the option line is overwritten, never appended
        assert_eq!(output.matches("\r\n").count(), 2);
    }

    #[test]
    fn test_cursor_hidden_then_restored() {
        let (_, output) = run(&[Key::Enter]);
        let hide = output.find(HIDE_CURSOR).expect("cursor hidden");
        let show = output.rfind(SHOW_CURSOR).expect("cursor shown");
        assert!(hide < show);
        assert!(output.contains("Continue?"));
    }

    #[test]
    fn test_key_source_error_restores_cursor() {
        let (result, output) = run(&[Key::Left]);
        assert!(result.is_err());
        assert!(output.ends_with(SHOW_CURSOR));
    }

    #[test]
    fn test_state_ignores_other_keys() {
        let mut state = ConfirmState::new(false);
        assert_eq!(state.handle(Key::Other), Transition::Ignored);
        assert_eq!(state.handle(Key::Char('q')), Transition::Ignored);
        assert!(!state.selected());
        assert_eq!(state.handle(Key::Char('y')), Transition::Changed);
        assert_eq!(state.handle(Key::Enter), Transition::Resolved(true));
    }
}
