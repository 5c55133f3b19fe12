//! `TerminalReporter`: presentation-side implementation of `ProgressReporter`.
//!
//! Each `step()` starts a spinner on a TTY; the next event settles it.
//! Without a TTY, steps are printed as plain `→` lines.

use std::cell::RefCell;

use indicatif::ProgressBar;
use owo_colors::OwoColorize as _;

use crate::application::ports::ProgressReporter;
use crate::output::{OutputContext, progress};

/// Terminal progress reporter that wraps an `OutputContext`.
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
    active: RefCell<Option<(ProgressBar, String)>>,
}

impl<'a> TerminalReporter<'a> {
    /// Create a new `TerminalReporter` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self {
            ctx,
            active: RefCell::new(None),
        }
    }

    /// Close any running spinner, marking its step as done.
    pub fn finish(&self) {
        if let Some((pb, msg)) = self.active.borrow_mut().take() {
            progress::finish_ok(&pb, settled(&msg));
        }
    }

    fn clear(&self) {
        if let Some((pb, _)) = self.active.borrow_mut().take() {
            progress::clear(&pb);
        }
    }
}

/// Text of a completed step: the in-progress `...` suffix is dropped.
pub(super) fn settled(step: &str) -> &str {
    step.trim_end().trim_end_matches("...").trim_end()
}

impl ProgressReporter for TerminalReporter<'_> {
    fn step(&self, message: &str) {
        if self.ctx.quiet {
            return;
        }
        self.finish();
        if self.ctx.show_progress() {
            *self.active.borrow_mut() = Some((progress::spinner(message), message.to_string()));
        } else {
            println!("  {} {message}", "→".style(self.ctx.styles.info));
        }
    }

    fn success(&self, message: &str) {
        self.clear();
        self.ctx.success(message);
    }

    fn warn(&self, message: &str) {
        self.clear();
        self.ctx.warn(message);
    }
}

impl Drop for TerminalReporter<'_> {
    fn drop(&mut self) {
        self.clear();
    }
}
