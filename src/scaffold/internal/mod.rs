//! Internal implementation for the scaffold pipeline

pub mod configs;
pub mod gitignore;
pub mod manifest;
pub mod rules;
pub mod splice;
pub mod theme;

use anyhow::{Context, Result};

use super::Step;
use crate::logging::log_debug;

/// Run one pipeline step, labelling any failure with the step's name
pub fn run_step<T>(step: Step, action: impl FnOnce() -> Result<T>) -> Result<T> {
    log_debug("scaffold", &format!("step: {step}"));
    action().with_context(|| format!("Step '{step}' failed"))
}
