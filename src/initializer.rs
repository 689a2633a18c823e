//! External site initializer integration

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::logging::log_debug;

/// Trait for the external tool that materializes the base project
pub trait Initializer {
    /// Human-readable command, used in messages
    fn name(&self) -> &str;

    /// Check if the tool can be launched at all
    fn is_available(&self) -> bool;

    /// Run the tool with `project_path` as its working directory.
    ///
    /// Blocks until the tool exits. The tool's exit status is not treated
    /// as a failure; callers check for the marker directory instead.
    fn run(&self, project_path: &Path) -> Result<()>;
}

/// `npx vitepress init`, run interactively with inherited stdio
pub struct VitepressInit;

impl VitepressInit {
    const PROGRAM: &'static str = "npx";
    const ARGS: [&'static str; 2] = ["vitepress", "init"];

    /// Full path of `npx` as found on PATH (`npx.cmd` on Windows)
    fn resolve_program() -> Result<PathBuf> {
        which::which(Self::PROGRAM)
            .with_context(|| format!("'{}' not found on PATH", Self::PROGRAM))
    }

    /// Command launching `program` with the initializer arguments inside `project_path`
    fn command(program: &Path, project_path: &Path) -> Command {
        let mut command = Command::new(program);
        command.args(Self::ARGS).current_dir(project_path);
        command
    }
}

impl Initializer for VitepressInit {
    fn name(&self) -> &str {
        "npx vitepress init"
    }

    fn is_available(&self) -> bool {
        Self::resolve_program().is_ok()
    }

    fn run(&self, project_path: &Path) -> Result<()> {
        let program = Self::resolve_program()?;
        log_debug("initializer", &format!("launching {}", program.display()));

        let status = Self::command(&program, project_path)
            .status()
            .with_context(|| format!("Failed to launch '{}'", self.name()))?;

        log_debug("initializer", &format!("'{}' exited with {status}", self.name()));
        Ok(())
    }
}

/// Fail early with install hints when the initializer cannot be launched
pub fn ensure_available(initializer: &dyn Initializer) -> Result<()> {
    if initializer.is_available() {
        return Ok(());
    }

    eprintln!("Error: '{}' needs Node.js with npx on PATH.", initializer.name());
    eprintln!();
    eprintln!("Please install Node.js (which ships npx):");
    eprintln!("  • macOS: brew install node");
    eprintln!("  • Linux: See https://nodejs.org/en/download/package-manager");
    eprintln!("  • Windows: winget install OpenJS.NodeJS");
    anyhow::bail!("npx not found")
}
