//! Scaffold a VitePress + Tailwind CSS project
//!
//! This module follows the dependable-rust pattern:
//! - Public interface (this file): the `Scaffold` driver and its outcome types
//! - Internal implementation: one submodule per group of generated files
//!
//! # Process
//!
//! 1. Create the project directory
//! 2. Run the external initializer inside it
//! 3. Stop early (successfully) if `.vitepress/` was not produced
//! 4. Rewrite/generate the Tailwind wiring, one named [`Step`] at a time
//! 5. Optionally write editor rules
//!
//! The first failing step aborts the run. Files written by earlier steps
//! stay on disk.

mod internal;

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{RulesPolicy, ScaffoldConfig};
use crate::initializer::{self, Initializer};
use crate::paths;
use crate::prompt::{self, ConfirmOutcome};

pub use internal::configs::{wire_vite_plugin, ConfigEdit};
pub use internal::manifest::{merge_dev_dependencies, TAILWIND_DEV_DEPENDENCIES};
pub use internal::splice::insert_after_anchor;
pub use internal::theme::{splice_tailwind_import, IndexUpdate};

use internal::run_step;

/// Question asked before writing editor rules
pub const RULES_QUESTION: &str = "Add Cursor rules for Tailwind CSS?";

/// One named unit of work in the scaffold pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    CreateDirectory,
    RunInitializer,
    UpdateManifest,
    WriteTailwindConfig,
    WritePostcssConfig,
    UpdateVitepressConfig,
    CreateThemeDirectory,
    WriteTailwindCss,
    SpliceThemeImport,
    WriteGitignore,
    WriteEditorRules,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            Step::CreateDirectory => "create project directory",
            Step::RunInitializer => "run VitePress initializer",
            Step::UpdateManifest => "update package.json",
            Step::WriteTailwindConfig => "write Tailwind config",
            Step::WritePostcssConfig => "write PostCSS config",
            Step::UpdateVitepressConfig => "update VitePress config",
            Step::CreateThemeDirectory => "create theme directory",
            Step::WriteTailwindCss => "write tailwind.css",
            Step::SpliceThemeImport => "import tailwind.css in theme",
            Step::WriteGitignore => "write .gitignore",
            Step::WriteEditorRules => "write editor rules",
        };
        f.write_str(description)
    }
}

/// How a scaffold run ended, when it did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every step ran
    Completed { rules_written: bool },
    /// The initializer left no `.vitepress/` behind; nothing was rewritten
    MissingMarker,
    /// The editor-rules prompt was abandoned with Ctrl-C
    Interrupted,
}

/// Scaffold driver for one project
pub struct Scaffold<'a> {
    config: ScaffoldConfig,
    initializer: &'a dyn Initializer,
}

impl<'a> Scaffold<'a> {
    pub fn new(config: ScaffoldConfig, initializer: &'a dyn Initializer) -> Self {
        Self {
            config,
            initializer,
        }
    }

    pub fn project_root(&self) -> PathBuf {
        self.config.project_root()
    }

    /// Run the whole pipeline.
    ///
    /// # Errors
    ///
    /// Returns the first step failure, labelled with the failing [`Step`]:
    /// - the initializer cannot be launched
    /// - `package.json` is malformed
    /// - any read or write fails
    pub fn create_project(&self) -> Result<Outcome> {
        let root = self.project_root();
        let name = &self.config.project_name;

        run_step(Step::CreateDirectory, || create_project_dir(&root))?;

        println!("📦 Initializing VitePress...");
        run_step(Step::RunInitializer, || {
            initializer::ensure_available(self.initializer)?;
            self.initializer.run(&root)
        })?;

        if !paths::marker_dir(&root).is_dir() {
            println!(
                "\n⚠️  '{}' did not create {}/ in {}",
                self.initializer.name(),
                paths::MARKER_DIR,
                root.display()
            );
            println!("   Nothing else to do. Re-run once VitePress is initialized.");
            return Ok(Outcome::MissingMarker);
        }

        println!("\n📦 Updating package.json...");
        run_step(Step::UpdateManifest, || {
            internal::manifest::update_manifest(&root, name)
        })?;

        println!("⚙️  Configuring Tailwind CSS...");
        run_step(Step::WriteTailwindConfig, || {
            internal::configs::write_tailwind_config(&root)
        })?;
        run_step(Step::WritePostcssConfig, || {
            internal::configs::write_postcss_config(&root)
        })?;

        println!("⚙️  Configuring VitePress...");
        run_step(Step::UpdateVitepressConfig, || {
            internal::configs::update_vitepress_config(&root)
        })?;

        run_step(Step::CreateThemeDirectory, || {
            internal::theme::create_theme_dir(&root)
        })?;
        run_step(Step::WriteTailwindCss, || {
            internal::theme::write_tailwind_css(&root)
        })?;
        run_step(Step::SpliceThemeImport, || {
            internal::theme::update_theme_index(&root)
        })?;

        run_step(Step::WriteGitignore, || {
            internal::gitignore::ensure_gitignore(&root)
        })?;

        let write_rules = match self.config.rules {
            RulesPolicy::Always => true,
            RulesPolicy::Never => false,
            RulesPolicy::Ask => {
                println!();
                match prompt::confirm(RULES_QUESTION, true)? {
                    ConfirmOutcome::Answered(answer) => answer,
                    ConfirmOutcome::Interrupted => return Ok(Outcome::Interrupted),
                }
            }
        };

        if write_rules {
            run_step(Step::WriteEditorRules, || {
                internal::rules::write_editor_rules(&root)
            })?;
        }

        Ok(Outcome::Completed {
            rules_written: write_rules,
        })
    }
}

fn create_project_dir(root: &Path) -> Result<()> {
    if root.exists() {
        println!("📁 Using existing directory {}", root.display());
        return Ok(());
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory {}", root.display()))?;
    println!("📁 Created directory {}", root.display());
    Ok(())
}
