use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::process::ExitCode;

use create_vitepress_tailwind::config::{project_name_from_args, RulesPolicy, ScaffoldConfig};
use create_vitepress_tailwind::logging;
use create_vitepress_tailwind::Outcome;

mod commands;

/// Exit status after Ctrl-C, as shells report SIGINT
const INTERRUPTED_EXIT: u8 = 130;

#[derive(Parser)]
#[command(
    name = "create-vitepress-tailwind",
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "Create a VitePress site wired to Tailwind CSS",
    long_about = None,
    override_usage = "create-vitepress-tailwind [init] <PROJECT_NAME>"
)]
struct Cli {
    /// Project name, optionally preceded by `init`
    #[arg(value_name = "PROJECT_NAME")]
    args: Vec<String>,

    /// Add Cursor rules for Tailwind without asking
    #[arg(short, long, conflicts_with = "no_rules")]
    yes: bool,

    /// Never add Cursor rules
    #[arg(long)]
    no_rules: bool,

    /// Print debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::set_verbose(cli.verbose);

    let Some(project_name) = project_name_from_args(&cli.args) else {
        eprintln!("❌ Please provide a project name\n");
        eprintln!("{}", Cli::command().render_help());
        return ExitCode::FAILURE;
    };

    match run(cli, project_name) {
        Ok(Outcome::Interrupted) => ExitCode::from(INTERRUPTED_EXIT),
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ Failed to create project: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, project_name: String) -> Result<Outcome> {
    let base_dir = std::env::current_dir().context("Failed to read current directory")?;

    let config = ScaffoldConfig {
        project_name,
        base_dir,
        rules: RulesPolicy::from_flags(cli.yes, cli.no_rules),
    };

    commands::init::execute(config)
}
