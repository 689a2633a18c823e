//! Create a VitePress + Tailwind CSS project
//!
//! Thin command layer: prints the banner and the closing summary, the
//! pipeline itself lives in `create_vitepress_tailwind::scaffold`.

use anyhow::Result;

use create_vitepress_tailwind::{Outcome, Scaffold, ScaffoldConfig, VitepressInit};

/// Execute the init command
///
/// # Process
///
/// 1. **Directory**: creates `<cwd>/<name>` if needed
/// 2. **VitePress**: runs `npx vitepress init` inside it
/// 3. **Tailwind**: package.json, configs, theme CSS and import
/// 4. **Editor rules**: asks (or obeys `--yes`/`--no-rules`)
///
/// # Errors
///
/// Returns the first failing step. Files written before it are left in place.
pub fn execute(config: ScaffoldConfig) -> Result<Outcome> {
    println!("🚀 Creating a VitePress project with Tailwind CSS...\n");

    let project_name = config.project_name.clone();
    let initializer = VitepressInit;
    let scaffold = Scaffold::new(config, &initializer);

    let outcome = scaffold.create_project()?;

    if let Outcome::Completed { rules_written } = outcome {
        print_next_steps(&project_name, rules_written);
    }

    Ok(outcome)
}

fn print_next_steps(project_name: &str, rules_written: bool) {
    println!("\n✅ Project '{project_name}' created successfully!");
    if rules_written {
        println!("   Cursor rules: .cursor/rules/tailwind.mdc");
    }

    println!("\n📝 Next steps:");
    println!("1. Enter the project directory: cd {project_name}");
    println!("2. Install dependencies: npm install");
    println!("3. Start the dev server: npm run docs:dev");
    println!("4. Open http://localhost:5173 in your browser");
}
