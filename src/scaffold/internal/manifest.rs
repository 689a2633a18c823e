//! package.json dev-dependency merge

use anyhow::{Context, Result};
use serde_json::{json, Map, Value};
use std::fs;
use std::path::Path;

use crate::paths;

/// Dev dependencies injected into package.json, overwriting same-named entries
pub const TAILWIND_DEV_DEPENDENCIES: [(&str, &str); 5] = [
    ("vitepress", "^1.6.3"),
    ("vue", "^3.3.4"),
    ("@tailwindcss/postcss", "^4.1.3"),
    ("@tailwindcss/vite", "^4.1.3"),
    ("tailwindcss", "^4.1.3"),
];

/// Merge the Tailwind dev dependencies into `<root>/package.json`.
///
/// Creates a minimal manifest first when none exists.
pub fn update_manifest(root: &Path, project_name: &str) -> Result<()> {
    let manifest_path = paths::package_json(root);

    let mut manifest = if manifest_path.exists() {
        let content =
            fs::read_to_string(&manifest_path).context("Failed to read package.json")?;
        serde_json::from_str(&content).context("Failed to parse package.json")?
    } else {
        println!("  ⚠️  No package.json found, creating a minimal one");
        default_manifest(project_name)
    };

    merge_dev_dependencies(&mut manifest)?;

    let mut content =
        serde_json::to_string_pretty(&manifest).context("Failed to serialize package.json")?;
    content.push('\n');
    fs::write(&manifest_path, content).context("Failed to write package.json")?;

    println!("  ✓ Added Tailwind CSS dev dependencies to package.json");
    Ok(())
}

/// Insert [`TAILWIND_DEV_DEPENDENCIES`] into `devDependencies`, keeping
/// every other key and its position.
pub fn merge_dev_dependencies(manifest: &mut Value) -> Result<()> {
    let root = manifest
        .as_object_mut()
        .context("package.json must contain a JSON object")?;

    let dev_dependencies = root
        .entry("devDependencies")
        .or_insert_with(|| Value::Object(Map::new()));
    if dev_dependencies.is_null() {
        *dev_dependencies = Value::Object(Map::new());
    }

    let dev_dependencies = dev_dependencies
        .as_object_mut()
        .context("devDependencies in package.json must be an object")?;

    for (name, version) in TAILWIND_DEV_DEPENDENCIES {
        dev_dependencies.insert(name.to_string(), Value::String(version.to_string()));
    }

    Ok(())
}

/// npm package names are lowercase and contain no spaces
fn npm_package_name(project_name: &str) -> String {
    project_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

fn default_manifest(project_name: &str) -> Value {
    json!({
        "name": npm_package_name(project_name),
        "private": true,
        "type": "module",
        "scripts": {
            "docs:dev": "vitepress dev",
            "docs:build": "vitepress build",
            "docs:preview": "vitepress preview"
        }
    })
}
