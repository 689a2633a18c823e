//! Tailwind, PostCSS and VitePress configuration files

use anyhow::{Context, Result};
use serde_json::json;
use std::fs;
use std::path::Path;

use crate::paths;

const POSTCSS_CONFIG: &str = r#"import { postcssIsolateStyles } from 'vitepress'

export default {
    plugins: [
        postcssIsolateStyles({
            includeFiles: [/vp-doc\.css/, /base\.css/]
        })
    ]
}
"#;

const VITEPRESS_CONFIG: &str = r#"import { defineConfig } from "vitepress";
import tailwindcss from "@tailwindcss/vite";

// https://vitepress.dev/reference/site-config
export default defineConfig({
  vite: {
    plugins: [tailwindcss()],
  },
});
"#;

const VITE_PLUGIN_PACKAGE: &str = "@tailwindcss/vite";
const VITE_PLUGIN_IMPORT: &str = r#"import tailwindcss from "@tailwindcss/vite";"#;
const VITE_PLUGIN_ENTRY: &str = "\n  vite: {\n    plugins: [tailwindcss()],\n  },";
const DEFINE_CONFIG_CALL: &str = "defineConfig({";

/// What to do with an existing VitePress config
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigEdit {
    /// Already wired to Tailwind
    Unchanged,
    /// Import and `vite` entry spliced into the existing config
    Spliced(String),
    /// No safe splice point; replace with the full template
    Replaced(String),
}

/// Write `tailwind.config.*` (existing extension kept, `.js` otherwise)
pub fn write_tailwind_config(root: &Path) -> Result<()> {
    let config_path = paths::resolve_config_path(root, paths::TAILWIND_CONFIG_BASE);

    let config = json!({
        "content": [
            "./docs/**/*.{vue,js,ts,jsx,tsx,md}",
            "./.vitepress/**/*.{vue,js,ts,jsx,tsx,md}"
        ],
        "theme": {
            "extend": {}
        },
        "plugins": []
    });
    let body =
        serde_json::to_string_pretty(&config).context("Failed to serialize Tailwind config")?;

    fs::write(&config_path, format!("export default {body}\n"))
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("  ✓ Wrote {}", display_relative(root, &config_path));
    Ok(())
}

/// Write `postcss.config.mjs`
pub fn write_postcss_config(root: &Path) -> Result<()> {
    let config_path = paths::postcss_config(root);
    fs::write(&config_path, POSTCSS_CONFIG).context("Failed to write postcss.config.mjs")?;

    println!("  ✓ Wrote postcss.config.mjs");
    Ok(())
}

/// Wire the Tailwind Vite plugin into `.vitepress/config.*`.
///
/// A missing config is not an error: the step is skipped with a warning.
pub fn update_vitepress_config(root: &Path) -> Result<()> {
    let Some(config_path) = paths::find_existing_config(root, paths::VITEPRESS_CONFIG_BASE) else {
        println!(
            "  ⚠️  No {}.{{mts,mjs,ts,js}} found, skipping VitePress config update",
            paths::VITEPRESS_CONFIG_BASE
        );
        return Ok(());
    };

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    let relative = display_relative(root, &config_path);

    match wire_vite_plugin(&content) {
        ConfigEdit::Unchanged => {
            println!("  ✓ {relative} already uses {VITE_PLUGIN_PACKAGE}");
        }
        ConfigEdit::Spliced(updated) => {
            fs::write(&config_path, updated)
                .with_context(|| format!("Failed to write {}", config_path.display()))?;
            println!("  ✓ Added Tailwind Vite plugin to {relative}");
        }
        ConfigEdit::Replaced(updated) => {
            fs::write(&config_path, updated)
                .with_context(|| format!("Failed to write {}", config_path.display()))?;
            println!("  ✓ Rewrote {relative} with Tailwind Vite plugin");
        }
    }

    Ok(())
}

/// Decide how to add the Tailwind Vite plugin to a VitePress config.
///
/// Splicing needs a `defineConfig({` call and no existing `vite:` key;
/// anything else gets the full template.
pub fn wire_vite_plugin(content: &str) -> ConfigEdit {
    if content.contains(VITE_PLUGIN_PACKAGE) {
        return ConfigEdit::Unchanged;
    }

    let Some(call_at) = content.find(DEFINE_CONFIG_CALL) else {
        return ConfigEdit::Replaced(VITEPRESS_CONFIG.to_string());
    };
    if content.contains("vite:") {
        return ConfigEdit::Replaced(VITEPRESS_CONFIG.to_string());
    }

    let insert_at = call_at + DEFINE_CONFIG_CALL.len();
    let mut updated = String::with_capacity(content.len() + VITE_PLUGIN_ENTRY.len());
    updated.push_str(&content[..insert_at]);
    updated.push_str(VITE_PLUGIN_ENTRY);
    updated.push_str(&content[insert_at..]);

    let updated = super::splice::insert_after_anchor(
        &updated,
        |line| {
            line.starts_with("import")
                && (line.contains("'vitepress'") || line.contains("\"vitepress\""))
        },
        VITE_PLUGIN_IMPORT,
    );

    ConfigEdit::Spliced(updated)
}

fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
