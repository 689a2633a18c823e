//! Cursor editor rules for Tailwind in VitePress

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::paths;

const TAILWIND_RULES: &str = r#"---
description: Tailwind CSS v4 conventions for this VitePress site
globs: ["docs/**/*.md", ".vitepress/**/*.{vue,ts,js,css}"]
alwaysApply: false
---

# Tailwind CSS in VitePress

## Setup

- Tailwind CSS v4 is loaded through `@tailwindcss/vite` in `.vitepress/config`.
- The entry stylesheet is `.vitepress/theme/tailwind.css` (`@import "tailwindcss";`).
- It is imported from `.vitepress/theme/index.{ts,js}`; keep that import.
- There is no `@tailwind base/components/utilities` in v4; do not add them.

## Styling

- Prefer utility classes in Vue components and Markdown HTML blocks.
- Put design tokens in `tailwind.css` with `@theme { ... }`, not in ad-hoc CSS.
- Use VitePress CSS variables (`var(--vp-c-brand-1)` etc.) for colors that
  must follow the site theme and dark mode.
- Dark mode: VitePress toggles the `dark` class on `<html>`; use
  `@custom-variant dark (&:where(.dark, .dark *));` and `dark:` utilities.

## Do not

- Do not restyle `.vp-doc` content globally; `postcss.config.mjs` isolates
  VitePress base styles and Tailwind preflight must not leak into them.
- Do not edit files under `.vitepress/cache` or `.vitepress/dist`.
"#;

/// Write `.cursor/rules/tailwind.mdc`, creating the directories as needed
pub fn write_editor_rules(root: &Path) -> Result<()> {
    let rules_dir = paths::rules::dir(root);
    fs::create_dir_all(&rules_dir).context("Failed to create .cursor/rules directory")?;

    fs::write(paths::rules::tailwind_rules(root), TAILWIND_RULES)
        .context("Failed to write .cursor/rules/tailwind.mdc")?;

    println!("  ✓ Wrote .cursor/rules/tailwind.mdc");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_rules_with_front_matter() -> Result<()> {
        let temp = TempDir::new()?;

        write_editor_rules(temp.path())?;

        let content = fs::read_to_string(paths::rules::tailwind_rules(temp.path()))?;
        assert!(content.starts_with("---\ndescription:"));
        assert!(content.contains("@tailwindcss/vite"));
        Ok(())
    }
}
