//! .gitignore for the generated site

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::paths;

/// Entries every generated project must ignore
const REQUIRED_ENTRIES: [&str; 5] = [
    "node_modules/",
    ".vitepress/cache",
    ".vitepress/dist",
    ".DS_Store",
    "*.log",
];

const DEFAULT_GITIGNORE: &str = r#"# Dependencies
node_modules/

# VitePress build output and cache
.vitepress/cache
.vitepress/dist

# Environment
.env
.env.*

# Editor and OS files
.idea/
*.swp
.DS_Store

# Logs
*.log
npm-debug.log*
"#;

/// Ensure a .gitignore exists and covers [`REQUIRED_ENTRIES`]
pub fn ensure_gitignore(root: &Path) -> Result<()> {
    let gitignore_path = paths::gitignore(root);

    if !gitignore_path.exists() {
        fs::write(&gitignore_path, DEFAULT_GITIGNORE).context("Failed to create .gitignore")?;
        println!("  ✓ Created .gitignore");
        return Ok(());
    }

    let content = fs::read_to_string(&gitignore_path).context("Failed to read .gitignore")?;
    let (updated, added) = with_required_entries(&content);

    if !added.is_empty() {
        fs::write(&gitignore_path, updated).context("Failed to update .gitignore")?;
        println!("  ✓ Added to .gitignore: {}", added.join(", "));
    }

    Ok(())
}

/// Append any missing required entry; returns the new content and what was added.
fn with_required_entries(content: &str) -> (String, Vec<&'static str>) {
    let mut added = Vec::new();
    let mut updated = content.to_string();

    for pattern in REQUIRED_ENTRIES {
        // "dir/" and "dir" ignore the same thing
        let present = content.lines().any(|line| {
            let line = line.trim();
            line == pattern || line.trim_end_matches('/') == pattern.trim_end_matches('/')
        });
        if present {
            continue;
        }

        if !updated.is_empty() && !updated.ends_with('\n') {
            updated.push('\n');
        }
        if added.is_empty() {
            updated.push_str("\n# Added by create-vitepress-tailwind\n");
        }
        updated.push_str(pattern);
        updated.push('\n');

        added.push(pattern);
    }

    (updated, added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_default() -> Result<()> {
        let temp = TempDir::new()?;

        ensure_gitignore(temp.path())?;

        let content = fs::read_to_string(paths::gitignore(temp.path()))?;
        let (_, missing) = with_required_entries(&content);
        assert!(missing.is_empty(), "default is missing {missing:?}");
        Ok(())
    }

    #[test]
    fn test_appends_missing_entries_once() -> Result<()> {
        let temp = TempDir::new()?;
        let gitignore_path = paths::gitignore(temp.path());
        fs::write(&gitignore_path, "node_modules\ncoverage/")?;

        ensure_gitignore(temp.path())?;
        let first = fs::read_to_string(&gitignore_path)?;
        ensure_gitignore(temp.path())?;
        let second = fs::read_to_string(&gitignore_path)?;

        assert_eq!(first, second);
        assert!(first.starts_with("node_modules\ncoverage/\n"));
        assert!(first.contains(".vitepress/cache\n"));
        assert_eq!(first.matches("node_modules").count(), 1);
        assert_eq!(first.matches("# Added by create-vitepress-tailwind").count(), 1);
        Ok(())
    }
}
