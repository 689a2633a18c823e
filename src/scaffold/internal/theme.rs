//! Theme directory: tailwind.css entry point and index import

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::splice::insert_after_anchor;
use crate::paths;

const TAILWIND_CSS: &str = "@import \"tailwindcss\";\n";

const STYLE_IMPORTS: [&str; 2] = ["import './style.css'", "import \"./style.css\""];
const TAILWIND_IMPORTS: [&str; 2] = ["import './tailwind.css'", "import \"./tailwind.css\""];

/// Line spliced into the theme index
pub const TAILWIND_IMPORT: &str = "import './tailwind.css'";

const DEFAULT_THEME_INDEX: &str = r#"import DefaultTheme from 'vitepress/theme'
import './tailwind.css'

export default DefaultTheme
"#;

/// What happened to the theme index
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexUpdate {
    Spliced(PathBuf),
    AlreadyImported(PathBuf),
    Created(PathBuf),
}

pub fn create_theme_dir(root: &Path) -> Result<()> {
    let theme_dir = paths::theme::dir(root);
    if !theme_dir.exists() {
        fs::create_dir_all(&theme_dir).context("Failed to create .vitepress/theme directory")?;
        println!("  ✓ Created .vitepress/theme");
    }
    Ok(())
}

pub fn write_tailwind_css(root: &Path) -> Result<()> {
    fs::write(paths::theme::tailwind_css(root), TAILWIND_CSS)
        .context("Failed to write .vitepress/theme/tailwind.css")?;
    println!("  ✓ Wrote .vitepress/theme/tailwind.css");
    Ok(())
}

/// Make the theme index import tailwind.css.
///
/// Uses `index.ts` when present, else `index.js`; creates `index.js` when
/// neither exists.
pub fn update_theme_index(root: &Path) -> Result<IndexUpdate> {
    let index_ts = paths::theme::index_ts(root);
    let index_path = if index_ts.exists() {
        index_ts
    } else {
        paths::theme::index_js(root)
    };

    if !index_path.exists() {
        fs::write(&index_path, DEFAULT_THEME_INDEX)
            .with_context(|| format!("Failed to create {}", index_path.display()))?;
        println!("  ✓ Created .vitepress/theme/index.js");
        return Ok(IndexUpdate::Created(index_path));
    }

    let content = fs::read_to_string(&index_path)
        .with_context(|| format!("Failed to read {}", index_path.display()))?;

    match splice_tailwind_import(&content) {
        Some(updated) => {
            fs::write(&index_path, updated)
                .with_context(|| format!("Failed to write {}", index_path.display()))?;
            println!("  ✓ Imported tailwind.css in the theme index");
            Ok(IndexUpdate::Spliced(index_path))
        }
        None => {
            println!("  ✓ Theme index already imports tailwind.css");
            Ok(IndexUpdate::AlreadyImported(index_path))
        }
    }
}

/// Splice [`TAILWIND_IMPORT`] after the `./style.css` import, or at the top.
///
/// Returns `None` when the file already imports tailwind.css.
pub fn splice_tailwind_import(content: &str) -> Option<String> {
    let already_imported = content
        .lines()
        .any(|line| starts_with_any(line.trim(), &TAILWIND_IMPORTS));
    if already_imported {
        return None;
    }

    Some(insert_after_anchor(
        content,
        |line| starts_with_any(line, &STYLE_IMPORTS),
        TAILWIND_IMPORT,
    ))
}

fn starts_with_any(line: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| line.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const GENERATED_INDEX: &str = r#"// https://vitepress.dev/guide/custom-theme
import { h } from 'vue'
import type { Theme } from 'vitepress'
import DefaultTheme from 'vitepress/theme'
import './style.css'

export default {
  extends: DefaultTheme,
} satisfies Theme
"#;

    #[test]
    fn test_splice_after_style_import() {
        let updated = splice_tailwind_import(GENERATED_INDEX).unwrap();

        assert!(updated.contains("import './style.css'\nimport './tailwind.css'\n"));
        assert_eq!(updated.matches(TAILWIND_IMPORT).count(), 1);
        assert_eq!(updated.matches("import './style.css'").count(), 1);
    }

    #[test]
    fn test_splice_prepends_without_style_import() {
        let content = "import DefaultTheme from 'vitepress/theme'\n\nexport default DefaultTheme\n";
        let updated = splice_tailwind_import(content).unwrap();

        assert_eq!(updated, format!("{TAILWIND_IMPORT}\n{content}"));
    }

    #[test]
    fn test_splice_is_idempotent() {
        let once = splice_tailwind_import(GENERATED_INDEX).unwrap();
        assert!(splice_tailwind_import(&once).is_none());

        let prepended = splice_tailwind_import("export default {}\n").unwrap();
        assert!(splice_tailwind_import(&prepended).is_none());
    }

    #[test]
    fn test_splice_keeps_semicolon_style() {
        let updated = splice_tailwind_import("import './style.css';\nexport default {}\n").unwrap();
        assert!(updated.starts_with("import './style.css';\nimport './tailwind.css'\n"));
    }

    #[test]
    fn test_splice_keeps_crlf_line_endings() {
        let content = "import './style.css'\r\nexport default {}\r\n";
        let updated = splice_tailwind_import(content).unwrap();
        assert_eq!(
            updated,
            "import './style.css'\r\nimport './tailwind.css'\r\nexport default {}\r\n"
        );
    }

    #[test]
    fn test_update_prefers_index_ts() -> Result<()> {
        let temp = TempDir::new()?;
        create_theme_dir(temp.path())?;
        fs::write(paths::theme::index_ts(temp.path()), GENERATED_INDEX)?;
        fs::write(paths::theme::index_js(temp.path()), "export default {}\n")?;

        let update = update_theme_index(temp.path())?;

        assert_eq!(update, IndexUpdate::Spliced(paths::theme::index_ts(temp.path())));
        let js = fs::read_to_string(paths::theme::index_js(temp.path()))?;
        assert_eq!(js, "export default {}\n");
        Ok(())
    }

    #[test]
    fn test_update_creates_missing_index() -> Result<()> {
        let temp = TempDir::new()?;
        create_theme_dir(temp.path())?;

        let update = update_theme_index(temp.path())?;

        let index_js = paths::theme::index_js(temp.path());
        assert_eq!(update, IndexUpdate::Created(index_js.clone()));
        let content = fs::read_to_string(index_js)?;
        assert!(content.contains(TAILWIND_IMPORT));
        assert!(content.contains("import DefaultTheme from 'vitepress/theme'"));
        assert!(content.contains("export default DefaultTheme"));

        // second run leaves it alone
        assert!(matches!(
            update_theme_index(temp.path())?,
            IndexUpdate::AlreadyImported(_)
        ));
        Ok(())
    }

    #[test]
    fn test_tailwind_css_entry() -> Result<()> {
        let temp = TempDir::new()?;
        create_theme_dir(temp.path())?;

        write_tailwind_css(temp.path())?;

        let css = fs::read_to_string(paths::theme::tailwind_css(temp.path()))?;
        assert_eq!(css.trim(), "@import \"tailwindcss\";");
        Ok(())
    }
}
