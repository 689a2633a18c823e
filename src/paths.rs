//! Single source of truth for the generated project's filesystem layout.
//!
//! This module defines WHERE files live. It does no writing and holds no
//! templates; the only I/O is the existence checks the config resolver needs.
//!
//! ```text
//! <project>/
//! ├── package.json
//! ├── tailwind.config.{mts,mjs,ts,js}
//! ├── postcss.config.mjs
//! ├── .gitignore
//! ├── .vitepress/               # marker: created by `vitepress init`
//! │   ├── config.{mts,mjs,ts,js}
//! │   └── theme/
//! │       ├── index.{ts,js}
//! │       └── tailwind.css
//! └── .cursor/rules/tailwind.mdc  # optional
//! ```

use std::path::{Path, PathBuf};

/// Extensions tried by the config resolver, in preference order.
pub const CONFIG_EXTENSIONS: [&str; 4] = [".mts", ".mjs", ".ts", ".js"];

/// Extension used when no config file exists yet.
pub const DEFAULT_CONFIG_EXTENSION: &str = ".js";

/// Directory whose presence proves `vitepress init` did its job.
pub const MARKER_DIR: &str = ".vitepress";

pub fn marker_dir(root: &Path) -> PathBuf {
    root.join(MARKER_DIR)
}

pub fn package_json(root: &Path) -> PathBuf {
    root.join("package.json")
}

pub fn postcss_config(root: &Path) -> PathBuf {
    root.join("postcss.config.mjs")
}

pub fn gitignore(root: &Path) -> PathBuf {
    root.join(".gitignore")
}

/// Base name (no extension) of the Tailwind config: `tailwind.config`
pub const TAILWIND_CONFIG_BASE: &str = "tailwind.config";

/// Base name (no extension) of the VitePress config: `.vitepress/config`
pub const VITEPRESS_CONFIG_BASE: &str = ".vitepress/config";

/// Theme paths: `.vitepress/theme/`
pub mod theme {
    use super::*;

    pub fn dir(root: &Path) -> PathBuf {
        marker_dir(root).join("theme")
    }

    pub fn tailwind_css(root: &Path) -> PathBuf {
        dir(root).join("tailwind.css")
    }

    pub fn index_ts(root: &Path) -> PathBuf {
        dir(root).join("index.ts")
    }

    pub fn index_js(root: &Path) -> PathBuf {
        dir(root).join("index.js")
    }
}

/// Editor rule paths: `.cursor/rules/`
pub mod rules {
    use super::*;

    pub fn dir(root: &Path) -> PathBuf {
        root.join(".cursor").join("rules")
    }

    pub fn tailwind_rules(root: &Path) -> PathBuf {
        dir(root).join("tailwind.mdc")
    }
}

/// First existing `base` + extension under `root`, in [`CONFIG_EXTENSIONS`] order.
pub fn find_existing_config(root: &Path, base: &str) -> Option<PathBuf> {
    CONFIG_EXTENSIONS
        .iter()
        .map(|ext| root.join(format!("{base}{ext}")))
        .find(|path| path.exists())
}

/// Config path to write: the existing one, or `base.js` when none exists.
pub fn resolve_config_path(root: &Path, base: &str) -> PathBuf {
    find_existing_config(root, base)
        .unwrap_or_else(|| root.join(format!("{base}{DEFAULT_CONFIG_EXTENSION}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolver_prefers_existing_extension() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("base.ts"), "").unwrap();

        let path = resolve_config_path(temp.path(), "base");
        assert_eq!(path, temp.path().join("base.ts"));
    }

    #[test]
    fn test_resolver_defaults_to_js() {
        let temp = TempDir::new().unwrap();

        let path = resolve_config_path(temp.path(), "base");
        assert_eq!(path, temp.path().join("base.js"));
        assert!(find_existing_config(temp.path(), "base").is_none());
    }

    #[test]
    fn test_resolver_preference_order() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("base.js"), "").unwrap();
        fs::write(temp.path().join("base.mjs"), "").unwrap();
        fs::write(temp.path().join("base.ts"), "").unwrap();

        // .mjs beats both .ts and .js
        let path = resolve_config_path(temp.path(), "base");
        assert_eq!(path, temp.path().join("base.mjs"));
    }

    #[test]
    fn test_resolver_nested_base() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".vitepress")).unwrap();
        fs::write(temp.path().join(".vitepress/config.mts"), "").unwrap();

        let found = find_existing_config(temp.path(), VITEPRESS_CONFIG_BASE);
        assert_eq!(found, Some(temp.path().join(".vitepress/config.mts")));
    }
}
