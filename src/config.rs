use std::path::PathBuf;

/// Sub-command token accepted (and skipped) in front of the project name.
pub const INIT_TOKEN: &str = "init";

/// What to do about the editor rules at the end of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesPolicy {
    /// Ask with the confirm prompt
    Ask,
    /// Write them without asking
    Always,
    /// Never write them
    Never,
}

impl RulesPolicy {
    pub fn from_flags(yes: bool, no_rules: bool) -> Self {
        match (yes, no_rules) {
            (true, _) => RulesPolicy::Always,
            (false, true) => RulesPolicy::Never,
            (false, false) => RulesPolicy::Ask,
        }
    }
}

/// Resolved configuration for one scaffold run
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    /// Project name, also the directory name
    pub project_name: String,
    /// Directory the project directory is created in
    pub base_dir: PathBuf,
    pub rules: RulesPolicy,
}

impl ScaffoldConfig {
    /// Project root: `<base_dir>/<project_name>`
    pub fn project_root(&self) -> PathBuf {
        self.base_dir.join(&self.project_name)
    }
}

/// Pull the project name out of the positional arguments.
///
/// Accepts `<name>` or `init <name>`. The name is returned exactly as given,
/// surrounding whitespace included. Returns `None` for no name, an empty
/// name, a lone `init`, or extra arguments.
pub fn project_name_from_args(args: &[String]) -> Option<String> {
    let name = match args {
        [first, name] if first == INIT_TOKEN => name,
        [name] if name != INIT_TOKEN => name,
        _ => return None,
    };

    if name.is_empty() {
        None
    } else {
        Some(name.clone())
    }
}
