pub mod config;
pub mod initializer;
pub mod logging;
pub mod paths;
pub mod prompt;
pub mod scaffold;

// Re-export commonly used types
pub use config::{RulesPolicy, ScaffoldConfig};
pub use initializer::{Initializer, VitepressInit};
pub use scaffold::{Outcome, Scaffold, Step};
