mod loader;
mod model;
pub mod presets;

pub use loader::{DEFAULT_PROFILE, FileConfigLoader};
pub use model::{IndentationConfig, RulesConfig, StyleConfig, TestingConfig, UNLIMITED};
