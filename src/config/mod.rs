pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, FsConfigLoader, get_redocly_config};
pub use types::{ApiEntry, LoadOptions, RedoclyConfig};
