use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::types::{LoadOptions, RedoclyConfig};

/// File names tried, in order, when no explicit path is given.
pub const CONFIG_FILE_NAMES: [&str; 4] = [
    "redocly.yaml",
    "redocly.yml",
    ".redocly.yaml",
    ".redocly.yml",
];

/// Loads project configuration.
pub trait ConfigLoader {
    fn load(&self, options: &LoadOptions) -> Result<RedoclyConfig>;
}

/// Loads `redocly.yaml` from disk.
///
/// Priority:
/// 1. `options.config_path` (explicit path, relative to `base_dir`)
/// 2. the first of [`CONFIG_FILE_NAMES`] present in `base_dir`
/// 3. built-in defaults
#[derive(Debug, Clone)]
pub struct FsConfigLoader {
    base_dir: PathBuf,
}

impl FsConfigLoader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

impl ConfigLoader for FsConfigLoader {
    fn load(&self, options: &LoadOptions) -> Result<RedoclyConfig> {
        // If an explicit path was given, just load that.
        if let Some(path) = &options.config_path {
            return read_config(&self.base_dir.join(path));
        }

        match discover(&self.base_dir) {
            Some(path) => read_config(&path),
            None => {
                tracing::debug!(
                    "no config file in {}, using defaults",
                    self.base_dir.display()
                );
                Ok(RedoclyConfig::default())
            }
        }
    }
}

/// Resolve the project configuration.
///
/// With no path the loader runs its own discovery; otherwise it gets the
/// path verbatim. The loaded content is not checked here.
pub fn get_redocly_config(
    loader: &impl ConfigLoader,
    config_path: Option<&str>,
) -> Result<RedoclyConfig> {
    let options = LoadOptions {
        config_path: config_path.map(PathBuf::from),
    };
    loader.load(&options)
}

fn discover(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}

fn read_config(path: &Path) -> Result<RedoclyConfig> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    // An empty document is a valid, empty config.
    let mut config: RedoclyConfig = if contents.trim().is_empty() {
        RedoclyConfig::default()
    } else {
        serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing YAML from {}", path.display()))?
    };
    config.source = Some(path.to_path_buf());

    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}
