use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};
use std::path::{Path, PathBuf};

use crate::types::JobConfig;

/// Source of named job inputs.
///
/// Missing inputs read as the empty string, matching how the Actions runner
/// treats undeclared `with:` keys.
pub trait InputSource {
    fn get_input(&self, name: &str) -> String;
}

/// Reads inputs from the `INPUT_<NAME>` variables the Actions runner exports.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvInputs;

impl EnvInputs {
    /// `mountPath` -> `INPUT_MOUNTPATH`, `max time` -> `INPUT_MAX_TIME`.
    pub fn var_name(name: &str) -> String {
        format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
    }
}

impl InputSource for EnvInputs {
    fn get_input(&self, name: &str) -> String {
        std::env::var(Self::var_name(name))
            .map(|v| v.trim().to_owned())
            .unwrap_or_default()
    }
}

impl<K, V, S> InputSource for HashMap<K, V, S>
where
    K: Borrow<str> + Eq + Hash,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn get_input(&self, name: &str) -> String {
        self.get(name)
            .map(|v| v.as_ref().trim().to_owned())
            .unwrap_or_default()
    }
}

/// Workspace root from `GITHUB_WORKSPACE`, falling back to the current directory.
pub fn workspace_root() -> String {
    if let Ok(root) = std::env::var("GITHUB_WORKSPACE")
        && !root.is_empty()
    {
        return root;
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    tracing::warn!(
        "GITHUB_WORKSPACE is not set, resolving files against {}",
        cwd.display()
    );
    let mut root = cwd.to_string_lossy().into_owned();
    if !root.ends_with('/') {
        root.push('/');
    }
    root
}

/// Assemble the job configuration from the action inputs.
///
/// Never fails: a non-numeric `maxExecutionTime` coerces to `0`.
pub fn parse_input_data(inputs: &impl InputSource, workspace_root: &str) -> JobConfig {
    let org_slug = inputs.get_input("organization");
    let project_slug = inputs.get_input("project");
    let domain = inputs.get_input("domain");
    let raw_files = inputs.get_input("files");
    let mount_path = inputs.get_input("mountPath");
    let raw_max_execution_time = inputs.get_input("maxExecutionTime");
    let config_path = Some(inputs.get_input("configPath")).filter(|p| !p.is_empty());

    let files = resolve_files(&raw_files, workspace_root);
    let max_execution_time = coerce_seconds(&raw_max_execution_time);

    tracing::debug!(
        org = %org_slug,
        project = %project_slug,
        files = files.len(),
        max_execution_time,
        "parsed job inputs"
    );

    JobConfig {
        org_slug,
        project_slug,
        domain,
        files,
        mount_path,
        max_execution_time,
        config_path,
    }
}

/// Split on whitespace and anchor relative entries at the workspace root.
fn resolve_files(raw: &str, workspace_root: &str) -> Vec<String> {
    raw.split_whitespace()
        .map(|token| {
            if Path::new(token).is_absolute() {
                token.to_owned()
            } else if workspace_root.is_empty() || workspace_root.ends_with('/') {
                format!("{workspace_root}{token}")
            } else {
                format!("{workspace_root}/{token}")
            }
        })
        .collect()
}

fn coerce_seconds(raw: &str) -> u64 {
    match raw.parse::<u64>() {
        Ok(seconds) => seconds,
        Err(_) => {
            tracing::warn!(value = raw, "maxExecutionTime is not a number, using 0");
            0
        }
    }
}
