use serde::Serialize;

// ---------------------------------------------------------------------------
// Job configuration
// ---------------------------------------------------------------------------

/// Validated job configuration assembled from the action inputs.
///
/// Field names serialize to the shape the sync service expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobConfig {
    #[serde(rename = "redoclyOrgSlug")]
    pub org_slug: String,
    #[serde(rename = "redoclyProjectSlug")]
    pub project_slug: String,
    #[serde(rename = "redoclyDomain")]
    pub domain: String,
    /// Absolute paths, in declaration order. Duplicates are kept.
    pub files: Vec<String>,
    pub mount_path: String,
    /// Seconds. Threaded through to the sync step, never enforced here.
    pub max_execution_time: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_path: Option<String>,
}
