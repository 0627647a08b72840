use serde::{Deserialize, Serialize};

use crate::SCHEMA_VERSION;
use crate::rules::threshold::Verdict;

/// Top-level fencecheck report.
///
/// Written to stdout (or `--out`) after the count has been evaluated,
/// whether or not the threshold passed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub schema_version: String,
    pub tool: ToolInfo,
    pub artifact: ArtifactInfo,
    pub fence: FenceInfo,
    pub verdict: Verdict,
}

impl Report {
    pub fn new(tool: ToolInfo, artifact: ArtifactInfo, fence: FenceInfo, verdict: Verdict) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            tool,
            artifact,
            fence,
            verdict,
        }
    }
}

/// Tool metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

/// The downloaded artifact as written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactInfo {
    pub path: String,
    pub size_bytes: u64,
    pub hash: ArtifactHash,
}

/// Cryptographic artifact fingerprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactHash {
    pub algorithm: String,
    pub value: String,
}

/// What was counted and where it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FenceInfo {
    /// Version as supplied, untruncated.
    pub version: String,
    /// `<major>.<minor>` directory the artifact was fetched from.
    pub series: String,
    pub url: String,
    pub mnemonic: String,
    pub count: u64,
}
