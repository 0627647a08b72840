use std::fmt;

use crate::error::CheckError;

/// Blob store hosting signed enclave builds, one directory per release series.
pub const DEFAULT_BASE_URL: &str = "https://engfilestorage.blob.core.windows.net";

/// Fixed name of the enclave artifact, both remotely and on local disk.
pub const ARTIFACT_FILENAME: &str = "librust_cosmwasm_enclave.signed.so";

/// An enclave release version as supplied by the caller.
///
/// Only the first two dot-separated segments are meaningful; everything
/// after the second dot (patch, pre-release tag) is kept for reporting only.
/// Major and minor become a URL path segment, so they are limited to ASCII
/// alphanumerics and `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    raw: String,
    major: String,
    minor: String,
}

impl Version {
    pub fn parse(raw: &str) -> Result<Self, CheckError> {
        let raw = raw.trim();
        let mut segments = raw.split('.');

        match (segments.next(), segments.next()) {
            (Some(major), Some(minor)) if is_path_safe(major) && is_path_safe(minor) => Ok(Self {
                raw: raw.to_string(),
                major: major.to_string(),
                minor: minor.to_string(),
            }),
            _ => Err(CheckError::InvalidVersion(raw.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// `<major>.<minor>`, the storage directory of this release.
    pub fn series(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }
}

fn is_path_safe(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Build the download URL of the enclave artifact for `version`.
pub fn resolve_url(base_url: &str, version: &Version) -> String {
    format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        version.series(),
        ARTIFACT_FILENAME
    )
}
