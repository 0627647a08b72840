use sha2::{Digest, Sha256};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::artifact::version::ARTIFACT_FILENAME;
use crate::error::CheckError;
use crate::report::model::{ArtifactHash, ArtifactInfo};

/// An artifact written to local disk for inspection.
#[derive(Debug, Clone)]
pub struct PersistedArtifact {
    /// Where the bytes were written.
    pub path: PathBuf,

    /// Size of the artifact in bytes.
    pub size_bytes: u64,

    /// Hash algorithm used for fingerprinting.
    pub hash_alg: String,

    /// Hex-encoded hash of the artifact bytes. Informational only.
    pub hash_hex: String,
}

impl PersistedArtifact {
    /// Convert into the report-facing artifact metadata.
    pub fn into_artifact(self) -> ArtifactInfo {
        ArtifactInfo {
            path: self.path.display().to_string(),
            size_bytes: self.size_bytes,
            hash: ArtifactHash {
                algorithm: self.hash_alg,
                value: self.hash_hex,
            },
        }
    }
}

/// Location of the artifact inside `dir`.
///
/// The working directory itself (`.` or empty) yields the bare filename.
pub fn artifact_path(dir: &Path) -> PathBuf {
    if dir.as_os_str().is_empty() || dir == Path::new(".") {
        PathBuf::from(ARTIFACT_FILENAME)
    } else {
        dir.join(ARTIFACT_FILENAME)
    }
}

/// Write `bytes` to the fixed artifact filename in `dir`, replacing any
/// previous file.
pub fn persist(dir: &Path, bytes: &[u8]) -> Result<PersistedArtifact, CheckError> {
    let path = artifact_path(dir);

    fs::write(&path, bytes).map_err(|source| CheckError::Persist {
        path: path.clone(),
        source,
    })?;

    let digest = Sha256::digest(bytes);

    Ok(PersistedArtifact {
        path,
        size_bytes: bytes.len() as u64,
        hash_alg: "sha256".to_string(),
        hash_hex: hex::encode(digest),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn written_file_matches_bytes() {
        let dir = TempDir::new().unwrap();
        let data: Vec<u8> = (0..=255u8).cycle().take(4096).collect();

        let artifact = persist(dir.path(), &data).expect("persist succeeds");

        assert_eq!(artifact.path, dir.path().join(ARTIFACT_FILENAME));
        assert_eq!(fs::read(&artifact.path).unwrap(), data);
        assert_eq!(artifact.size_bytes, 4096);
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(ARTIFACT_FILENAME), b"a much longer stale artifact").unwrap();

        let artifact = persist(dir.path(), b"new").unwrap();

        assert_eq!(fs::read(&artifact.path).unwrap(), b"new");
    }

    #[test]
    fn fingerprints_bytes() {
        let dir = TempDir::new().unwrap();
        let artifact = persist(dir.path(), b"hello").unwrap();

        assert_eq!(artifact.hash_alg, "sha256");
        // echo -n "hello" | sha256sum
        assert_eq!(
            artifact.hash_hex,
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn current_dir_yields_bare_filename() {
        assert_eq!(artifact_path(Path::new(".")), PathBuf::from(ARTIFACT_FILENAME));
        assert_eq!(artifact_path(Path::new("")), PathBuf::from(ARTIFACT_FILENAME));
    }

    #[test]
    fn missing_directory_returns_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");

        let result = persist(&missing, b"x");
        assert!(matches!(result, Err(CheckError::Persist { .. })));
    }

    #[test]
    fn converts_to_report_artifact() {
        let artifact = PersistedArtifact {
            path: PathBuf::from(ARTIFACT_FILENAME),
            size_bytes: 4,
            hash_alg: "sha256".into(),
            hash_hex: "abcd".into(),
        };

        let info = artifact.into_artifact();
        assert_eq!(info.path, ARTIFACT_FILENAME);
        assert_eq!(info.hash.value, "abcd");
    }
}
