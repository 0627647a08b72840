//! Failure taxonomy of a fence check run.
//!
//! Every variant is terminal. Nothing is retried or recovered; the binary
//! turns whatever reaches it into a single failure annotation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("invalid version `{0}`: expected at least <major>.<minor>")]
    InvalidVersion(String),

    #[error("invalid min-fence `{0}`: expected a non-negative integer")]
    InvalidThreshold(String),

    #[error("failed to download enclave for version {version}")]
    Download {
        version: String,
        #[source]
        source: FetchError,
    },

    #[error("failed to write artifact {}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to spawn inspector `{command}`")]
    InspectSpawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("inspector `{command}` exited with {status}: {stderr}")]
    InspectFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("inspector output `{0}` is not an instruction count")]
    InvalidCount(String),

    #[error("{mnemonic} count {observed} is below the required minimum {minimum}")]
    BelowThreshold {
        mnemonic: String,
        observed: u64,
        minimum: u64,
    },

    #[error("failed to set output `{name}`")]
    Outputs {
        name: String,
        #[source]
        source: io::Error,
    },
}

/// Transport-level download failure.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build http client")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Render an error and all of its sources as `outer: inner: ...`.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_threshold_names_both_values() {
        let err = CheckError::BelowThreshold {
            mnemonic: "lfence".into(),
            observed: 2,
            minimum: 3,
        };
        assert_eq!(
            err.to_string(),
            "lfence count 2 is below the required minimum 3"
        );
    }

    #[test]
    fn chain_includes_version_and_cause() {
        let err = CheckError::Download {
            version: "1.2.3".into(),
            source: FetchError::Status {
                url: "https://example.test/1.2/x".into(),
                status: 404,
            },
        };
        assert_eq!(
            error_chain(&err),
            "failed to download enclave for version 1.2.3: https://example.test/1.2/x returned HTTP 404"
        );
    }
}
