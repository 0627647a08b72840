//! CI workflow outputs and annotations.
//!
//! Outputs are appended to the file named by `GITHUB_OUTPUT`. Without one
//! they are only logged; stdout stays reserved for the report and the
//! failure annotation.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use sha2::{Digest, Sha256};
use tracing::warn;

use crate::error::CheckError;

/// Output holding the local artifact path.
pub const OUTPUT_FILENAME: &str = "filename";

/// Output holding the observed instruction count.
pub const OUTPUT_COUNT: &str = "lfence";

/// Receiver of named run outputs.
pub trait OutputSink {
    fn set_output(&mut self, name: &str, value: &str) -> Result<(), CheckError>;
}

/// Outputs published to a GitHub Actions style runner.
#[derive(Debug, Clone, Default)]
pub struct GithubOutputs {
    file: Option<PathBuf>,
}

impl GithubOutputs {
    pub fn from_env() -> Self {
        Self {
            file: std::env::var_os("GITHUB_OUTPUT")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(path.into()),
        }
    }
}

impl OutputSink for GithubOutputs {
    fn set_output(&mut self, name: &str, value: &str) -> Result<(), CheckError> {
        let to_err = |source| CheckError::Outputs {
            name: name.to_string(),
            source,
        };

        let Some(path) = &self.file else {
            warn!(name, value, "GITHUB_OUTPUT is not set; output not published");
            return Ok(());
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(to_err)?;
        file.write_all(output_entry(name, value).as_bytes())
            .map_err(to_err)?;
        Ok(())
    }
}

/// One `GITHUB_OUTPUT` entry.
///
/// Values containing a line break use the `name<<DELIMITER` form so they
/// cannot start a new `key=value` line. The delimiter is derived from the
/// value's digest and therefore never occurs inside it.
pub fn output_entry(name: &str, value: &str) -> String {
    if !value.contains(['\n', '\r']) {
        return format!("{name}={value}\n");
    }

    let digest = hex::encode(Sha256::digest(value.as_bytes()));
    let delimiter = format!("ghadelimiter_{}", &digest[..32]);
    format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
}

/// Outputs kept in memory, in the order they were set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordedOutputs {
    pub entries: Vec<(String, String)>,
}

impl RecordedOutputs {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl OutputSink for RecordedOutputs {
    fn set_output(&mut self, name: &str, value: &str) -> Result<(), CheckError> {
        self.entries.push((name.to_string(), value.to_string()));
        Ok(())
    }
}

/// Escape workflow command data (`%`, `\r`, `\n`).
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Failure annotation shown on the run summary.
pub fn error_annotation(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}
