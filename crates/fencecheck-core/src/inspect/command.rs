use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::CheckError;

/// Disassemble, keep lines containing the mnemonic as a whole word, count them.
///
/// In a shell pipeline the exit status is that of `wc`, so a binary without a
/// single match still succeeds and prints `0`.
pub const DEFAULT_INSPECT_COMMAND: &str = "objdump -d {file} | grep -w {mnemonic} | wc -l";

/// Runs an external tool against a persisted artifact.
pub trait Inspector {
    /// Return the tool's raw standard output. Blocks until the tool exits.
    fn inspect(&self, artifact: &Path, mnemonic: &str) -> Result<String, CheckError>;
}

/// Inspector driven by a `sh -c` command template.
///
/// `{file}` and `{mnemonic}` in the template are replaced with the
/// single-quoted artifact path and mnemonic.
#[derive(Debug, Clone)]
pub struct ShellInspector {
    template: String,
}

impl ShellInspector {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn render(&self, artifact: &Path, mnemonic: &str) -> String {
        self.template
            .replace("{file}", &shell_quote(&artifact.display().to_string()))
            .replace("{mnemonic}", &shell_quote(mnemonic))
    }
}

impl Default for ShellInspector {
    fn default() -> Self {
        Self::new(DEFAULT_INSPECT_COMMAND)
    }
}

impl Inspector for ShellInspector {
    fn inspect(&self, artifact: &Path, mnemonic: &str) -> Result<String, CheckError> {
        let command = self.render(artifact, mnemonic);
        debug!(%command, "running inspector");

        let output = Command::new("sh")
            .arg("-c")
            .arg(&command)
            .output()
            .map_err(|source| CheckError::InspectSpawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CheckError::InspectFailed {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}
