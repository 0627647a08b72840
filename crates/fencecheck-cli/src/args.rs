use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use fencecheck_core::artifact::version::DEFAULT_BASE_URL;
use fencecheck_core::inspect::command::DEFAULT_INSPECT_COMMAND;
use fencecheck_core::{CheckConfig, DEFAULT_MNEMONIC};

/// Options may also come from the environment, using the `INPUT_*` names a
/// CI runner sets for action inputs.
#[derive(Debug, Parser)]
#[command(
    name = "fencecheck",
    about = "Count fence instructions in a signed enclave build and enforce a minimum",
    disable_version_flag = true
)]
pub struct Args {
    /// Enclave release version; only <major>.<minor> selects the artifact
    #[arg(long = "version", env = "INPUT_VERSION")]
    pub enclave_version: String,

    /// Minimum acceptable instruction count
    #[arg(long, env = "INPUT_MIN-FENCE")]
    pub min_fence: String,

    /// Blob store root holding one directory per release series
    #[arg(long, env = "FENCECHECK_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Directory the artifact is written into
    #[arg(long, env = "FENCECHECK_WORKDIR", default_value = ".")]
    pub workdir: PathBuf,

    /// Instruction mnemonic to count, matched as a whole word
    #[arg(long, env = "FENCECHECK_MNEMONIC", default_value = DEFAULT_MNEMONIC)]
    pub mnemonic: String,

    /// Shell command printing the count; `{file}` and `{mnemonic}` are substituted
    #[arg(long, env = "FENCECHECK_INSPECT_COMMAND", default_value = DEFAULT_INSPECT_COMMAND)]
    pub inspect_command: String,

    /// Download timeout in seconds
    #[arg(long, env = "FENCECHECK_TIMEOUT_SECS", default_value_t = 300)]
    pub timeout_secs: u64,

    /// Output format
    #[arg(long, default_value = "json")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

impl Args {
    pub fn check_config(&self) -> CheckConfig {
        CheckConfig {
            version: self.enclave_version.clone(),
            min_fence: self.min_fence.clone(),
            base_url: self.base_url.clone(),
            workdir: self.workdir.clone(),
            mnemonic: self.mnemonic.clone(),
        }
    }
}
