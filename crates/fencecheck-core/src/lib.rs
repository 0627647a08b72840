pub mod artifact;
pub mod ci;
pub mod error;
pub mod inspect;
pub mod report;
pub mod rules;

use std::path::PathBuf;

use tracing::info;

use crate::artifact::fetch::Fetcher;
use crate::artifact::persist::persist;
use crate::artifact::version::{DEFAULT_BASE_URL, Version, resolve_url};
use crate::ci::{OUTPUT_COUNT, OUTPUT_FILENAME, OutputSink};
use crate::error::CheckError;
use crate::inspect::command::Inspector;
use crate::inspect::count::parse_count;
use crate::report::model::{FenceInfo, Report, ToolInfo};
use crate::rules::threshold::{Threshold, evaluate};

pub const TOOL_NAME: &str = "fencecheck";

/// JSON schema version of fencecheck reports.
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Instruction counted when no mnemonic is configured.
pub const DEFAULT_MNEMONIC: &str = "lfence";

/// Inputs of a single fence check run.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Enclave release version, e.g. `1.2.3`.
    pub version: String,

    /// Minimum acceptable instruction count, as supplied by the caller.
    pub min_fence: String,

    /// Blob store root the `<major>.<minor>` path is appended to.
    pub base_url: String,

    /// Directory the artifact is written into.
    pub workdir: PathBuf,

    /// Instruction mnemonic matched as a whole word.
    pub mnemonic: String,
}

impl CheckConfig {
    pub fn new(version: impl Into<String>, min_fence: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            min_fence: min_fence.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            workdir: PathBuf::from("."),
            mnemonic: DEFAULT_MNEMONIC.to_string(),
        }
    }
}

/// Run the fence check pipeline.
///
/// Steps run strictly in order and the first failure returns immediately:
///
/// 1. resolve the artifact URL from the version's `<major>.<minor>` series
/// 2. download the artifact
/// 3. write it to the fixed filename in `config.workdir`
/// 4. run the inspector against the written file
/// 5. parse the count and evaluate it against the threshold
///
/// The `filename` output is set after step 3 and the count output after the
/// count is parsed, so a run that fails the threshold still reports its count.
/// A failed threshold is carried in `Report::verdict`; callers turn it into an
/// error with `Verdict::ensure`.
pub fn check(
    config: &CheckConfig,
    tool: ToolInfo,
    fetcher: &dyn Fetcher,
    inspector: &dyn Inspector,
    outputs: &mut dyn OutputSink,
) -> Result<Report, CheckError> {
    let version = Version::parse(&config.version)?;
    let minimum: Threshold = config.min_fence.parse()?;

    let url = resolve_url(&config.base_url, &version);
    info!(%version, %url, "downloading enclave artifact");

    let bytes = fetcher
        .fetch(&url)
        .map_err(|source| CheckError::Download {
            version: version.to_string(),
            source,
        })?;

    let artifact = persist(&config.workdir, &bytes)?;
    info!(
        path = %artifact.path.display(),
        size_bytes = artifact.size_bytes,
        "artifact written"
    );
    outputs.set_output(OUTPUT_FILENAME, &artifact.path.display().to_string())?;

    let stdout = inspector.inspect(&artifact.path, &config.mnemonic)?;
    let count = parse_count(&stdout)?;
    info!(mnemonic = %config.mnemonic, count, "instruction count");
    outputs.set_output(OUTPUT_COUNT, &count.to_string())?;

    let verdict = evaluate(&config.mnemonic, count, minimum);

    let fence = FenceInfo {
        version: version.to_string(),
        series: version.series(),
        url,
        mnemonic: config.mnemonic.clone(),
        count,
    };

    Ok(Report::new(tool, artifact.into_artifact(), fence, verdict))
}
