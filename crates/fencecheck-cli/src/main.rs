use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use tracing::error;

use fencecheck_core::artifact::fetch::HttpFetcher;
use fencecheck_core::ci::{GithubOutputs, error_annotation};
use fencecheck_core::error::error_chain;
use fencecheck_core::inspect::command::ShellInspector;
use fencecheck_core::report::{model::ToolInfo, render};

mod args;
mod logging;

fn main() -> ExitCode {
    logging::init();

    let args = match args::Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let _ = err.print();
            return fail(&err);
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(&*err),
    }
}

/// Report `err` as the run's single failure annotation.
fn fail(err: &(dyn std::error::Error + 'static)) -> ExitCode {
    let message = error_chain(err);
    error!(error = %message, "fence check failed");
    println!("{}", error_annotation(message.trim()));
    ExitCode::FAILURE
}

fn run(args: &args::Args) -> Result<()> {
    let tool = ToolInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let fetcher = HttpFetcher::new(Duration::from_secs(args.timeout_secs))?;
    let inspector = ShellInspector::new(&args.inspect_command);
    let mut outputs = GithubOutputs::from_env();

    let report = fencecheck_core::check(
        &args.check_config(),
        tool,
        &fetcher,
        &inspector,
        &mut outputs,
    )?;

    let output = match args.format {
        args::OutputFormat::Json => serde_json::to_string_pretty(&report)? + "\n",
        args::OutputFormat::Text => render::render_text(&report),
    };

    match &args.out {
        Some(path) => std::fs::write(path, &output)
            .with_context(|| format!("failed to write report: {}", path.display()))?,
        None => print!("{output}"),
    }

    report.verdict.ensure()?;
    Ok(())
}
