use crate::TOOL_NAME;
use crate::report::model::Report;

pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", TOOL_NAME, report.tool.version));
    out.push_str(&format!(
        "Version: {} (series {})\n",
        report.fence.version, report.fence.series
    ));
    out.push_str(&format!("Source: {}\n", report.fence.url));
    out.push_str(&format!(
        "Artifact: {} ({} bytes, {} {})\n",
        report.artifact.path,
        report.artifact.size_bytes,
        report.artifact.hash.algorithm,
        report.artifact.hash.value
    ));
    out.push_str(&format!(
        "{} count: {} (minimum {})\n",
        report.fence.mnemonic, report.verdict.observed, report.verdict.minimum
    ));
    out.push_str(&format!(
        "Result: {}\n",
        if report.verdict.passed { "PASS" } else { "FAIL" }
    ));
    out
}
