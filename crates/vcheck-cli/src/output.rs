//! Report rendering for the console.
use colored::Colorize;
use vcheck_core::{CheckStatus, Report, RunSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn status_tag(status: CheckStatus) -> String {
    match status {
        CheckStatus::Ok => format!("✓ {}", status.label()).green().to_string(),
        CheckStatus::Info => format!("ℹ {}", status.label()).blue().to_string(),
        CheckStatus::Warn => format!("! {}", status.label()).yellow().to_string(),
        CheckStatus::Fail => format!("✗ {}", status.label()).red().bold().to_string(),
    }
}

pub fn summary_line(summary: &RunSummary) -> String {
    format!(
        "Tests run: {}, Passed: {}, Failed: {}",
        summary.run, summary.passed, summary.failed
    )
}

/// One line per check, expected/actual under failures, summary last
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", format!("== {} ==", report.suite).bold().cyan()));

    for check in &report.checks {
        out.push_str(&format!("{} {}", status_tag(check.status), check.name));
        if check.status != CheckStatus::Ok {
            out.push_str(&format!(" {}", format!("({})", check.message).dimmed()));
        }
        out.push('\n');

        if check.is_failure() {
            if let (Some(expected), Some(actual)) = (&check.expected, &check.actual) {
                out.push_str(&format!("    Expected: {}\n", expected));
                out.push_str(&format!("    Actual:   {}\n", actual));
            }
        }
    }

    let line = summary_line(&report.summary);
    let line = if report.is_success() { line.green() } else { line.red() };
    out.push_str(&format!("{}\n", line));
    out
}

/// Reports plus their combined summary
pub fn render_json(reports: &[Report]) -> serde_json::Result<String> {
    let summary = combined(reports);
    serde_json::to_string_pretty(&serde_json::json!({
        "reports": reports,
        "summary": summary,
    }))
}

pub fn combined(reports: &[Report]) -> RunSummary {
    reports
        .iter()
        .fold(RunSummary::default(), |acc, r| acc.merge(r.summary))
}
