//! Output formatters for check reports
//!
//! Provides formatters that transform a [`Report`] into terminal text or JSON.

use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::checker::{CheckResult, Priority};
use crate::report::{Criteria, Report};

/// Output format for `check`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("Invalid format '{}'. Use 'text' or 'json'.", other),
        }
    }
}

/// How a report is judged and how much of it is shown.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub criteria: Criteria,
    pub fail_below: Option<f64>,
    /// 0: messages of failures only, 1: all messages, 2+: descriptions too
    pub verbose: u8,
}

/// Format a report as multi-section text output
pub fn format_text_report(report: &Report, opts: &RenderOptions) -> String {
    let passed = report.passed(opts.criteria, opts.fail_below);

    let mut output = vec![
        format!(
            "{} {} compliance-checker",
            report.checker.to_uppercase(),
            report.spec_version
        )
        .bold()
        .to_string(),
        format!("Source:   {}", report.source.cyan()),
        format!(
            "Score:    {}/{} ({:.1}%)",
            report.scored_points(),
            report.possible_points(),
            report.percentage()
        ),
        format!("Criteria: {}", opts.criteria),
        String::new(),
    ];

    let groups = report.grouped();
    for (priority, results) in groups.iter().rev() {
        let header = format_priority_header(*priority);
        output.push(header.bold().to_string());
        output.push("─".repeat(header.chars().count()));
        for result in results {
            output.extend(format_result(result, opts));
        }
        output.push(String::new());
    }

    let verdict = if passed {
        "PASS".green().bold()
    } else {
        "FAIL".red().bold()
    };
    let counted = report.failures(opts.criteria).len();
    let mut summary = format!("Result: {}", verdict);
    if counted > 0 {
        summary.push_str(&format!(
            " ({} failing check{} at {} criteria)",
            counted,
            if counted == 1 { "" } else { "s" },
            opts.criteria
        ));
    } else if !passed {
        if let Some(min) = opts.fail_below {
            summary.push_str(&format!(" (score below {:.1}%)", min));
        }
    }
    output.push(summary);

    output.join("\n")
}

fn format_priority_header(priority: Priority) -> String {
    format!("{} ({})", priority.display_header(), priority)
}

/// Format one result line plus its messages
fn format_result(result: &CheckResult, opts: &RenderOptions) -> Vec<String> {
    let symbol = if result.is_informational() {
        "○".dimmed()
    } else if result.passed() {
        "✓".green()
    } else if result.priority >= opts.criteria.threshold() {
        "✗".red()
    } else {
        "⚠".yellow()
    };

    let mesh = result
        .mesh
        .as_deref()
        .map(|m| format!(" [{}]", m))
        .unwrap_or_default();

    let mut lines = vec![format!(
        "  {} {}{}  {}",
        symbol,
        result.name,
        mesh.dimmed(),
        format!("{}/{}", result.score, result.out_of).dimmed()
    )];

    if opts.verbose >= 2 {
        lines.push(format!("      {}", result.description.dimmed()));
    }

    let show_messages = opts.verbose >= 1 || !result.passed();
    if show_messages {
        for msg in &result.messages {
            lines.push(format!("      - {}", msg));
        }
    }

    lines
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a Report,
    scored_points: u32,
    possible_points: u32,
    percentage: f64,
    criteria: Criteria,
    passed: bool,
}

impl<'a> JsonReport<'a> {
    fn new(report: &'a Report, opts: &RenderOptions) -> Self {
        Self {
            report,
            scored_points: report.scored_points(),
            possible_points: report.possible_points(),
            percentage: report.percentage(),
            criteria: opts.criteria,
            passed: report.passed(opts.criteria, opts.fail_below),
        }
    }
}

/// Format reports as one pretty-printed JSON array, one object per report
pub fn format_json_reports(reports: &[Report], opts: &RenderOptions) -> anyhow::Result<String> {
    let docs: Vec<JsonReport<'_>> = reports.iter().map(|r| JsonReport::new(r, opts)).collect();
    Ok(serde_json::to_string_pretty(&docs)?)
}
