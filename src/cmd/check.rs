//! `check` command: run the UGRID checks over one or more datasets.

use anyhow::{Context, Result};
use std::path::PathBuf;

use ugrid_check::checker::UgridChecker;
use ugrid_check::config::{Config, Overrides};
use ugrid_check::formatters::{self, OutputFormat};
use ugrid_check::netcdf;
use ugrid_check::report::{Criteria, Report};
use ugrid_check::ui::{self, colors};

/// Exit status when every file passes.
pub const EXIT_PASS: i32 = 0;
/// Exit status when any file fails the criteria.
pub const EXIT_FAIL: i32 = 1;
/// Exit status when any file cannot be read.
pub const EXIT_UNREADABLE: i32 = 2;

pub struct CheckArgs {
    pub paths: Vec<String>,
    pub format: Option<OutputFormat>,
    pub criteria: Option<Criteria>,
    pub skip: Vec<String>,
    pub fail_below: Option<f64>,
    pub mesh_roles: Vec<String>,
    pub verbose: u8,
    pub quiet: bool,
}

/// Check every file named by `args.paths` and print the reports.
///
/// Returns the process exit status.
pub fn cmd_check(args: &CheckArgs, config: Config) -> Result<i32> {
    let config = config.apply(Overrides {
        format: args.format,
        criteria: args.criteria,
        verbose: (args.verbose > 0).then_some(args.verbose),
        fail_below: args.fail_below,
        skip: args.skip.clone(),
        mesh_roles: args.mesh_roles.clone(),
    })?;

    let checker = UgridChecker::new(config.check_settings());
    let opts = config.render_options();
    let json = config.report.format == OutputFormat::Json;

    let mut reports = Vec::new();
    let mut unreadable = 0usize;
    let mut files = Vec::new();

    for pattern in &args.paths {
        match expand_pattern(pattern) {
            Ok(matched) => files.extend(matched),
            Err(err) => {
                tracing::warn!(pattern = %pattern, error = %err, "cannot expand path");
                report_unreadable(pattern, &err);
                unreadable += 1;
            }
        }
    }

    for file in &files {
        let source = file.display().to_string();
        let dataset = match netcdf::open(file) {
            Ok(dataset) => dataset,
            Err(err) => {
                tracing::warn!(path = %source, error = %err, "cannot read dataset");
                report_unreadable(&source, &err);
                unreadable += 1;
                continue;
            }
        };

        let results = checker.check(&dataset);
        tracing::info!(path = %source, results = results.len(), "checked dataset");
        reports.push(Report::new(source, results));
    }

    let failed = reports
        .iter()
        .filter(|r| !r.passed(opts.criteria, opts.fail_below))
        .count();
    let several = reports.len() + unreadable > 1;

    if json {
        println!("{}", formatters::format_json_reports(&reports, &opts)?);
    } else if args.quiet {
        for report in &reports {
            println!(
                "{} {}",
                ui::verdict(report.passed(opts.criteria, opts.fail_below)),
                report.source
            );
        }
        if several {
            print_summary(reports.len() - failed, failed, unreadable);
        }
    } else {
        for (i, report) in reports.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("{}", formatters::format_text_report(report, &opts));
        }
        if several {
            println!();
            print_summary(reports.len() - failed, failed, unreadable);
        }
    }

    Ok(exit_code(failed, unreadable))
}

fn report_unreadable(input: &str, err: &dyn std::fmt::Display) {
    eprintln!(
        "{} {}: {}",
        colors::error("✗"),
        colors::identifier(input),
        err
    );
}

fn print_summary(passed: usize, failed: usize, unreadable: usize) {
    let mut line = format!(
        "{} {} passed, {} failed",
        colors::identifier("Summary:"),
        colors::success(&passed.to_string()),
        colors::error(&failed.to_string())
    );
    if unreadable > 0 {
        line.push_str(&format!(
            ", {} unreadable",
            colors::warning(&unreadable.to_string())
        ));
    }
    println!("{}", line);
}

/// Unreadable files outrank failures.
fn exit_code(failed: usize, unreadable: usize) -> i32 {
    if unreadable > 0 {
        EXIT_UNREADABLE
    } else if failed > 0 {
        EXIT_FAIL
    } else {
        EXIT_PASS
    }
}

/// Expand one path argument. Arguments without glob characters are taken
/// as-is so a missing file is reported when it is opened; a pattern that
/// matches no file is an error.
fn expand_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    if !pattern.contains(['*', '?', '[']) {
        return Ok(vec![PathBuf::from(pattern)]);
    }

    let matches: Vec<PathBuf> = glob::glob(pattern)
        .with_context(|| format!("Invalid glob pattern '{}'", pattern))?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();
    if matches.is_empty() {
        anyhow::bail!("No files match '{}'", pattern);
    }
    Ok(matches)
}
