//! # ugrid-check - UGRID compliance checking for netCDF
//!
//! Reads netCDF classic-family headers and checks mesh topology variables
//! against the UGRID 2.0 conventions, producing a scored report.
//!
//! ## Modules
//!
//! - [`netcdf`] - Dataset model, header reader/writer, CDL rendering
//! - [`checker`] - Mesh discovery and the UGRID checks
//! - [`report`] - Scoring and pass/fail criteria
//! - [`formatters`] - Text and JSON report output
//! - [`config`] - YAML configuration with global/project merge
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use ugrid_check::checker::UgridChecker;
//! use ugrid_check::report::{Criteria, Report};
//!
//! let dataset = ugrid_check::netcdf::open(Path::new("mesh.nc")).expect("readable dataset");
//! let results = UgridChecker::default().check(&dataset);
//! let report = Report::new("mesh.nc", results);
//!
//! if !report.passed(Criteria::Normal, None) {
//!     for failure in report.failures(Criteria::Normal) {
//!         println!("{}: {:?}", failure.name, failure.messages);
//!     }
//! }
//! ```

pub mod checker;
pub mod config;
pub mod formatters;
pub mod netcdf;
pub mod report;
pub mod telemetry;
pub mod ui;

/// Default path constants for configuration files.
pub mod paths {
    /// Project config file, looked up in the working directory: `.ugrid-check.yaml`
    pub const PROJECT_CONFIG: &str = ".ugrid-check.yaml";
    /// Directory under the platform config dir holding the global config
    pub const GLOBAL_CONFIG_DIR: &str = "ugrid-check";
    /// Global config file name
    pub const GLOBAL_CONFIG_FILE: &str = "config.yaml";
}

/// Generate a UTC timestamp in ISO 8601 format: `YYYY-MM-DDTHH:MM:SSZ`
pub fn utc_now_iso() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
