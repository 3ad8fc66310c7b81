//! Configuration management for ugrid-check.
//!
//! Configuration is YAML. Two optional files are merged, later overriding
//! earlier:
//!
//! 1. Global config (`$XDG_CONFIG_HOME/ugrid-check/config.yaml` or platform equivalent)
//! 2. Project config (`.ugrid-check.yaml` in the working directory)
//!
//! Command-line flags override both; see [`Config::apply`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::checker::CheckSettings;
use crate::formatters::{OutputFormat, RenderOptions};
use crate::paths::{GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILE, PROJECT_CONFIG};
use crate::report::Criteria;

pub mod defaults;
pub mod validation;

pub use defaults::*;

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub checks: ChecksConfig,
}

/// Values given on the command line. `None`/empty leaves the config value alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub format: Option<OutputFormat>,
    pub criteria: Option<Criteria>,
    pub verbose: Option<u8>,
    pub fail_below: Option<f64>,
    /// Added to the configured skip list
    pub skip: Vec<String>,
    /// Replaces the configured mesh roles when non-empty
    pub mesh_roles: Vec<String>,
}

impl Config {
    /// Load configuration with full merge semantics.
    /// Merge order (later overrides earlier):
    /// 1. Global config
    /// 2. Project config (.ugrid-check.yaml)
    pub fn load() -> Result<Self> {
        Self::load_merged_from(global_config_path().as_deref(), Some(Path::new(PROJECT_CONFIG)))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(content).context("Failed to parse config YAML")?
        };

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.report.validate()?;
        self.checks.validate()
    }

    /// Load merged configuration from the given global and project paths.
    /// Missing files are skipped; a file that exists but does not parse is an error.
    pub fn load_merged_from(global_path: Option<&Path>, project_path: Option<&Path>) -> Result<Self> {
        let global_config = global_path
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let project_config = project_path
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let config = global_config.merge_with(project_config);
        config.validate()?;

        tracing::debug!(?config, "loaded configuration");
        Ok(config)
    }

    /// Apply command-line overrides and re-validate.
    pub fn apply(mut self, overrides: Overrides) -> Result<Self> {
        if let Some(format) = overrides.format {
            self.report.format = format;
        }
        if let Some(criteria) = overrides.criteria {
            self.report.criteria = criteria;
        }
        if let Some(verbose) = overrides.verbose {
            self.report.verbose = verbose;
        }
        if overrides.fail_below.is_some() {
            self.checks.fail_below = overrides.fail_below;
        }
        for name in overrides.skip {
            if !self.checks.skip.contains(&name) {
                self.checks.skip.push(name);
            }
        }
        if !overrides.mesh_roles.is_empty() {
            self.checks.mesh_roles = overrides.mesh_roles;
        }

        self.validate()?;
        Ok(self)
    }

    pub fn check_settings(&self) -> CheckSettings {
        CheckSettings {
            mesh_roles: self
                .checks
                .mesh_roles
                .iter()
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty())
                .collect(),
            skip: self.checks.skip.iter().cloned().collect::<BTreeSet<_>>(),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            criteria: self.report.criteria,
            fail_below: self.checks.fail_below,
            verbose: self.report.verbose,
        }
    }
}

/// Returns the path of the global config file, if a config directory exists
/// for this platform.
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(GLOBAL_CONFIG_DIR).join(GLOBAL_CONFIG_FILE))
}

/// Partial config for merging - all fields optional
#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    pub report: Option<PartialReportConfig>,
    pub checks: Option<PartialChecksConfig>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialReportConfig {
    pub format: Option<OutputFormat>,
    pub criteria: Option<Criteria>,
    pub verbose: Option<u8>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialChecksConfig {
    pub mesh_roles: Option<Vec<String>>,
    pub skip: Option<Vec<String>>,
    pub fail_below: Option<f64>,
}

impl PartialConfig {
    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).context("Failed to parse config YAML")
    }

    /// Merge this global config with a project config, returning the merged result.
    /// Values from the project config take precedence over global.
    fn merge_with(self, project: PartialConfig) -> Config {
        let global_report = self.report.unwrap_or_default();
        let global_checks = self.checks.unwrap_or_default();
        let project_report = project.report.unwrap_or_default();
        let project_checks = project.checks.unwrap_or_default();

        Config {
            report: ReportConfig {
                // Project value > global value > default
                format: project_report
                    .format
                    .or(global_report.format)
                    .unwrap_or_default(),
                criteria: project_report
                    .criteria
                    .or(global_report.criteria)
                    .unwrap_or_default(),
                verbose: project_report
                    .verbose
                    .or(global_report.verbose)
                    .unwrap_or_default(),
            },
            checks: ChecksConfig {
                mesh_roles: project_checks
                    .mesh_roles
                    .or(global_checks.mesh_roles)
                    .unwrap_or_else(defaults::default_mesh_roles),
                skip: project_checks
                    .skip
                    .or(global_checks.skip)
                    .unwrap_or_default(),
                fail_below: project_checks.fail_below.or(global_checks.fail_below),
            },
        }
    }
}
