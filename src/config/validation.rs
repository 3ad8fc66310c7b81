//! Validation logic for configuration values.

use anyhow::Result;

use super::defaults::{ChecksConfig, ReportConfig};
use crate::checker::is_known_check;

impl ChecksConfig {
    /// Validate check configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(min) = self.fail_below {
            if !(0.0..=100.0).contains(&min) {
                anyhow::bail!("checks.fail_below must be between 0 and 100, got {}", min);
            }
        }

        if self.mesh_roles.iter().all(|r| r.trim().is_empty()) {
            anyhow::bail!("checks.mesh_roles must name at least one cf_role");
        }

        let unknown: Vec<&str> = self
            .skip
            .iter()
            .map(String::as_str)
            .filter(|name| !is_known_check(name))
            .collect();
        if !unknown.is_empty() {
            anyhow::bail!(
                "checks.skip contains unknown check(s): {}. Run `ugrid-check list-checks` to see valid names.",
                unknown.join(", ")
            );
        }

        Ok(())
    }
}

impl ReportConfig {
    /// Validate report configuration
    pub fn validate(&self) -> Result<()> {
        if self.verbose > 3 {
            anyhow::bail!("report.verbose must be between 0 and 3, got {}", self.verbose);
        }
        Ok(())
    }
}
