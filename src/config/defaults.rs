//! Default values and configuration structs with default implementations.

use serde::{Deserialize, Serialize};

use crate::checker::DEFAULT_MESH_ROLE;
use crate::formatters::OutputFormat;
use crate::report::Criteria;

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

// =========================================================================
// DEFAULT VALUE FUNCTIONS
// =========================================================================

default_fn!(
    default_mesh_roles,
    Vec<String>,
    vec![DEFAULT_MESH_ROLE.to_string()]
);

// =========================================================================
// CONFIG STRUCTS WITH DEFAULTS
// =========================================================================

/// How reports are judged and printed
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct ReportConfig {
    /// Output format (default: text)
    #[serde(default)]
    pub format: OutputFormat,
    /// Which failures count (default: normal)
    #[serde(default)]
    pub criteria: Criteria,
    /// Verbosity of text output (default: 0)
    #[serde(default)]
    pub verbose: u8,
}

/// Which checks run and what a pass means
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChecksConfig {
    /// `cf_role` values that mark mesh topology variables (default: mesh_topology)
    #[serde(default = "default_mesh_roles")]
    pub mesh_roles: Vec<String>,
    /// Check names to leave out of reports
    #[serde(default)]
    pub skip: Vec<String>,
    /// Minimum score percentage for a pass (default: unset)
    #[serde(default)]
    pub fail_below: Option<f64>,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            mesh_roles: default_mesh_roles(),
            skip: vec![],
            fail_below: None,
        }
    }
}
