//! Scored report for one dataset.
//!
//! A [`Report`] wraps the check results of one file and answers the questions
//! a CI job asks: how many points, which failures count under the chosen
//! [`Criteria`], and did the file pass.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::checker::{CheckResult, Priority, CHECKER_NAME, SPEC_VERSION};

/// How strict a run is about lower-priority failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criteria {
    /// Only high priority failures count
    Lenient,
    /// High and medium priority failures count
    #[default]
    Normal,
    /// Every failure counts
    Strict,
}

impl Criteria {
    /// Lowest priority whose failures count against the dataset.
    pub fn threshold(self) -> Priority {
        match self {
            Criteria::Lenient => Priority::High,
            Criteria::Normal => Priority::Medium,
            Criteria::Strict => Priority::Low,
        }
    }
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criteria::Lenient => write!(f, "lenient"),
            Criteria::Normal => write!(f, "normal"),
            Criteria::Strict => write!(f, "strict"),
        }
    }
}

impl FromStr for Criteria {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lenient" => Ok(Criteria::Lenient),
            "normal" => Ok(Criteria::Normal),
            "strict" => Ok(Criteria::Strict),
            other => anyhow::bail!(
                "Invalid criteria '{}'. Use 'lenient', 'normal' or 'strict'.",
                other
            ),
        }
    }
}

/// Check results for one source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub source: String,
    pub checker: String,
    pub spec_version: String,
    /// UTC timestamp, `YYYY-MM-DDTHH:MM:SSZ`
    pub checked_at: String,
    pub results: Vec<CheckResult>,
}

impl Report {
    pub fn new(source: impl Into<String>, results: Vec<CheckResult>) -> Self {
        Self {
            source: source.into(),
            checker: CHECKER_NAME.to_string(),
            spec_version: SPEC_VERSION.to_string(),
            checked_at: crate::utc_now_iso(),
            results,
        }
    }

    pub fn scored_points(&self) -> u32 {
        self.results.iter().map(|r| r.score.min(r.out_of)).sum()
    }

    pub fn possible_points(&self) -> u32 {
        self.results.iter().map(|r| r.out_of).sum()
    }

    /// Score as a percentage; 100 when nothing was scored.
    pub fn percentage(&self) -> f64 {
        match self.possible_points() {
            0 => 100.0,
            possible => f64::from(self.scored_points()) * 100.0 / f64::from(possible),
        }
    }

    /// Failed results whose priority counts under `criteria`.
    pub fn failures(&self, criteria: Criteria) -> Vec<&CheckResult> {
        let threshold = criteria.threshold();
        self.results
            .iter()
            .filter(|r| !r.passed() && r.priority >= threshold)
            .collect()
    }

    /// Results grouped by priority, highest first when iterated in reverse.
    pub fn grouped(&self) -> BTreeMap<Priority, Vec<&CheckResult>> {
        let mut groups: BTreeMap<Priority, Vec<&CheckResult>> = BTreeMap::new();
        for r in &self.results {
            groups.entry(r.priority).or_default().push(r);
        }
        groups
    }

    /// Whether the dataset passes: no counted failures, and a score at or
    /// above `fail_below` when one is set.
    pub fn passed(&self, criteria: Criteria, fail_below: Option<f64>) -> bool {
        if !self.failures(criteria).is_empty() {
            return false;
        }
        fail_below.map_or(true, |min| self.percentage() >= min)
    }
}
