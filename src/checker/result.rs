//! Check results and their priorities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How much a check matters. Ordered so that `High > Medium > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Numeric weight used when summarising scores (3, 2, 1).
    pub fn weight(self) -> u32 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    /// Section header used in reports.
    pub fn display_header(self) -> &'static str {
        match self {
            Priority::High => "Highly Recommended",
            Priority::Medium => "Recommended",
            Priority::Low => "Suggested",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// Outcome of one check against one mesh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub name: String,
    /// Mesh variable the result is about; `None` for dataset-wide results.
    pub mesh: Option<String>,
    pub priority: Priority,
    pub score: u32,
    pub out_of: u32,
    pub description: String,
    #[serde(default)]
    pub messages: Vec<String>,
}

impl CheckResult {
    pub fn new(name: &str, mesh: Option<&str>, priority: Priority, description: &str) -> Self {
        Self {
            name: name.to_string(),
            mesh: mesh.map(str::to_string),
            priority,
            score: 0,
            out_of: 0,
            description: description.to_string(),
            messages: Vec::new(),
        }
    }

    /// Add one possible point, earned when `ok` holds; otherwise record `msg`.
    pub fn point(&mut self, ok: bool, msg: impl FnOnce() -> String) {
        self.out_of += 1;
        if ok {
            self.score += 1;
        } else {
            self.messages.push(msg());
        }
    }

    /// Add one possible point that is not earned.
    pub fn fail(&mut self, msg: impl Into<String>) {
        self.out_of += 1;
        self.messages.push(msg.into());
    }

    /// Attach an informational note without affecting the score.
    pub fn note(&mut self, msg: impl Into<String>) {
        self.messages.push(msg.into());
    }

    pub fn passed(&self) -> bool {
        self.score >= self.out_of
    }

    /// A result with nothing to score, e.g. an absent optional attribute.
    pub fn is_informational(&self) -> bool {
        self.out_of == 0
    }
}
