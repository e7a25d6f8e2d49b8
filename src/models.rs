//! Core data models for flowlint.
//!
//! These types are shared by every rule and by the dispatch engine, and
//! serialize to the shapes downstream reporters consume.

use serde::{Deserialize, Serialize};

/// Severity levels for findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    #[default]
    Warn,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warn => write!(f, "warn"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// One reported defect.
///
/// `rule` identifies the rule group that produced the finding, `name` the
/// specific check within it, and `ids` the node or flow identifiers the
/// defect refers to. For loop findings `ids` is the full wiring path,
/// closing repeat included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub rule: String,
    pub ids: Vec<String>,
    pub name: String,
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    /// Warn-level finding; every core rule reports at this level.
    pub fn warn(rule: &str, name: &str, ids: Vec<String>, message: &str) -> Self {
        Self {
            rule: rule.to_string(),
            ids,
            name: name.to_string(),
            severity: Severity::Warn,
            message: message.to_string(),
        }
    }
}

/// Summary of findings by severity
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FindingsSummary {
    pub error: usize,
    pub warn: usize,
    pub info: usize,
    pub total: usize,
}

impl FindingsSummary {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut summary = Self::default();
        for f in findings {
            match f.severity {
                Severity::Error => summary.error += 1,
                Severity::Warn => summary.warn += 1,
                Severity::Info => summary.info += 1,
            }
            summary.total += 1;
        }
        summary
    }
}
