//! Base rule trait and dispatch types.

use crate::config::SubruleConfig;
use crate::graph::FlowQuery;
use crate::models::Finding;

/// Closed set of rule kinds the engine can dispatch to.
///
/// Configuration entries name rules by string; parsing into this enum is
/// the single place an unknown name can fall out, and it falls out as
/// `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    FlowSize,
    NoFuncName,
    HttpInResp,
    Loop,
}

impl RuleKind {
    /// Parse a configured rule name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "flowsize" => Some(Self::FlowSize),
            "no-func-name" => Some(Self::NoFuncName),
            "http-in-resp" => Some(Self::HttpInResp),
            "loop" => Some(Self::Loop),
            _ => None,
        }
    }

    /// The configuration-facing name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FlowSize => "flowsize",
            Self::NoFuncName => "no-func-name",
            Self::HttpInResp => "http-in-resp",
            Self::Loop => "loop",
        }
    }
}

/// Findings plus the context value handed back by one rule invocation.
#[derive(Debug)]
pub struct RuleOutcome<C> {
    pub findings: Vec<Finding>,
    pub context: C,
}

impl<C> RuleOutcome<C> {
    pub fn new(findings: Vec<Finding>, context: C) -> Self {
        Self { findings, context }
    }

    /// Outcome with no findings.
    pub fn empty(context: C) -> Self {
        Self {
            findings: Vec::new(),
            context,
        }
    }
}

/// Final result of one dispatch run.
#[derive(Debug)]
pub struct CheckReport<C> {
    /// Context value as returned by the last rule that ran.
    pub context: C,
    /// All findings, in configured sub-rule order.
    pub findings: Vec<Finding>,
}

/// A single lint rule.
///
/// Rules are pure with respect to the graph: they read through
/// [`FlowQuery`] and report through [`RuleOutcome`]. The context value is
/// owned by the rule for the duration of the call and must be handed back
/// (updated or untouched) for the next rule in the run.
pub trait Rule<C> {
    /// Which configured kind this rule answers to.
    fn kind(&self) -> RuleKind;

    /// Human-readable description of what this rule reports.
    fn description(&self) -> &'static str;

    /// Run the rule against the graph.
    fn check(&self, graph: &dyn FlowQuery, conf: &SubruleConfig, context: C) -> RuleOutcome<C>;
}
