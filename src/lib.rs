//! Graph-powered lint engine for visual dataflow programs.
//!
//! flowlint walks a directed graph of wired nodes grouped into named flows
//! and reports structural defects: cyclic wiring that can spin forever,
//! flows that have grown past a size limit, function nodes without names,
//! and HTTP request/response nodes missing their paired counterpart.
//!
//! The crate is a library. Hosts build a [`graph::FlowStore`] (or implement
//! [`graph::FlowQuery`] over their own graph), describe which rules to run
//! in a [`config::LintConfig`], and call [`check`]:
//!
//! ```
//! use flowlint::config::LintConfig;
//! use flowlint::graph::{FlowNode, FlowStore};
//!
//! let mut store = FlowStore::new();
//! store.add_flow("tab1", Some("main"));
//! store.add_node("tab1", FlowNode::new("a", "inject"));
//! store.add_node("tab1", FlowNode::new("b", "function"));
//! store.wire("a", "b");
//! store.wire("b", "a");
//!
//! let config = LintConfig::with_subrules(["loop", "no-func-name"]);
//! let report = flowlint::check(&store, &config, ());
//! assert_eq!(report.findings.len(), 2);
//! ```
//!
//! Parsing a serialized program definition into a graph, registering the
//! linter with an editor plugin host, and formatting findings for display
//! all live outside this crate.

pub mod config;
pub mod graph;
pub mod models;
pub mod rules;

pub use models::{Finding, FindingsSummary, Severity};
pub use rules::{check, CheckReport, Rule, RuleEngine, RuleKind, RuleOutcome};
