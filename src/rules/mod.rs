//! Lint rules and the dispatch engine.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      RuleEngine                         │
//! │  - Holds the registered rules                           │
//! │  - Resolves configured names to RuleKind                │
//! │  - Runs sub-rules sequentially, threading the context   │
//! │  - Concatenates findings in configured order            │
//! └─────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                      Rule trait                         │
//! │  - kind(): closed RuleKind tag                          │
//! │  - description(): what this rule reports                │
//! │  - check(graph, conf, cxt): findings + context          │
//! └─────────────────────────────────────────────────────────┘
//!            │              │              │           │
//!            ▼              ▼              ▼           ▼
//!       FlowSizeRule   FuncNameRule   HttpPairRule  LoopRule
//! ```
//!
//! Configured names that parse to no registered kind are skipped; an
//! unknown rule is a forward-compatible no-op, never a failure.

mod base;
mod engine;

mod flow_size;
mod func_name;
mod http_pair;
mod loop_detection;

pub use base::{CheckReport, Rule, RuleKind, RuleOutcome};
pub use engine::{check, RuleEngine};

pub use flow_size::{FlowSizeRule, DEFAULT_MAX_FLOW_SIZE};
pub use func_name::FuncNameRule;
pub use http_pair::HttpPairRule;
pub use loop_detection::{enumerate_loops, LoopRule};
