//! Flow size limit.

use crate::config::SubruleConfig;
use crate::graph::FlowQuery;
use crate::models::Finding;
use crate::rules::base::{Rule, RuleKind, RuleOutcome};

/// Default member-count limit for one flow.
pub const DEFAULT_MAX_FLOW_SIZE: usize = 100;

/// Reports flows that have grown past the configured node count.
///
/// The limit comes from the sub-rule entry's `maxSize`, falling back to
/// [`DEFAULT_MAX_FLOW_SIZE`]. A flow at exactly the limit passes.
pub struct FlowSizeRule;

impl<C> Rule<C> for FlowSizeRule {
    fn kind(&self) -> RuleKind {
        RuleKind::FlowSize
    }

    fn description(&self) -> &'static str {
        "Flags flows with more nodes than the configured limit"
    }

    fn check(&self, graph: &dyn FlowQuery, conf: &SubruleConfig, context: C) -> RuleOutcome<C> {
        let max_size = conf.max_size.unwrap_or(DEFAULT_MAX_FLOW_SIZE);

        let findings = graph
            .flows()
            .into_iter()
            .filter(|flow| flow.nodes.len() > max_size)
            .map(|flow| Finding::warn("core", "flowsize", vec![flow.id], "too large flow size"))
            .collect();

        RuleOutcome::new(findings, context)
    }
}
