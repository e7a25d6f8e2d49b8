//! Function node naming.

use crate::config::SubruleConfig;
use crate::graph::FlowQuery;
use crate::models::Finding;
use crate::rules::base::{Rule, RuleKind, RuleOutcome};

/// Reports "function" nodes with no name.
///
/// An absent name and an empty string both count as unnamed.
pub struct FuncNameRule;

impl<C> Rule<C> for FuncNameRule {
    fn kind(&self) -> RuleKind {
        RuleKind::NoFuncName
    }

    fn description(&self) -> &'static str {
        "Flags function nodes without a name"
    }

    fn check(&self, graph: &dyn FlowQuery, _conf: &SubruleConfig, context: C) -> RuleOutcome<C> {
        let findings = graph
            .all_nodes()
            .into_iter()
            .filter(|node| node.node_type == "function" && node.is_unnamed())
            .map(|node| {
                Finding::warn(
                    "no-func-name",
                    "no-func-name",
                    vec![node.id],
                    "function node has no name",
                )
            })
            .collect();

        RuleOutcome::new(findings, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{FlowNode, FlowStore};

    #[test]
    fn unnamed_and_empty_named_functions_are_flagged() {
        let mut store = FlowStore::new();
        store.add_flow("tab1", None);
        store.add_node("tab1", FlowNode::new("f1", "function"));
        store.add_node("tab1", FlowNode::new("f2", "function").with_name(""));
        store.add_node("tab1", FlowNode::new("f3", "function").with_name("parse"));
        store.add_node("tab1", FlowNode::new("i1", "inject"));

        let outcome = FuncNameRule.check(&store, &SubruleConfig::named("no-func-name"), ());
        let ids: Vec<&str> = outcome
            .findings
            .iter()
            .map(|f| f.ids[0].as_str())
            .collect();
        assert_eq!(ids, vec!["f1", "f2"]);
        assert_eq!(outcome.findings[0].message, "function node has no name");
        assert_eq!(outcome.findings[0].rule, "no-func-name");
    }
}
