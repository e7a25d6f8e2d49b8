//! HTTP request/response pairing.
//!
//! An "http in" node must hand its message to an "http response" node and
//! a response node must be fed by a request node; a side whose wiring
//! never reaches the paired type leaves the request hanging.

use crate::config::SubruleConfig;
use crate::graph::FlowQuery;
use crate::models::Finding;
use crate::rules::base::{Rule, RuleKind, RuleOutcome};

/// Reports http-in and http-response nodes missing their counterpart.
pub struct HttpPairRule;

impl HttpPairRule {
    fn is_type(graph: &dyn FlowQuery, id: &str, node_type: &str) -> bool {
        graph.node(id).is_some_and(|n| n.node_type == node_type)
    }
}

impl<C> Rule<C> for HttpPairRule {
    fn kind(&self) -> RuleKind {
        RuleKind::HttpInResp
    }

    fn description(&self) -> &'static str {
        "Flags http-in and http-response nodes missing their counterpart"
    }

    fn check(&self, graph: &dyn FlowQuery, _conf: &SubruleConfig, context: C) -> RuleOutcome<C> {
        let nodes = graph.all_nodes();
        let mut findings = Vec::new();

        for node in nodes.iter().filter(|n| n.node_type == "http in") {
            let wired = graph.downstream(&node.id);
            if wired.is_empty()
                || !wired.iter().any(|id| Self::is_type(graph, id, "http response"))
            {
                findings.push(Finding::warn(
                    "http-in-resp",
                    "dangling-http-in",
                    vec![node.id.clone()],
                    "dangling http-in node",
                ));
            }
        }

        for node in nodes.iter().filter(|n| n.node_type == "http response") {
            let wired = graph.upstream(&node.id);
            if wired.is_empty() || !wired.iter().any(|id| Self::is_type(graph, id, "http in")) {
                findings.push(Finding::warn(
                    "http-in-resp",
                    "dangling-http-resp",
                    vec![node.id.clone()],
                    "dangling http-response node",
                ));
            }
        }

        RuleOutcome::new(findings, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{FlowNode, FlowStore};

    fn conf() -> SubruleConfig {
        SubruleConfig::named("http-in-resp")
    }

    #[test]
    fn paired_nodes_pass() {
        let mut store = FlowStore::new();
        store.add_flow("tab1", None);
        store.add_node("tab1", FlowNode::new("in1", "http in"));
        store.add_node("tab1", FlowNode::new("resp1", "http response"));
        store.wire("in1", "resp1");

        let outcome = HttpPairRule.check(&store, &conf(), ());
        assert!(outcome.findings.is_empty());
    }

    #[test]
    fn request_wired_only_to_function_is_dangling() {
        let mut store = FlowStore::new();
        store.add_flow("tab1", None);
        store.add_node("tab1", FlowNode::new("in1", "http in"));
        store.add_node("tab1", FlowNode::new("f1", "function").with_name("work"));
        store.wire("in1", "f1");

        let outcome = HttpPairRule.check(&store, &conf(), ());
        assert_eq!(outcome.findings.len(), 1);
        let finding = &outcome.findings[0];
        assert_eq!(finding.name, "dangling-http-in");
        assert_eq!(finding.rule, "http-in-resp");
        assert_eq!(finding.ids, vec!["in1"]);
        assert_eq!(finding.message, "dangling http-in node");
    }

    #[test]
    fn unwired_response_is_dangling() {
        let mut store = FlowStore::new();
        store.add_flow("tab1", None);
        store.add_node("tab1", FlowNode::new("resp1", "http response"));

        let outcome = HttpPairRule.check(&store, &conf(), ());
        assert_eq!(outcome.findings.len(), 1);
        assert_eq!(outcome.findings[0].name, "dangling-http-resp");
        assert_eq!(outcome.findings[0].message, "dangling http-response node");
    }

    #[test]
    fn unwired_request_is_dangling() {
        let mut store = FlowStore::new();
        store.add_flow("tab1", None);
        store.add_node("tab1", FlowNode::new("in1", "http in"));

        let outcome = HttpPairRule.check(&store, &conf(), ());
        assert_eq!(outcome.findings.len(), 1);
        assert_eq!(outcome.findings[0].name, "dangling-http-in");
    }

    #[test]
    fn response_fed_by_function_is_dangling() {
        let mut store = FlowStore::new();
        store.add_flow("tab1", None);
        store.add_node("tab1", FlowNode::new("f1", "function").with_name("work"));
        store.add_node("tab1", FlowNode::new("resp1", "http response"));
        store.wire("f1", "resp1");

        let outcome = HttpPairRule.check(&store, &conf(), ());
        assert_eq!(outcome.findings.len(), 1);
        assert_eq!(outcome.findings[0].name, "dangling-http-resp");
    }
}
