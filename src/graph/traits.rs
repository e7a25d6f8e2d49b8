//! Graph accessor trait consumed by every rule.

use super::{Flow, FlowNode};

/// Read-only query surface over a wired flow graph.
///
/// Rules receive `&dyn FlowQuery` and nothing else, so any provider that
/// can answer these queries can be linted. All queries are one-hop; rules
/// that need deeper reachability walk the graph themselves.
pub trait FlowQuery {
    /// All nodes in the graph, in a stable graph-wide order.
    fn all_nodes(&self) -> Vec<FlowNode>;

    /// Look up one node by id.
    fn node(&self, id: &str) -> Option<FlowNode>;

    /// Direct successors reachable by one wire hop.
    fn next(&self, id: &str) -> Vec<String>;

    /// One-hop predecessor set.
    fn upstream(&self, id: &str) -> Vec<String>;

    /// One-hop successor set. Defaults to [`next`](Self::next).
    fn downstream(&self, id: &str) -> Vec<String> {
        self.next(id)
    }

    /// All flows in the graph.
    fn flows(&self) -> Vec<Flow>;
}
