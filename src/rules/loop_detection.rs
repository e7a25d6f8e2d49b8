//! Wiring loop detection.
//!
//! Flags cyclic wiring that can carry a message back to a node it
//! already passed through, a possible infinite loop. Topology only: a
//! cycle whose node-internal logic would stop the message is still
//! reported.
//!
//! # Algorithm
//!
//! Every node seeds a frontier holding the one-element path `[n]`. Each
//! round extends every frontier path by each direct successor of its
//! tail; an extension that revisits an id is recorded as a loop and
//! retired, everything else stays in the frontier. Simple paths cannot
//! outgrow the node count, so every frontier drains. Recorded loops are
//! then reduced to one representative per member set, and representatives
//! dominated by a strict-subset loop from the full scan are dropped, so
//! only minimal cycles are reported.
//!
//! Worst case is exponential in branching, since every simple path is
//! explored. Fine for dataflow programs of tens to low hundreds of
//! nodes; dense, highly connected graphs are a known scaling limit.

use crate::config::SubruleConfig;
use crate::graph::FlowQuery;
use crate::models::Finding;
use crate::rules::base::{Rule, RuleKind, RuleOutcome};
use rustc_hash::FxHashSet;
use tracing::debug;

fn id_set(path: &[String]) -> FxHashSet<&str> {
    path.iter().map(String::as_str).collect()
}

/// Same members, any rotation or start point.
fn is_same_loop(a: &[String], b: &[String]) -> bool {
    id_set(a) == id_set(b)
}

/// Is `a`'s member set a strict subset of `b`'s?
fn is_strict_subset(a: &[String], b: &[String]) -> bool {
    let (a, b) = (id_set(a), id_set(b));
    a.len() < b.len() && a.is_subset(&b)
}

/// Does appending `hop` to a simple path revisit one of its ids?
fn closes_loop(path: &[String], hop: &str) -> bool {
    path.iter().any(|id| id == hop)
}

/// Enumerate minimal wiring loops in the graph.
///
/// Returned paths include the repeated closing id (`["a", "b", "a"]`); a
/// self-wire shows up as `["a", "a"]`. An acyclic graph returns nothing.
pub fn enumerate_loops(graph: &dyn FlowQuery) -> Vec<Vec<String>> {
    let mut loops: Vec<Vec<String>> = Vec::new();

    for node in graph.all_nodes() {
        let mut frontier = vec![vec![node.id.clone()]];
        while !frontier.is_empty() {
            let mut extended = Vec::new();
            for path in frontier {
                let tail = &path[path.len() - 1];
                for hop in graph.next(tail) {
                    let looped = closes_loop(&path, &hop);
                    let mut candidate = path.clone();
                    candidate.push(hop);
                    if looped {
                        loops.push(candidate);
                    } else {
                        extended.push(candidate);
                    }
                }
            }
            frontier = extended;
        }
    }

    // One representative per member set, then drop anything dominated by
    // a smaller loop from the full pre-dedup scan.
    let mut unique: Vec<Vec<String>> = Vec::new();
    for candidate in &loops {
        if !unique.iter().any(|kept| is_same_loop(kept, candidate)) {
            unique.push(candidate.clone());
        }
    }
    unique.retain(|path| !loops.iter().any(|other| is_strict_subset(other, path)));

    debug!(discovered = loops.len(), minimal = unique.len(), "loop enumeration finished");
    unique
}

/// Reports possible infinite loops formed by cyclic wiring.
pub struct LoopRule;

impl<C> Rule<C> for LoopRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Loop
    }

    fn description(&self) -> &'static str {
        "Detects cyclic wiring that may loop forever"
    }

    fn check(&self, graph: &dyn FlowQuery, _conf: &SubruleConfig, context: C) -> RuleOutcome<C> {
        let findings = enumerate_loops(graph)
            .into_iter()
            .map(|path| Finding::warn("loop", "loop", path, "possible infinite loop detected"))
            .collect();
        RuleOutcome::new(findings, context)
    }
}
