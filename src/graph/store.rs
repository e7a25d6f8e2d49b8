//! In-memory flow graph store.
//!
//! Pure Rust, id-keyed maps plus adjacency lists. Hosts assemble the
//! graph programmatically; how the flow definition was obtained (editor
//! export, file, network) is their concern, not this crate's.

use super::{Flow, FlowNode, FlowQuery};
use rustc_hash::FxHashMap;
use tracing::debug;

/// In-memory implementation of [`FlowQuery`].
///
/// Nodes keep insertion order so repeated lint runs over the same store
/// see the same graph-wide order.
#[derive(Debug, Default)]
pub struct FlowStore {
    nodes: FxHashMap<String, FlowNode>,
    order: Vec<String>,
    out_wires: FxHashMap<String, Vec<String>>,
    in_wires: FxHashMap<String, Vec<String>>,
    flows: Vec<Flow>,
}

impl FlowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a flow. Nodes are attached with [`add_node`](Self::add_node).
    pub fn add_flow(&mut self, id: &str, label: Option<&str>) {
        let mut flow = Flow::new(id);
        if let Some(label) = label {
            flow = flow.with_label(label);
        }
        self.flows.push(flow);
    }

    /// Add a node as a member of the given flow.
    ///
    /// An unregistered flow id creates the flow on the fly. Re-adding an
    /// existing node id replaces the node in place without growing the
    /// flow membership.
    pub fn add_node(&mut self, flow_id: &str, node: FlowNode) {
        let id = node.id.clone();
        if self.nodes.insert(id.clone(), node).is_some() {
            return;
        }
        self.order.push(id.clone());
        match self.flows.iter_mut().find(|f| f.id == flow_id) {
            Some(flow) => flow.nodes.push(id),
            None => {
                debug!(flow_id, "creating flow on first member");
                let mut flow = Flow::new(flow_id);
                flow.nodes.push(id);
                self.flows.push(flow);
            }
        }
    }

    /// Wire `src`'s output to `dst`'s input.
    pub fn wire(&mut self, src: &str, dst: &str) {
        self.out_wires
            .entry(src.to_string())
            .or_default()
            .push(dst.to_string());
        self.in_wires
            .entry(dst.to_string())
            .or_default()
            .push(src.to_string());
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn wire_count(&self) -> usize {
        self.out_wires.values().map(Vec::len).sum()
    }
}

impl FlowQuery for FlowStore {
    fn all_nodes(&self) -> Vec<FlowNode> {
        self.order
            .iter()
            .filter_map(|id| self.nodes.get(id).cloned())
            .collect()
    }

    fn node(&self, id: &str) -> Option<FlowNode> {
        self.nodes.get(id).cloned()
    }

    fn next(&self, id: &str) -> Vec<String> {
        self.out_wires.get(id).cloned().unwrap_or_default()
    }

    fn upstream(&self, id: &str) -> Vec<String> {
        self.in_wires.get(id).cloned().unwrap_or_default()
    }

    fn flows(&self) -> Vec<Flow> {
        self.flows.clone()
    }
}
