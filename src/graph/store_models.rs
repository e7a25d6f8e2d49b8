//! Node and flow records exposed through the graph accessor.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single unit in the dataflow graph.
///
/// `node_type` is an open tag ("function", "http in", "http response",
/// and whatever else the host palette defines), so it stays a string
/// rather than a closed enum. Attributes beyond the name live in
/// `properties`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub properties: HashMap<String, serde_json::Value>,
}

impl FlowNode {
    pub fn new(id: &str, node_type: &str) -> Self {
        Self {
            id: id.to_string(),
            node_type: node_type.to_string(),
            name: None,
            properties: HashMap::new(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_property(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(|v| v.as_str())
    }

    /// True when the node carries no usable name.
    pub fn is_unnamed(&self) -> bool {
        self.name.as_deref().map_or(true, str::is_empty)
    }
}

/// A named grouping of nodes, analogous to one tab of the visual editor.
///
/// `nodes` holds member ids in definition order; membership is exclusive
/// (a node belongs to exactly one flow).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flow {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub nodes: Vec<String>,
}

impl Flow {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            label: None,
            nodes: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }
}
