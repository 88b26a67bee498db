use crate::catalog::ResultKey;
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Where selecting an option leads: another node, or a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum Edge {
    Next(NodeId),
    Result(String),
}

impl Edge {
    pub fn next(id: impl Into<String>) -> Self {
        Self::Next(NodeId::new(id))
    }

    pub fn result(key: impl Into<String>) -> Self {
        Self::Result(key.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionOption {
    pub edge: Edge,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: NodeId,
    pub options: Vec<DecisionOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back: Option<NodeId>,
    /// The markup shipped this node with the `active` class.
    pub marked_active: bool,
}

impl Node {
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            options: Vec::new(),
            back: None,
            marked_active: false,
        }
    }
}

/// Everything the page declares that the controller can act on.
///
/// Nodes keep document order. Options that appear before the first decision node are kept in
/// `detached_options`; they are still selectable.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionTree {
    pub nodes: IndexMap<NodeId, Node>,
    pub detached_options: Vec<DecisionOption>,
    pub sections: Vec<String>,
    pub nav_links: Vec<String>,
    pub pillars: Vec<String>,
    pub service_cards: Vec<String>,
    pub has_nav_toggle: bool,
    pub has_nav_menu: bool,
    #[serde(skip)]
    pub element_ids: FxHashSet<String>,
}

impl DecisionTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Whether any element of the page (not only decision nodes) carries this id.
    pub fn has_element(&self, id: &str) -> bool {
        self.element_ids.contains(id) || self.nodes.contains_key(id)
    }

    /// Inserts a node, keeping the first one when the id is already taken.
    pub fn insert_node(&mut self, node: Node) -> bool {
        if self.nodes.contains_key(node.id.as_str()) {
            return false;
        }
        self.element_ids.insert(node.id.as_str().to_string());
        self.nodes.insert(node.id.clone(), node);
        true
    }

    /// All options in document order, paired with the node that owns them.
    pub fn options(&self) -> impl Iterator<Item = (Option<&NodeId>, &DecisionOption)> {
        self.detached_options
            .iter()
            .map(|option| (None, option))
            .chain(
                self.nodes
                    .values()
                    .flat_map(|node| node.options.iter().map(move |option| (Some(&node.id), option))),
            )
    }

    pub fn result_keys(&self) -> impl Iterator<Item = &str> {
        self.options().filter_map(|(_, option)| match &option.edge {
            Edge::Result(key) => Some(key.as_str()),
            Edge::Next(_) => None,
        })
    }

    /// Load-time checks. Nothing here stops the page from working; each finding is a place
    /// where a click would silently do nothing or show the fallback recommendation.
    pub fn validate(&self, start: &str, results_panel: &str) -> Vec<Diagnostic> {
        let mut out = Vec::new();

        if !self.contains_node(start) {
            out.push(Diagnostic::MissingStartNode {
                start: NodeId::new(start),
            });
        }
        if !self.has_element(results_panel) {
            out.push(Diagnostic::MissingResultsPanel {
                id: results_panel.to_string(),
            });
        }

        for (owner, option) in self.options() {
            match &option.edge {
                Edge::Next(target) if !self.contains_node(target.as_str()) => {
                    out.push(Diagnostic::DanglingNext {
                        node: owner.cloned(),
                        target: target.clone(),
                    });
                }
                Edge::Result(key) if key.parse::<ResultKey>().is_err() => {
                    out.push(Diagnostic::UnknownResultKey {
                        node: owner.cloned(),
                        key: key.clone(),
                    });
                }
                _ => {}
            }
        }

        for node in self.nodes.values() {
            if let Some(target) = &node.back {
                if !self.contains_node(target.as_str()) {
                    out.push(Diagnostic::DanglingBack {
                        node: node.id.clone(),
                        target: target.clone(),
                    });
                }
            }
        }

        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    MissingStartNode {
        start: NodeId,
    },
    MissingResultsPanel {
        id: String,
    },
    DanglingNext {
        node: Option<NodeId>,
        target: NodeId,
    },
    DanglingBack {
        node: NodeId,
        target: NodeId,
    },
    UnknownResultKey {
        node: Option<NodeId>,
        key: String,
    },
}

fn owner_label(node: Option<&NodeId>) -> String {
    match node {
        Some(id) => format!("node `{id}`"),
        None => "a detached option".to_string(),
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingStartNode { start } => {
                write!(f, "start node `{start}` is not declared")
            }
            Diagnostic::MissingResultsPanel { id } => {
                write!(f, "results container `#{id}` is missing")
            }
            Diagnostic::DanglingNext { node, target } => write!(
                f,
                "{} points at unknown node `{target}`",
                owner_label(node.as_ref())
            ),
            Diagnostic::DanglingBack { node, target } => {
                write!(f, "back control of node `{node}` points at unknown node `{target}`")
            }
            Diagnostic::UnknownResultKey { node, key } => write!(
                f,
                "{} references unknown result key `{key}`",
                owner_label(node.as_ref())
            ),
        }
    }
}
