use crate::catalog::{ResultData, ResultKey, resolve};
use crate::tree::{DecisionTree, Edge, NodeId};
use crate::{Error, Result};
use serde::Serialize;

/// What a navigator operation did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transition {
    Moved { from: NodeId, to: NodeId },
    ShowedResult { key: String, known: bool },
    Ignored { reason: IgnoreReason },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum IgnoreReason {
    UnknownNode(NodeId),
    MissingResultsPanel(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigatorState {
    pub current: NodeId,
    pub results_visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_key: Option<String>,
}

/// The decision-tree state machine.
///
/// States are node ids; a shown recommendation is an overlay on top of the node that led to it.
/// There is no history: back controls are plain jumps and `reset` always lands on the start
/// node.
#[derive(Debug, Clone)]
pub struct Navigator {
    tree: DecisionTree,
    start: NodeId,
    results_panel: String,
    current: NodeId,
    results_visible: bool,
    result_key: Option<String>,
}

impl Navigator {
    /// Fails when the page does not declare the start node; every other lookup is checked per
    /// transition.
    pub fn new(
        tree: DecisionTree,
        start: impl Into<NodeId>,
        results_panel: impl Into<String>,
    ) -> Result<Self> {
        let start = start.into();
        if !tree.contains_node(start.as_str()) {
            return Err(Error::MissingStartNode {
                id: start.as_str().to_string(),
            });
        }
        Ok(Self {
            tree,
            current: start.clone(),
            start,
            results_panel: results_panel.into(),
            results_visible: false,
            result_key: None,
        })
    }

    pub fn tree(&self) -> &DecisionTree {
        &self.tree
    }

    pub fn start(&self) -> &NodeId {
        &self.start
    }

    pub fn results_panel(&self) -> &str {
        &self.results_panel
    }

    pub fn current(&self) -> &NodeId {
        &self.current
    }

    /// Exactly one node is active at any time: the current one.
    pub fn active_node(&self) -> &NodeId {
        &self.current
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    /// The key of the last shown recommendation, kept after the panel is hidden.
    pub fn result_key(&self) -> Option<&str> {
        self.result_key.as_deref()
    }

    /// The record behind [`Navigator::result_key`], resolved with the usual fallback.
    pub fn result(&self) -> Option<&'static ResultData> {
        self.result_key.as_deref().map(resolve)
    }

    pub fn state(&self) -> NavigatorState {
        NavigatorState {
            current: self.current.clone(),
            results_visible: self.results_visible,
            result_key: self.result_key.clone(),
        }
    }

    pub fn select(&mut self, edge: &Edge) -> Transition {
        match edge {
            Edge::Next(target) => self.go_to(target),
            Edge::Result(key) => self.show_result(key),
        }
    }

    /// Back controls jump straight to their target; they behave exactly like a `next` edge.
    pub fn back(&mut self, target: &NodeId) -> Transition {
        self.go_to(target)
    }

    pub fn reset(&mut self) -> Transition {
        let start = self.start.clone();
        self.go_to(&start)
    }

    fn go_to(&mut self, target: &NodeId) -> Transition {
        if !self.tree.contains_node(target.as_str()) {
            tracing::debug!(%target, current = %self.current, "ignoring jump to unknown node");
            return Transition::Ignored {
                reason: IgnoreReason::UnknownNode(target.clone()),
            };
        }
        let from = std::mem::replace(&mut self.current, target.clone());
        self.results_visible = false;
        Transition::Moved {
            from,
            to: target.clone(),
        }
    }

    fn show_result(&mut self, key: &str) -> Transition {
        if !self.tree.has_element(&self.results_panel) {
            tracing::debug!(key, panel = %self.results_panel, "no results container; ignoring");
            return Transition::Ignored {
                reason: IgnoreReason::MissingResultsPanel(self.results_panel.clone()),
            };
        }
        let known = key.parse::<ResultKey>().is_ok();
        if !known {
            tracing::debug!(key, "unknown result key; showing fallback recommendation");
        }
        self.results_visible = true;
        self.result_key = Some(key.to_string());
        Transition::ShowedResult {
            key: key.to_string(),
            known,
        }
    }
}
