#![forbid(unsafe_code)]

//! Decision-tree model, markup reader and navigator (headless).
//!
//! Design goals:
//! - the page markup stays the source of truth for the tree shape (`data-next` / `data-result`)
//! - recommendation content is compiled in and looked up through a closed [`ResultKey`] enum
//! - every user-facing lookup is total: unknown targets are ignored, unknown keys fall back

pub mod catalog;
pub mod error;
pub mod markup;
pub mod navigator;
pub mod tree;

pub use catalog::{
    NOT_FOUND, ResultData, ResultKey, Service, ServiceDetail, UnknownResultKey, resolve,
    service_detail,
};
pub use error::{Error, Result};
pub use markup::parse_tree;
pub use navigator::{IgnoreReason, Navigator, NavigatorState, Transition};
pub use tree::{DecisionOption, DecisionTree, Diagnostic, Edge, Node, NodeId};

/// Id of the node the page starts on.
pub const DEFAULT_START_NODE: &str = "start-node";

/// Id of the container that receives rendered recommendations.
pub const DEFAULT_RESULTS_PANEL: &str = "results";

#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    pub strict: bool,
}

impl ParseOptions {
    /// Strict parsing: malformed options, duplicate ids and anonymous nodes are errors.
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Lenient parsing: recover the way a browser would and log what was skipped.
    pub fn lenient() -> Self {
        Self { strict: false }
    }
}

#[cfg(test)]
mod tests;
