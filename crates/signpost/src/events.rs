use serde::Serialize;
use signpost_core::{Edge, NodeId};

/// A user action forwarded by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    SelectOption(Edge),
    Back(NodeId),
    StartOver,
    NavTitle,
    /// Click on an in-page link; carries the raw `href`.
    Anchor(String),
    ServiceCard(String),
    Pillar(String),
    NavToggle,
    /// Vertical scroll position in pixels.
    Scroll(f64),
    /// Milliseconds elapsed since the previous tick.
    Tick(u64),
}

/// Work the host has to do on the real page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    ScrollIntoView { target: String },
}
