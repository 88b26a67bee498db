use crate::controller::ControllerError;
use serde::{Deserialize, Serialize};

/// Controller settings. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ControllerConfig {
    /// Node shown first and targeted by start-over.
    pub start_node: String,
    /// Id of the container that receives the rendered recommendation.
    pub results_panel_id: String,
    /// Section scrolled to on start-over and nav title clicks.
    pub tree_section_id: String,
    pub toast_duration_ms: u64,
    /// Delay between a toast's exit animation and its removal.
    pub toast_exit_ms: u64,
    pub highlight_reset_ms: u64,
    /// How far above a section's top the scroll position may be while it still counts as current.
    pub scroll_spy_offset: f64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            start_node: signpost_core::DEFAULT_START_NODE.to_string(),
            results_panel_id: signpost_core::DEFAULT_RESULTS_PANEL.to_string(),
            tree_section_id: "decision-tree".to_string(),
            toast_duration_ms: 3000,
            toast_exit_ms: 300,
            highlight_reset_ms: 3000,
            scroll_spy_offset: 200.0,
        }
    }
}

impl ControllerConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ControllerError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        assert_eq!(
            ControllerConfig::from_json_str("{}").unwrap(),
            ControllerConfig::default()
        );
    }

    #[test]
    fn fields_are_camel_case_and_partial() {
        let cfg =
            ControllerConfig::from_json_str(r#"{"startNode":"intro","toastDurationMs":50}"#).unwrap();
        assert_eq!(cfg.start_node, "intro");
        assert_eq!(cfg.toast_duration_ms, 50);
        assert_eq!(cfg.results_panel_id, "results");
        assert_eq!(cfg.scroll_spy_offset, 200.0);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = ControllerConfig::from_json_str(r#"{"start_node":"intro"}"#).unwrap_err();
        assert!(matches!(err, ControllerError::Config(_)));
    }
}
