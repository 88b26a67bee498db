use super::{FIXTURE_PAGE, SMALL_PAGE};
use crate::*;

fn small_navigator() -> Navigator {
    let tree = parse_tree(SMALL_PAGE, ParseOptions::strict()).unwrap();
    Navigator::new(tree, DEFAULT_START_NODE, DEFAULT_RESULTS_PANEL).unwrap()
}

#[test]
fn navigator_starts_on_the_start_node_with_results_hidden() {
    let nav = small_navigator();
    assert_eq!(nav.current().as_str(), "start-node");
    assert_eq!(nav.active_node(), nav.start());
    assert!(!nav.results_visible());
    assert_eq!(nav.result_key(), None);
}

#[test]
fn navigator_requires_the_start_node() {
    let tree = parse_tree(SMALL_PAGE, ParseOptions::strict()).unwrap();
    let err = Navigator::new(tree, "intro", DEFAULT_RESULTS_PANEL).unwrap_err();
    assert_eq!(
        err,
        Error::MissingStartNode {
            id: "intro".to_string()
        }
    );
}

#[test]
fn select_next_moves_to_a_known_node_and_hides_results() {
    let mut nav = small_navigator();
    nav.select(&Edge::result("opensearch-basic"));
    assert!(nav.results_visible());

    let transition = nav.select(&Edge::next("n2"));
    assert_eq!(
        transition,
        Transition::Moved {
            from: NodeId::new("start-node"),
            to: NodeId::new("n2"),
        }
    );
    assert_eq!(nav.active_node().as_str(), "n2");
    assert!(!nav.results_visible());
    // The last recommendation is remembered even while hidden.
    assert_eq!(nav.result_key(), Some("opensearch-basic"));
}

#[test]
fn select_next_to_an_unknown_node_changes_nothing() {
    let mut nav = small_navigator();
    nav.select(&Edge::result("legal-rag"));
    let before = nav.state();

    let transition = nav.select(&Edge::next("nowhere"));
    assert_eq!(
        transition,
        Transition::Ignored {
            reason: IgnoreReason::UnknownNode(NodeId::new("nowhere")),
        }
    );
    assert_eq!(nav.state(), before);
}

#[test]
fn select_result_parks_on_the_current_node() {
    let mut nav = small_navigator();
    let transition = nav.select(&Edge::result("opensearch-basic"));
    assert_eq!(
        transition,
        Transition::ShowedResult {
            key: "opensearch-basic".to_string(),
            known: true,
        }
    );
    assert_eq!(nav.current().as_str(), "start-node");
    assert!(nav.results_visible());
    assert_eq!(
        nav.result().map(|r| r.title),
        Some("Amazon OpenSearch Service - Basic Setup")
    );
}

#[test]
fn select_unknown_result_shows_the_fallback() {
    let mut nav = small_navigator();
    let transition = nav.select(&Edge::result("does-not-exist"));
    assert_eq!(
        transition,
        Transition::ShowedResult {
            key: "does-not-exist".to_string(),
            known: false,
        }
    );
    let shown = nav.result().unwrap();
    assert_eq!(shown.title, "Recommendation Not Found");
    assert!(shown.services.is_empty());
}

#[test]
fn select_result_without_a_results_container_is_ignored() {
    let tree = parse_tree(
        r#"<div class="decision-node active" id="start-node"></div>"#,
        ParseOptions::strict(),
    )
    .unwrap();
    let mut nav = Navigator::new(tree, DEFAULT_START_NODE, DEFAULT_RESULTS_PANEL).unwrap();

    let transition = nav.select(&Edge::result("legal-rag"));
    assert_eq!(
        transition,
        Transition::Ignored {
            reason: IgnoreReason::MissingResultsPanel("results".to_string()),
        }
    );
    assert!(!nav.results_visible());
    assert_eq!(nav.result_key(), None);
}

#[test]
fn back_is_a_plain_jump_without_history() {
    let mut nav = small_navigator();
    nav.select(&Edge::next("n2"));
    nav.select(&Edge::next("n2"));

    let back = nav.tree().node("n2").unwrap().back.clone().unwrap();
    let transition = nav.back(&back);
    assert_eq!(
        transition,
        Transition::Moved {
            from: NodeId::new("n2"),
            to: NodeId::new("start-node"),
        }
    );

    // There is no stack to pop: an unknown back target leaves the state alone.
    assert!(matches!(
        nav.back(&NodeId::new("missing")),
        Transition::Ignored { .. }
    ));
    assert_eq!(nav.current().as_str(), "start-node");
}

#[test]
fn reset_returns_to_start_and_is_idempotent() {
    let mut nav = small_navigator();
    nav.select(&Edge::next("n2"));
    nav.select(&Edge::result("legal-rag"));
    assert!(nav.results_visible());

    nav.reset();
    let once = nav.state();
    nav.reset();
    let twice = nav.state();

    assert_eq!(once, twice);
    assert_eq!(once.current.as_str(), "start-node");
    assert!(!once.results_visible);
}

#[test]
fn every_known_next_edge_activates_exactly_its_target() {
    let tree = parse_tree(FIXTURE_PAGE, ParseOptions::strict()).unwrap();
    let edges = tree
        .options()
        .filter(|(_, o)| matches!(o.edge, Edge::Next(_)))
        .map(|(_, o)| o.edge.clone())
        .collect::<Vec<_>>();
    assert!(!edges.is_empty());

    let mut nav = Navigator::new(tree, DEFAULT_START_NODE, DEFAULT_RESULTS_PANEL).unwrap();
    for edge in &edges {
        let Edge::Next(target) = edge else {
            unreachable!()
        };
        nav.select(edge);
        assert_eq!(nav.active_node(), target);
        assert!(!nav.results_visible());
    }
}

#[test]
fn navigator_state_serializes_for_hosts() {
    let mut nav = small_navigator();
    nav.select(&Edge::result("legal-rag"));
    assert_eq!(
        serde_json::to_value(nav.state()).unwrap(),
        serde_json::json!({
            "current": "start-node",
            "resultsVisible": true,
            "resultKey": "legal-rag"
        })
    );
}
