mod navigator;

/// The full demo page shipped with the workspace.
pub(crate) const FIXTURE_PAGE: &str = include_str!("../../../../fixtures/decision-tree.html");

/// A page small enough to reason about in a single test.
pub(crate) const SMALL_PAGE: &str = r#"<section id="decision-tree">
  <div class="decision-node active" id="start-node">
    <button class="option-btn" data-next="n2">Go on</button>
    <button class="option-btn" data-result="opensearch-basic">Basic search</button>
    <button class="option-btn" data-result="does-not-exist">Mystery</button>
    <button class="option-btn" data-next="nowhere">Broken link</button>
  </div>
  <div class="decision-node" id="n2">
    <button class="option-btn" data-result="legal-rag">Legal</button>
    <button class="back-btn" data-back="start-node">Back</button>
  </div>
  <div id="results"></div>
</section>"#;
