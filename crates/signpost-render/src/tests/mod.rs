
pub(crate) const FIXTURE_PAGE: &str = include_str!("../../../../fixtures/decision-tree.html");

pub(crate) fn has_class(node: roxmltree::Node<'_, '_>, class: &str) -> bool {
    node.attribute("class")
        .is_some_and(|c| c.split_ascii_whitespace().any(|c| c == class))
}

pub(crate) fn count_class(doc: &roxmltree::Document<'_>, class: &str) -> usize {
    doc.descendants().filter(|n| has_class(*n, class)).count()
}
