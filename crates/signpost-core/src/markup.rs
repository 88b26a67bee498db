//! Reads the decision tree declared in page markup.
//!
//! The page is the source of truth:
//! - `.decision-node[id]` declares a node (`class="... active"` marks the one shown first)
//! - `.option-btn` carries either `data-next` (node id) or `data-result` (result key)
//! - `.back-btn[data-back]` is the back control of the enclosing node
//!
//! Options and back controls belong to the nearest preceding decision node in document order.

use crate::tree::{DecisionOption, DecisionTree, Edge, Node, NodeId};
use crate::{Error, ParseOptions, Result};
use lol_html::{RewriteStrSettings, element, rewrite_str, text};
use std::cell::RefCell;

#[derive(Debug, Clone, Copy)]
enum OptionSlot {
    Node { node: usize, option: usize },
    Detached(usize),
}

#[derive(Debug, Default)]
struct TreeBuilder {
    tree: DecisionTree,
    current_node: Option<usize>,
    last_option: Option<OptionSlot>,
    issues: Vec<Error>,
}

impl TreeBuilder {
    fn owner(&self) -> String {
        match self.current_node.and_then(|i| self.tree.nodes.get_index(i)) {
            Some((id, _)) => format!("node `{id}`"),
            None => "the page".to_string(),
        }
    }

    fn open_node(&mut self, id: Option<String>, active: bool) {
        self.last_option = None;
        let Some(id) = id else {
            self.issues.push(Error::MissingNodeId);
            self.current_node = None;
            return;
        };

        let mut node = Node::new(id.as_str());
        node.marked_active = active;
        if self.tree.insert_node(node) {
            self.current_node = self.tree.nodes.get_index_of(id.as_str());
        } else {
            self.issues.push(Error::DuplicateNode { id });
            self.current_node = None;
        }
    }

    fn push_option(&mut self, next: Option<String>, result: Option<String>) {
        self.last_option = None;
        let index = match self.current_node.and_then(|i| self.tree.nodes.get_index(i)) {
            Some((_, node)) => node.options.len(),
            None => self.tree.detached_options.len(),
        };

        // A click handler reads `data-next` first, so it wins when both are present.
        let edge = match (next, result) {
            (Some(next), Some(_)) => {
                self.issues.push(Error::AmbiguousOption {
                    owner: self.owner(),
                    index,
                });
                Edge::next(next)
            }
            (Some(next), None) => Edge::next(next),
            (None, Some(result)) => Edge::result(result),
            (None, None) => {
                self.issues.push(Error::EmptyOption {
                    owner: self.owner(),
                    index,
                });
                return;
            }
        };

        let option = DecisionOption {
            edge,
            label: String::new(),
        };
        match self.current_node {
            Some(node_index) => {
                if let Some((_, node)) = self.tree.nodes.get_index_mut(node_index) {
                    node.options.push(option);
                    self.last_option = Some(OptionSlot::Node {
                        node: node_index,
                        option: index,
                    });
                }
            }
            None => {
                self.tree.detached_options.push(option);
                self.last_option = Some(OptionSlot::Detached(index));
            }
        }
    }

    fn push_back(&mut self, target: Option<String>) {
        let Some(target) = target else {
            self.issues.push(Error::EmptyBackTarget {
                owner: self.owner(),
            });
            return;
        };
        match self
            .current_node
            .and_then(|i| self.tree.nodes.get_index_mut(i))
        {
            Some((_, node)) => node.back = Some(NodeId::new(target)),
            None => tracing::debug!(%target, "back control outside any decision node"),
        }
    }

    fn push_label_text(&mut self, chunk: &str) {
        let option = match self.last_option {
            Some(OptionSlot::Node { node, option }) => self
                .tree
                .nodes
                .get_index_mut(node)
                .and_then(|(_, node)| node.options.get_mut(option)),
            Some(OptionSlot::Detached(option)) => self.tree.detached_options.get_mut(option),
            None => None,
        };
        if let Some(option) = option {
            option.label.push_str(chunk);
        }
    }

    fn finish(mut self, options: ParseOptions) -> Result<DecisionTree> {
        if options.strict && !self.issues.is_empty() {
            return Err(self.issues.swap_remove(0));
        }
        for issue in &self.issues {
            tracing::warn!(%issue, "recovered from malformed decision-tree markup");
        }

        let labels = self
            .tree
            .detached_options
            .iter_mut()
            .chain(self.tree.nodes.values_mut().flat_map(|n| n.options.iter_mut()));
        for option in labels {
            option.label = normalize_label(&option.label);
        }
        Ok(self.tree)
    }
}

fn normalize_label(raw: &str) -> String {
    htmlize::unescape(raw)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// `lol_html` hands out raw attribute values; decode entities the way the DOM would and treat
/// empty values as absent (a click handler sees them as falsy).
fn decode_attr(raw: Option<String>) -> Option<String> {
    raw.map(|v| htmlize::unescape(v.as_str()).into_owned())
        .filter(|v| !v.is_empty())
}

fn has_class(class_attr: Option<&str>, class: &str) -> bool {
    class_attr.is_some_and(|c| c.split_ascii_whitespace().any(|c| c == class))
}

pub fn parse_tree(html: &str, options: ParseOptions) -> Result<DecisionTree> {
    let builder = RefCell::new(TreeBuilder::default());

    let handlers = vec![
        element!("[id]", |el| {
            if let Some(id) = decode_attr(el.get_attribute("id")) {
                builder.borrow_mut().tree.element_ids.insert(id);
            }
            Ok(())
        }),
        element!(".decision-node", |el| {
            let id = decode_attr(el.get_attribute("id"));
            let active = has_class(el.get_attribute("class").as_deref(), "active");
            builder.borrow_mut().open_node(id, active);
            Ok(())
        }),
        element!(".option-btn", |el| {
            let next = decode_attr(el.get_attribute("data-next"));
            let result = decode_attr(el.get_attribute("data-result"));
            builder.borrow_mut().push_option(next, result);
            Ok(())
        }),
        text!(".option-btn", |chunk| {
            builder.borrow_mut().push_label_text(chunk.as_str());
            Ok(())
        }),
        element!(".back-btn", |el| {
            builder
                .borrow_mut()
                .push_back(decode_attr(el.get_attribute("data-back")));
            Ok(())
        }),
        element!("section[id]", |el| {
            if let Some(id) = decode_attr(el.get_attribute("id")) {
                builder.borrow_mut().tree.sections.push(id);
            }
            Ok(())
        }),
        element!(".nav-menu", |_el| {
            builder.borrow_mut().tree.has_nav_menu = true;
            Ok(())
        }),
        element!(".nav-menu a[href]", |el| {
            if let Some(href) = decode_attr(el.get_attribute("href")) {
                builder.borrow_mut().tree.nav_links.push(href);
            }
            Ok(())
        }),
        element!(".nav-toggle", |_el| {
            builder.borrow_mut().tree.has_nav_toggle = true;
            Ok(())
        }),
        element!(".pillar[data-pillar]", |el| {
            if let Some(pillar) = decode_attr(el.get_attribute("data-pillar")) {
                builder.borrow_mut().tree.pillars.push(pillar);
            }
            Ok(())
        }),
        element!(".service-card[data-service]", |el| {
            if let Some(service) = decode_attr(el.get_attribute("data-service")) {
                builder.borrow_mut().tree.service_cards.push(service);
            }
            Ok(())
        }),
    ];

    rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: handlers,
            ..RewriteStrSettings::new()
        },
    )
    .map_err(|err| Error::Markup {
        message: err.to_string(),
    })?;

    builder.into_inner().finish(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_label_collapses_whitespace_and_decodes_entities() {
        assert_eq!(
            normalize_label("\n    Search &amp; discovery\n    "),
            "Search & discovery"
        );
    }

    #[test]
    fn decode_attr_treats_empty_values_as_absent() {
        assert_eq!(decode_attr(Some(String::new())), None);
        assert_eq!(
            decode_attr(Some("rag&#45;node".to_string())),
            Some("rag-node".to_string())
        );
    }

    #[test]
    fn has_class_matches_whole_tokens_only() {
        assert!(has_class(Some("decision-node active"), "active"));
        assert!(!has_class(Some("decision-node inactive"), "active"));
        assert!(!has_class(None, "active"));
    }
}
