//! Applies a controller snapshot to the page markup.
//!
//! The rewrite only touches what the snapshot owns: node and result `active` classes, the results
//! container contents, nav link highlighting, pillar styles, the mobile menu display and the toast
//! stack appended to `<body>`. Elements the page does not have are skipped.

use crate::{Error, Result};
use htmlize::escape_text;
use lol_html::html_content::{ContentType, Element};
use lol_html::{RewriteStrSettings, element, rewrite_str};
use serde::Serialize;
use std::cell::Cell;

const ACTIVE_CLASS: &str = "active";

const PILLAR_ACCENT: (&str, &str) = ("var(--matrix-accent)", "translateY(-8px) scale(1.02)");
const PILLAR_REST: (&str, &str) = ("var(--matrix-border)", "translateY(0) scale(1)");

/// Which nav link should carry `active`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "section", rename_all = "snake_case")]
pub enum NavHighlight {
    /// Leave the links as the page ships them.
    #[default]
    Untouched,
    /// Scrolled above every section.
    Cleared,
    Section(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "pillar", rename_all = "snake_case")]
pub enum PillarState {
    #[default]
    Untouched,
    Highlighted(String),
    /// Every pillar back at its resting style.
    Idle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToastView {
    pub message: String,
    pub leaving: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub active_node: String,
    pub results_panel: String,
    pub results_visible: bool,
    /// Replaces the results container contents when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results_html: Option<String>,
    pub nav: NavHighlight,
    pub pillars: PillarState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nav_menu_open: Option<bool>,
    pub toasts: Vec<ToastView>,
}

impl PageView {
    /// A snapshot that only moves the active node and leaves everything else alone.
    pub fn new(active_node: impl Into<String>, results_panel: impl Into<String>) -> Self {
        Self {
            active_node: active_node.into(),
            results_panel: results_panel.into(),
            results_visible: false,
            results_html: None,
            nav: NavHighlight::Untouched,
            pillars: PillarState::Untouched,
            nav_menu_open: None,
            toasts: Vec::new(),
        }
    }
}

fn set_class(el: &mut Element<'_, '_>, class: &str, on: bool) -> Result<()> {
    let current = el.get_attribute("class").unwrap_or_default();
    let mut tokens: Vec<&str> = current
        .split_ascii_whitespace()
        .filter(|token| *token != class)
        .collect();
    if on {
        tokens.push(class);
    }
    if tokens.is_empty() {
        el.remove_attribute("class");
        return Ok(());
    }
    set_attr(el, "class", &tokens.join(" "))
}

/// Sets one declaration of the inline `style` attribute, keeping the others in place.
fn set_style_property(el: &mut Element<'_, '_>, property: &str, value: &str) -> Result<()> {
    let current = el.get_attribute("style").unwrap_or_default();
    let mut declarations = Vec::new();
    let mut replaced = false;
    for declaration in current.split(';') {
        let Some((name, existing)) = declaration.split_once(':') else {
            continue;
        };
        let name = name.trim();
        if name.eq_ignore_ascii_case(property) {
            declarations.push(format!("{property}: {value}"));
            replaced = true;
        } else {
            declarations.push(format!("{name}: {}", existing.trim()));
        }
    }
    if !replaced {
        declarations.push(format!("{property}: {value}"));
    }
    set_attr(el, "style", &declarations.join("; "))
}

fn set_attr(el: &mut Element<'_, '_>, name: &str, value: &str) -> Result<()> {
    el.set_attribute(name, value).map_err(|err| Error::Rewrite {
        message: err.to_string(),
    })
}

fn style_pillar(el: &mut Element<'_, '_>, (border, transform): (&str, &str)) -> Result<()> {
    set_style_property(el, "border-color", border)?;
    set_style_property(el, "transform", transform)
}

fn toast_markup(toasts: &[ToastView]) -> String {
    let mut out = String::new();
    for toast in toasts {
        let (class, animation) = if toast.leaving {
            ("toast toast-leaving", "slideOutDown 0.3s ease-out")
        } else {
            ("toast", "slideInUp 0.3s ease-out")
        };
        out.push_str(r#"<div class=""#);
        out.push_str(class);
        out.push_str(r#"" role="status" style="animation: "#);
        out.push_str(animation);
        out.push_str(r#"">"#);
        out.push_str(&escape_text(&toast.message));
        out.push_str("</div>");
    }
    out
}

pub fn apply_view(html: &str, view: &PageView) -> Result<String> {
    let toasts = toast_markup(&view.toasts);
    // Later nodes reusing the active id stay inactive, matching the parser's first-wins rule.
    let activated = Cell::new(false);

    let handlers = vec![
        element!(".decision-node", |el| {
            let is_active = !activated.get()
                && el.get_attribute("id").as_deref() == Some(view.active_node.as_str());
            if is_active {
                activated.set(true);
            }
            set_class(el, ACTIVE_CLASS, is_active)?;
            Ok(())
        }),
        element!("[id]", |el| {
            if el.get_attribute("id").as_deref() != Some(view.results_panel.as_str()) {
                return Ok(());
            }
            set_class(el, ACTIVE_CLASS, view.results_visible)?;
            if let Some(fragment) = &view.results_html {
                el.set_inner_content(fragment, ContentType::Html);
            }
            Ok(())
        }),
        element!(".nav-menu a[href]", |el| {
            let on = match &view.nav {
                NavHighlight::Untouched => return Ok(()),
                NavHighlight::Cleared => false,
                NavHighlight::Section(section) => el
                    .get_attribute("href")
                    .is_some_and(|href| href.strip_prefix('#') == Some(section.as_str())),
            };
            set_class(el, ACTIVE_CLASS, on)?;
            Ok(())
        }),
        element!(".nav-menu", |el| {
            if let Some(open) = view.nav_menu_open {
                set_style_property(el, "display", if open { "flex" } else { "none" })?;
            }
            Ok(())
        }),
        element!(".pillar[data-pillar]", |el| {
            match &view.pillars {
                PillarState::Untouched => {}
                PillarState::Highlighted(pillar) => {
                    let chosen = el.get_attribute("data-pillar").as_deref() == Some(pillar.as_str());
                    style_pillar(el, if chosen { PILLAR_ACCENT } else { PILLAR_REST })?;
                }
                PillarState::Idle => style_pillar(el, PILLAR_REST)?,
            }
            Ok(())
        }),
        element!("body", |el| {
            if !toasts.is_empty() {
                el.append(&toasts, ContentType::Html);
            }
            Ok(())
        }),
    ];

    let out = rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: handlers,
            ..RewriteStrSettings::new()
        },
    )
    .map_err(|err| Error::Rewrite {
        message: err.to_string(),
    })?;

    tracing::debug!(
        active_node = %view.active_node,
        results_visible = view.results_visible,
        toasts = view.toasts.len(),
        "rewrote page"
    );
    Ok(out)
}
