use serde::{Deserialize, Serialize};

/// Where a `section[id]` sits on the page, as measured by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionLayout {
    pub id: String,
    pub top: f64,
}

impl SectionLayout {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// The section the reader is in: the last one, in page order, whose top minus `offset` is at or
/// above `scroll_y`. `None` above every section.
pub fn active_section(sections: &[SectionLayout], scroll_y: f64, offset: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| scroll_y >= section.top - offset)
        .map(|section| section.id.as_str())
}
