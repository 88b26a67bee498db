use crate::clipboard::Clipboard;
use crate::config::ControllerConfig;
use crate::events::{Effect, UiEvent};
use crate::schedule::{Scheduler, TimerKind};
use crate::scroll_spy::{SectionLayout, active_section};
use crate::toast::{ToastId, Toasts};
use serde::Serialize;
use signpost_core::{
    DecisionTree, Navigator, NavigatorState, ParseOptions, Transition, parse_tree, service_detail,
};
use signpost_render::{NavHighlight, PageView, PillarState, ToastView, apply_view, render_result};

pub const COPIED_MESSAGE: &str = "Copied to clipboard!";
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy to clipboard";

#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error(transparent)]
    Core(#[from] signpost_core::Error),
    #[error(transparent)]
    Render(#[from] signpost_render::Error),
    #[error("invalid controller config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ControllerError>;

/// Everything a host may want to persist or inspect between events.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerState {
    #[serde(flatten)]
    pub navigator: NavigatorState,
    pub now_ms: u64,
    pub nav: NavHighlight,
    pub pillars: PillarState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nav_menu_open: Option<bool>,
    pub toasts: Vec<ToastView>,
    pub pending_timers: usize,
}

/// One decision-tree widget on one page.
///
/// Owns the navigator plus the page utilities that hang off the same clicks (toasts, pillar
/// highlight, scroll-spy, mobile menu). Hosts construct one per page session and pass it by
/// `&mut` to whatever dispatches events.
#[derive(Debug, Clone)]
pub struct DecisionTreeController {
    config: ControllerConfig,
    page: String,
    navigator: Navigator,
    results_html: Option<String>,
    nav: NavHighlight,
    pillars: PillarState,
    nav_menu_open: Option<bool>,
    sections: Vec<SectionLayout>,
    toasts: Toasts,
    scheduler: Scheduler,
    effects: Vec<Effect>,
}

impl DecisionTreeController {
    pub fn from_markup(
        html: impl Into<String>,
        options: ParseOptions,
        config: ControllerConfig,
    ) -> Result<Self> {
        let page = html.into();
        let tree = parse_tree(&page, options)?;
        Self::new(page, tree, config)
    }

    /// Builds a controller over an already parsed tree. `page` is the markup snapshots are
    /// rendered onto.
    pub fn new(page: String, tree: DecisionTree, config: ControllerConfig) -> Result<Self> {
        let navigator = Navigator::new(
            tree,
            config.start_node.as_str(),
            config.results_panel_id.as_str(),
        )?;
        Ok(Self {
            config,
            page,
            navigator,
            results_html: None,
            nav: NavHighlight::Untouched,
            pillars: PillarState::Untouched,
            nav_menu_open: None,
            sections: Vec::new(),
            toasts: Toasts::new(),
            scheduler: Scheduler::new(),
            effects: Vec::new(),
        })
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn tree(&self) -> &DecisionTree {
        self.navigator.tree()
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// The fragment currently held by the results container, if a result was ever shown.
    pub fn results_html(&self) -> Option<&str> {
        self.results_html.as_deref()
    }

    /// Returns the navigator transition for tree events, `None` for everything else.
    pub fn handle(&mut self, event: UiEvent) -> Option<Transition> {
        match event {
            UiEvent::SelectOption(edge) => {
                let transition = self.navigator.select(&edge);
                if matches!(transition, Transition::ShowedResult { .. }) {
                    self.render_results();
                }
                Some(transition)
            }
            UiEvent::Back(target) => Some(self.navigator.back(&target)),
            UiEvent::StartOver | UiEvent::NavTitle => {
                let transition = self.navigator.reset();
                let section = self.config.tree_section_id.clone();
                self.scroll_to(&section);
                Some(transition)
            }
            UiEvent::Anchor(href) => {
                match href.strip_prefix('#') {
                    Some(id) if !id.is_empty() => self.scroll_to(id),
                    _ => tracing::debug!(%href, "not an in-page link"),
                }
                None
            }
            UiEvent::ServiceCard(id) => {
                self.show_service_details(&id);
                None
            }
            UiEvent::Pillar(pillar) => {
                self.highlight_pillar(pillar);
                None
            }
            UiEvent::NavToggle => {
                self.toggle_nav_menu();
                None
            }
            UiEvent::Scroll(scroll_y) => {
                self.update_scroll_spy(scroll_y);
                None
            }
            UiEvent::Tick(elapsed_ms) => {
                self.advance(elapsed_ms);
                None
            }
        }
    }

    fn render_results(&mut self) {
        let Some(data) = self.navigator.result() else {
            return;
        };
        self.results_html = Some(render_result(data));
        self.effects.push(Effect::ScrollIntoView {
            target: self.navigator.results_panel().to_string(),
        });
    }

    fn scroll_to(&mut self, id: &str) {
        if !self.tree().has_element(id) {
            tracing::debug!(id, "scroll target not on the page");
            return;
        }
        self.effects.push(Effect::ScrollIntoView {
            target: id.to_string(),
        });
    }

    fn show_service_details(&mut self, id: &str) {
        match service_detail(id) {
            Some(detail) => {
                self.show_toast(format!("{}: {}", detail.title, detail.description));
            }
            None => tracing::debug!(id, "no details for service card"),
        }
    }

    fn highlight_pillar(&mut self, pillar: String) {
        self.pillars = PillarState::Highlighted(pillar);
        self.scheduler.schedule(TimerKind::PillarReset, self.config.highlight_reset_ms);
    }

    fn toggle_nav_menu(&mut self) {
        let tree = self.tree();
        if !(tree.has_nav_toggle && tree.has_nav_menu) {
            return;
        }
        self.nav_menu_open = Some(self.nav_menu_open != Some(true));
    }

    fn update_scroll_spy(&mut self, scroll_y: f64) {
        self.nav = match active_section(&self.sections, scroll_y, self.config.scroll_spy_offset) {
            Some(section) => NavHighlight::Section(section.to_string()),
            None => NavHighlight::Cleared,
        };
    }

    /// Moves the virtual clock forward and runs every timer that falls due on the way.
    pub fn advance(&mut self, elapsed_ms: u64) {
        let until = self.scheduler.now_ms().saturating_add(elapsed_ms);
        while let Some(timer) = self.scheduler.pop_due(until) {
            match timer.kind {
                TimerKind::PillarReset => self.pillars = PillarState::Idle,
                TimerKind::ToastDismiss(id) => {
                    if self.toasts.begin_leaving(id) {
                        self.scheduler
                            .schedule(TimerKind::ToastRemove(id), self.config.toast_exit_ms);
                    }
                }
                TimerKind::ToastRemove(id) => {
                    self.toasts.remove(id);
                }
            }
        }
        self.scheduler.advance_to(until);
    }

    pub fn show_toast(&mut self, message: impl Into<String>) -> ToastId {
        self.show_toast_for(message, self.config.toast_duration_ms)
    }

    pub fn show_toast_for(&mut self, message: impl Into<String>, duration_ms: u64) -> ToastId {
        let id = self.toasts.push(message);
        self.scheduler.schedule(TimerKind::ToastDismiss(id), duration_ms);
        id
    }

    /// Writes `text` through the host clipboard and reports the outcome as a toast.
    pub fn copy_to_clipboard(&mut self, clipboard: &mut dyn Clipboard, text: &str) -> ToastId {
        match clipboard.write_text(text) {
            Ok(()) => self.show_toast(COPIED_MESSAGE),
            Err(err) => {
                tracing::warn!(%err, "clipboard write failed");
                self.show_toast(COPY_FAILED_MESSAGE)
            }
        }
    }

    /// Section positions measured by the host, in page order.
    pub fn set_section_layout(&mut self, sections: Vec<SectionLayout>) {
        self.sections = sections;
    }

    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    pub fn state(&self) -> ControllerState {
        ControllerState {
            navigator: self.navigator.state(),
            now_ms: self.scheduler.now_ms(),
            nav: self.nav.clone(),
            pillars: self.pillars.clone(),
            nav_menu_open: self.nav_menu_open,
            toasts: self.toasts.views(),
            pending_timers: self.scheduler.pending().len(),
        }
    }

    pub fn view(&self) -> PageView {
        PageView {
            active_node: self.navigator.active_node().to_string(),
            results_panel: self.navigator.results_panel().to_string(),
            results_visible: self.navigator.results_visible(),
            results_html: self.results_html.clone(),
            nav: self.nav.clone(),
            pillars: self.pillars.clone(),
            nav_menu_open: self.nav_menu_open,
            toasts: self.toasts.views(),
        }
    }

    /// The page markup with the current view applied.
    pub fn render_page(&self) -> Result<String> {
        Ok(apply_view(&self.page, &self.view())?)
    }
}
