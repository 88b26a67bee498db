#![forbid(unsafe_code)]

//! `signpost` is a headless decision-tree recommendation widget.
//!
//! The page markup declares the tree; [`DecisionTreeController`] owns the navigation state and
//! the page utilities around it, and renders snapshots back onto the markup. Nothing here touches
//! a real DOM or clock: hosts feed [`UiEvent`]s in and apply [`Effect`]s and page snapshots out.

pub use signpost_core::*;

pub mod clipboard;
pub mod config;
pub mod controller;
pub mod events;
pub mod schedule;
pub mod scroll_spy;
pub mod toast;

pub mod render {
    pub use signpost_render::{
        Error, NavHighlight, PageView, PillarState, Result, ToastView, apply_view, render_result,
    };
}

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard};
pub use config::ControllerConfig;
pub use controller::{ControllerError, ControllerState, DecisionTreeController};
pub use events::{Effect, UiEvent};
pub use schedule::{Scheduler, Timer, TimerId, TimerKind};
pub use scroll_spy::{SectionLayout, active_section};
pub use toast::{Toast, ToastId, ToastPhase, Toasts};

#[cfg(test)]
mod tests;
