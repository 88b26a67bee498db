use serde::Serialize;
use signpost_render::ToastView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ToastId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastPhase {
    Showing,
    /// Exit animation running; removed once the exit delay elapses.
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub phase: ToastPhase,
}

/// Toasts currently on the page, oldest first.
#[derive(Debug, Clone, Default)]
pub struct Toasts {
    next_id: u64,
    items: Vec<Toast>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        self.items.push(Toast {
            id,
            message: message.into(),
            phase: ToastPhase::Showing,
        });
        id
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.items.iter().find(|toast| toast.id == id)
    }

    pub fn begin_leaving(&mut self, id: ToastId) -> bool {
        match self.items.iter_mut().find(|toast| toast.id == id) {
            Some(toast) => {
                toast.phase = ToastPhase::Leaving;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: ToastId) -> bool {
        let before = self.items.len();
        self.items.retain(|toast| toast.id != id);
        self.items.len() != before
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn views(&self) -> Vec<ToastView> {
        self.items
            .iter()
            .map(|toast| ToastView {
                message: toast.message.clone(),
                leaving: toast.phase == ToastPhase::Leaving,
            })
            .collect()
    }
}
