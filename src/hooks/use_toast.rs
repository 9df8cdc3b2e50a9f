use dioxus::prelude::*;

/// One-shot notification content.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
}

/// Toast queue shared through context. Toasts stay until dismissed.
#[derive(Clone)]
pub struct Toasts {
    items: Signal<Vec<Toast>>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: Signal::new(Vec::new()),
        }
    }

    pub fn toast(&mut self, toast: Toast) {
        self.items.write().push(toast);
    }

    pub fn dismiss(&mut self, index: usize) {
        let mut items = self.items.write();
        if index < items.len() {
            items.remove(index);
        }
    }

    pub fn items(&self) -> Vec<Toast> {
        self.items.read().clone()
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}
