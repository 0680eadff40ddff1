use shared::Notifier;

const MAX_TOASTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Notifications waiting to be dismissed, oldest first.
#[derive(Debug, Clone, Default)]
pub struct ToastTray {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastTray {
    pub fn push(&mut self, kind: ToastKind, message: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.to_string(),
        });
        if self.toasts.len() > MAX_TOASTS {
            self.toasts.remove(0);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Notifier for ToastTray {
    fn success(&mut self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    fn error(&mut self, message: &str) {
        self.push(ToastKind::Error, message);
    }
}
