//! Transient success/failure notices shared across the console.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Notice severity, which picks the toast styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// One toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Locally unique, monotonically increasing.
    pub id: u64,
    pub level: NoticeLevel,
    pub text: String,
}

/// Queue of visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeState {
    pub items: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    pub fn success(&mut self, text: impl Into<String>) -> u64 {
        self.push(NoticeLevel::Success, text.into())
    }

    pub fn error(&mut self, text: impl Into<String>) -> u64 {
        self.push(NoticeLevel::Error, text.into())
    }

    fn push(&mut self, level: NoticeLevel, text: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notice { id, level, text });
        id
    }

    /// Remove one toast; unknown ids are ignored so a manual dismiss and the
    /// auto-dismiss timer can race harmlessly.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}
