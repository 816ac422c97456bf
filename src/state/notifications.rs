//! Stacked, dismissible notification banners.
//!
//! Each notification carries its own id so expiry timers and close buttons
//! remove exactly one entry, regardless of what else was pushed meanwhile.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

/// Visual severity of a notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    Success,
    #[default]
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Parse a severity name as used by the templates. Unknown names are `Info`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "warning" | "warn" => Self::Warning,
            "error" | "danger" => Self::Error,
            _ => Self::Info,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "notification notification--success",
            Self::Info => "notification notification--info",
            Self::Warning => "notification notification--warning",
            Self::Error => "notification notification--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub severity: Severity,
}

#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
}

impl NotificationsState {
    /// Append a notification and return its id.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.items.push(Notification { id: id.clone(), message: message.into(), severity });
        id
    }

    /// Remove one notification. Returns whether it was still shown.
    pub fn dismiss(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }
}
