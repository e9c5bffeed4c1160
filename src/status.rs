use std::time::{Duration, Instant};

/// How long a success message stays visible.
pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

/// Single-slot status line; every new message replaces the previous one.
#[derive(Debug, Clone, Default)]
pub struct StatusSlot {
    message: Option<(StatusMessage, Instant)>,
}

impl StatusSlot {
    pub fn show(&mut self, text: impl Into<String>, severity: Severity) {
        let text = text.into();
        log::debug!("status ({:?}): {}", severity, text);
        self.message = Some((StatusMessage { text, severity }, Instant::now()));
    }

    pub fn current(&self) -> Option<&StatusMessage> {
        self.current_at(Instant::now())
    }

    /// The visible message at `now`; success messages expire after
    /// [`SUCCESS_DISPLAY`].
    pub fn current_at(&self, now: Instant) -> Option<&StatusMessage> {
        let (message, shown_at) = self.message.as_ref()?;
        if message.severity == Severity::Success
            && now.saturating_duration_since(*shown_at) >= SUCCESS_DISPLAY
        {
            return None;
        }
        Some(message)
    }

    /// Last message regardless of expiry.
    pub fn last(&self) -> Option<&StatusMessage> {
        self.message.as_ref().map(|(message, _)| message)
    }
}
