//! Transient notice queue.

use super::{AttendoApp, ToastMessage, TOAST_LIMIT, TOAST_TTL};
use std::time::Instant;
use tracing::info;

impl AttendoApp {
    /// Queue a notice; a repeat of the newest notice only extends its lifetime.
    pub(super) fn push_toast(&mut self, text: impl Into<String>) {
        let text = text.into();
        info!(target: "attendo_gui::notice", "{}", text);
        let now = Instant::now();
        if let Some(last) = self.toasts.back_mut() {
            if last.text == text {
                last.expires_at = now + TOAST_TTL;
                return;
            }
        }
        self.toasts.push_back(ToastMessage {
            text,
            expires_at: now + TOAST_TTL,
        });
        while self.toasts.len() > TOAST_LIMIT {
            self.toasts.pop_front();
        }
    }

    pub(super) fn expire_toasts(&mut self, now: Instant) {
        while self
            .toasts
            .front()
            .map(|toast| now >= toast.expires_at)
            .unwrap_or(false)
        {
            self.toasts.pop_front();
        }
    }

    #[cfg(test)]
    pub(super) fn toast_texts(&self) -> Vec<&str> {
        self.toasts.iter().map(|toast| toast.text.as_str()).collect()
    }
}
