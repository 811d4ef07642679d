//! Outbound signals from the form to its controller.

/// Severity of a user-visible notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Surfaces transient messages to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NoticeKind, message: &str);
}

/// Lifecycle hooks owned by whoever hosts the form.
pub trait FormEvents: Send + Sync {
    /// The draft went from empty to holding user input.
    fn form_dirty(&self);

    /// Close the form's host (modal, screen, ...).
    fn close(&self);

    /// A movie was created; reset any creation flow around the form.
    fn creation_reset(&self) {}

    /// Ask the user whether unsaved input may be thrown away.
    fn confirm_discard(&self) -> bool;
}

/// A [`Notifier`] that writes notifications to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Success => log::info!("{}", message),
            NoticeKind::Error => log::warn!("{}", message),
        }
    }
}
