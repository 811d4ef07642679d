//! Terminal implementations of the form's notifier and host events.

use std::io::{self, BufRead, Write};

use marquee_form::{FormEvents, NoticeKind, Notifier};

/// Prints notifications as they happen.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Success => println!("✓ {}", message),
            NoticeKind::Error => eprintln!("✗ {}", message),
        }
    }
}

/// Form host for a one-shot command.
///
/// There is no window to close, so lifecycle events are only logged.
/// Discarding unsaved input is confirmed on the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleEvents;

impl FormEvents for ConsoleEvents {
    fn form_dirty(&self) {
        log::debug!("Movie draft has unsaved input");
    }

    fn close(&self) {
        log::debug!("Movie form closed");
    }

    fn creation_reset(&self) {
        log::debug!("Creation flow reset");
    }

    fn confirm_discard(&self) -> bool {
        let stdin = io::stdin();
        confirm(&mut stdin.lock(), "Discard the unsaved movie draft? [y/N] ")
    }
}

/// Ask a yes/no question; anything but an explicit yes means no.
fn confirm(input: &mut impl BufRead, prompt: &str) -> bool {
    eprint!("{}", prompt);
    if io::stderr().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(0) | Err(_) => false,
        Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
    }
}
