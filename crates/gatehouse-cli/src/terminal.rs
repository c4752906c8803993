//! Terminal implementations of the UI facilities the components talk to.

use colored::{ColoredString, Colorize};
use gatehouse_core::confirmation::{ConfirmDialog, DismissReason, ModalPresenter, ModalRef};
use gatehouse_core::navigation::Navigator;
use gatehouse_core::notification::{Severity, Toast, ToastDisplay};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Prints toasts to stderr, coloured by severity.
pub struct TerminalToastDisplay;

impl TerminalToastDisplay {
    fn paint(toast: &Toast) -> ColoredString {
        let message = toast.message.as_str();
        match toast.status {
            Some(Severity::Success) => message.green(),
            Some(Severity::Warn) => message.yellow().bold(),
            Some(Severity::Primary) => message.blue(),
            Some(Severity::Accent) => message.magenta(),
            None => message.normal(),
        }
    }
}

impl ToastDisplay for TerminalToastDisplay {
    fn show(&self, toast: Toast) {
        tracing::debug!("[Terminal] Toast {} ({})", toast.id, toast.classes.join(" "));
        eprintln!("{} {}", Self::paint(&toast), format!("[{}]", toast.action_label).dimmed());
    }
}

/// A terminal has no router; route changes are reported instead.
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: &str) {
        tracing::info!("[Terminal] Navigate to {}", route);
        eprintln!("{}", format!("-> {}", route).dimmed());
    }
}

/// Asks the confirmation question on the terminal.
///
/// Typing the accept label (or `y`/`yes`) accepts; any other answer
/// declines. Ctrl-C and Ctrl-D count as escaping the dialog.
pub struct TerminalModalPresenter;

impl TerminalModalPresenter {
    fn prompt(dialog: &ConfirmDialog) -> String {
        format!(
            "{} [{}/{}] ",
            dialog.message, dialog.accept, dialog.decline
        )
    }

    fn answer(dialog: &ConfirmDialog, modal: ModalRef) {
        if let Some(ref headline) = dialog.headline {
            eprintln!("{}", headline.bold());
        }

        let mut editor = match DefaultEditor::new() {
            Ok(editor) => editor,
            Err(e) => {
                tracing::error!("[Terminal] Failed to open prompt: {}", e);
                return;
            }
        };

        match editor.readline(&Self::prompt(dialog)) {
            Ok(line) if is_acceptance(&line, &dialog.accept) => modal.accept(),
            Ok(_) => modal.dismiss(DismissReason::Declined),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                modal.dismiss(DismissReason::Escape)
            }
            Err(e) => tracing::error!("[Terminal] Prompt failed: {}", e),
        }
    }
}

impl ModalPresenter for TerminalModalPresenter {
    fn open(&self, dialog: ConfirmDialog, modal: ModalRef) {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn_blocking(move || Self::answer(&dialog, modal));
            }
            Err(_) => Self::answer(&dialog, modal),
        }
    }
}

/// Accepts every dialog without prompting (`--yes`).
pub struct AssumeYesPresenter;

impl ModalPresenter for AssumeYesPresenter {
    fn open(&self, dialog: ConfirmDialog, modal: ModalRef) {
        tracing::info!("[Terminal] Assuming yes for: {}", dialog.message);
        modal.accept();
    }
}

fn is_acceptance(line: &str, accept_label: &str) -> bool {
    let answer = line.trim();
    answer.eq_ignore_ascii_case(accept_label)
        || answer.eq_ignore_ascii_case("y")
        || answer.eq_ignore_ascii_case("yes")
}
