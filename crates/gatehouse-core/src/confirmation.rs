//! Confirmation request/result model and the modal presentation facility.
//!
//! A presenter receives a [`ConfirmDialog`] together with a [`ModalRef`] and
//! closes the ref exactly once. Dropping an unclosed ref counts as an
//! abandoned dialog, so the waiting side always resolves.

use tokio::sync::oneshot;

pub const DEFAULT_DECLINE_LABEL: &str = "Cancel";
pub const DEFAULT_ACCEPT_LABEL: &str = "OK";

/// A yes/no question to put in front of the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRequest {
    pub question: String,
    pub headline: Option<String>,
    pub decline_label: Option<String>,
    pub accept_label: Option<String>,
}

impl ConfirmationRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            headline: None,
            decline_label: None,
            accept_label: None,
        }
    }

    pub fn with_headline(mut self, headline: impl Into<String>) -> Self {
        self.headline = Some(headline.into());
        self
    }

    pub fn with_decline_label(mut self, label: impl Into<String>) -> Self {
        self.decline_label = Some(label.into());
        self
    }

    pub fn with_accept_label(mut self, label: impl Into<String>) -> Self {
        self.accept_label = Some(label.into());
        self
    }

    /// Resolves the labels into what the modal shows. Empty labels fall
    /// back to the defaults.
    pub fn into_dialog(self) -> ConfirmDialog {
        fn label(value: Option<String>, default: &str) -> String {
            value
                .filter(|label| !label.is_empty())
                .unwrap_or_else(|| default.to_string())
        }

        ConfirmDialog {
            message: self.question,
            headline: self.headline,
            decline: label(self.decline_label, DEFAULT_DECLINE_LABEL),
            accept: label(self.accept_label, DEFAULT_ACCEPT_LABEL),
        }
    }
}

/// What the modal renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub message: String,
    pub headline: Option<String>,
    pub decline: String,
    pub accept: String,
}

/// How a modal was closed without accepting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    Declined,
    Backdrop,
    Escape,
    /// The presenter dropped the modal without closing it.
    Abandoned,
}

/// The decision a caller awaits before an irreversible action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    NotConfirmed(DismissReason),
}

impl Confirmation {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

/// Closing side of an open modal. Consumed by the first close.
#[derive(Debug)]
pub struct ModalRef {
    sender: oneshot::Sender<Confirmation>,
}

impl ModalRef {
    /// Creates a connected pair of modal ref and result receiver.
    pub fn channel() -> (Self, oneshot::Receiver<Confirmation>) {
        let (sender, receiver) = oneshot::channel();
        (Self { sender }, receiver)
    }

    /// True once the asking side has stopped waiting for the decision.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    /// The accept action was chosen.
    pub fn accept(self) {
        self.close(Confirmation::Confirmed);
    }

    pub fn dismiss(self, reason: DismissReason) {
        self.close(Confirmation::NotConfirmed(reason));
    }

    fn close(self, result: Confirmation) {
        // The caller may have discarded its handle; a late close is ignored.
        let _ = self.sender.send(result);
    }
}

/// Host facility that shows a confirmation modal.
///
/// `open` must not block; the presenter keeps the `ModalRef` until the user
/// decides.
pub trait ModalPresenter: Send + Sync {
    fn open(&self, dialog: ConfirmDialog, modal: ModalRef);
}
