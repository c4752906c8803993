//! Confirmation gate: a yes/no question as an awaitable decision.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use gatehouse_core::confirmation::{
    Confirmation, ConfirmationRequest, DismissReason, ModalPresenter, ModalRef,
};
use tokio::sync::oneshot;

/// Opens confirmation modals. Performs no action on its own; callers check
/// the outcome before doing anything irreversible.
#[derive(Clone)]
pub struct ConfirmationGate {
    presenter: Arc<dyn ModalPresenter>,
}

impl ConfirmationGate {
    pub fn new(presenter: Arc<dyn ModalPresenter>) -> Self {
        Self { presenter }
    }

    /// Puts `request` in front of the user.
    ///
    /// ```ignore
    /// let request = ConfirmationRequest::new("Delete item?").with_accept_label("Delete");
    /// if gate.ask(request).await.is_confirmed() {
    ///     dispatcher.delete("/items/42").await?;
    /// }
    /// ```
    pub fn ask(&self, request: ConfirmationRequest) -> ConfirmationHandle {
        let (modal, receiver) = ModalRef::channel();
        let dialog = request.into_dialog();

        tracing::debug!("[ConfirmationGate] Asking: {}", dialog.message);
        self.presenter.open(dialog, modal);

        ConfirmationHandle { receiver }
    }

    /// Shorthand for a question with default headline and labels.
    pub fn ask_question(&self, question: impl Into<String>) -> ConfirmationHandle {
        self.ask(ConfirmationRequest::new(question))
    }
}

/// Resolves once with the user's decision.
///
/// If the presenter drops the modal without closing it, the handle resolves
/// to `NotConfirmed(Abandoned)` instead of waiting forever. Dropping the
/// handle discards the decision.
#[must_use = "a confirmation has no effect unless its outcome is checked"]
pub struct ConfirmationHandle {
    receiver: oneshot::Receiver<Confirmation>,
}

impl Future for ConfirmationHandle {
    type Output = Confirmation;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver).poll(cx).map(|result| {
            result.unwrap_or(Confirmation::NotConfirmed(DismissReason::Abandoned))
        })
    }
}
