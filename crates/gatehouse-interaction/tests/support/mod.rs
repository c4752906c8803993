#![allow(dead_code)]

use async_trait::async_trait;
use gatehouse_core::confirmation::{ConfirmDialog, DismissReason, ModalPresenter, ModalRef};
use gatehouse_core::navigation::Navigator;
use gatehouse_core::notification::{Severity, Toast, ToastDisplay};
use gatehouse_core::transport::{ApiRequest, Transport, TransportError};
use gatehouse_interaction::NotificationBroker;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct RecordingDisplay {
    shown: Mutex<Vec<Toast>>,
}

impl RecordingDisplay {
    pub fn toasts(&self) -> Vec<Toast> {
        self.shown.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.toasts()
            .into_iter()
            .filter(|t| t.status == Some(Severity::Warn))
            .map(|t| t.message)
            .collect()
    }
}

impl ToastDisplay for RecordingDisplay {
    fn show(&self, toast: Toast) {
        self.shown.lock().unwrap().push(toast);
    }
}

pub fn broker() -> (NotificationBroker, Arc<RecordingDisplay>) {
    let display = Arc::new(RecordingDisplay::default());
    (NotificationBroker::new(display.clone()), display)
}

#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes.lock().unwrap().push(route.to_string());
    }
}

/// Answers requests from a queue and records what was sent.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<Value, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn replying(responses: impl IntoIterator<Item = Result<Value, TransportError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted response".to_string())))
    }
}

/// What the simulated user does with the next modal.
#[derive(Debug, Clone, Copy)]
pub enum UserAction {
    Accept,
    Dismiss(DismissReason),
    Ignore,
}

/// Plays the user: each opened modal is closed on a separate task
/// according to the script.
pub struct ScriptedPresenter {
    actions: Mutex<VecDeque<UserAction>>,
    dialogs: Mutex<Vec<ConfirmDialog>>,
}

impl ScriptedPresenter {
    pub fn new(actions: impl IntoIterator<Item = UserAction>) -> Self {
        Self {
            actions: Mutex::new(actions.into_iter().collect()),
            dialogs: Mutex::new(Vec::new()),
        }
    }

    pub fn dialogs(&self) -> Vec<ConfirmDialog> {
        self.dialogs.lock().unwrap().clone()
    }
}

impl ModalPresenter for ScriptedPresenter {
    fn open(&self, dialog: ConfirmDialog, modal: ModalRef) {
        self.dialogs.lock().unwrap().push(dialog);
        let action = self
            .actions
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(UserAction::Ignore);

        tokio::spawn(async move {
            tokio::task::yield_now().await;
            match action {
                UserAction::Accept => modal.accept(),
                UserAction::Dismiss(reason) => modal.dismiss(reason),
                UserAction::Ignore => drop(modal),
            }
        });
    }
}
