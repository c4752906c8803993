//! Composition root: builds every component once per invocation.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use colored::Colorize;
use gatehouse_core::GatehouseError;
use gatehouse_core::config::ClientConfig;
use gatehouse_core::confirmation::ModalPresenter;
use gatehouse_core::headline::Headline;
use gatehouse_infrastructure::{ConfigService, FileKeyValueStorage, GatehousePaths};
use gatehouse_interaction::{
    ConfirmationGate, DemoAuthenticator, NotificationBroker, ReqwestTransport, RequestDispatcher,
    SessionRoutes, SessionStore,
};

use crate::terminal::{
    AssumeYesPresenter, TerminalModalPresenter, TerminalNavigator, TerminalToastDisplay,
};

pub struct AppContext {
    pub config: ClientConfig,
    pub dispatcher: RequestDispatcher,
    pub session: SessionStore,
    pub gate: ConfirmationGate,
    pub headline: Headline,
}

impl AppContext {
    pub fn build(
        config_path: Option<PathBuf>,
        backend_url: Option<String>,
        assume_yes: bool,
    ) -> Result<Self> {
        let paths = GatehousePaths::default();

        let config_service = match config_path {
            Some(path) => ConfigService::with_path(path),
            None => ConfigService::new()?,
        };
        let mut config = config_service
            .get_config()
            .with_context(|| format!("Failed to load {:?}", config_service.path()))?;
        if let Some(url) = backend_url {
            config.backend_url = url;
        }
        tracing::debug!("[CLI] Backend at {}", config.backend_url);

        let session_file = match config.storage_file.clone() {
            Some(path) => path,
            None => paths.session_file().map_err(GatehouseError::from)?,
        };

        let notifications = NotificationBroker::new(Arc::new(TerminalToastDisplay))
            .with_default_duration(config.notification_duration());
        let transport = ReqwestTransport::from_config(&config)?;
        let dispatcher = RequestDispatcher::new(Arc::new(transport), notifications.clone());

        let session = SessionStore::new(
            Arc::new(FileKeyValueStorage::new(session_file)),
            Arc::new(DemoAuthenticator::new()),
            Arc::new(TerminalNavigator),
            notifications,
        )
        .with_routes(SessionRoutes::from(&config));

        let presenter: Arc<dyn ModalPresenter> = if assume_yes {
            Arc::new(AssumeYesPresenter)
        } else {
            Arc::new(TerminalModalPresenter)
        };

        Ok(Self {
            headline: Headline::new(config.app_name.clone()),
            config,
            dispatcher,
            session,
            gate: ConfirmationGate::new(presenter),
        })
    }

    /// Sets the page title and prints the resulting document title.
    pub fn announce(&mut self, title: impl Into<String>) {
        self.headline.set_title(title);
        eprintln!("{}", self.headline.document_title().bold());
    }
}
