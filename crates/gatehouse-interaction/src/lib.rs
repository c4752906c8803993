//! Request, notification, session and confirmation behaviour on top of the
//! facility traits in `gatehouse-core`.

pub mod authenticator;
pub mod confirmation_gate;
pub mod dispatcher;
pub mod http_transport;
pub mod notification_broker;
pub mod session_store;
pub mod toast_tray;

pub use crate::authenticator::DemoAuthenticator;
pub use crate::confirmation_gate::{ConfirmationGate, ConfirmationHandle};
pub use crate::dispatcher::{GetOptions, RequestDispatcher};
pub use crate::http_transport::ReqwestTransport;
pub use crate::notification_broker::NotificationBroker;
pub use crate::session_store::{SessionRoutes, SessionStore};
pub use crate::toast_tray::ToastTray;
