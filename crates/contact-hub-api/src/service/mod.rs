pub mod contact_service;
pub mod edit_session_service;
pub mod notification_service;
pub mod search_service;

use crate::Config;
use crate::persistence::StoreContext;
use contact_hub_core::notification::Notification;
use contact_service::{ContactService, ContactServiceApi};
use edit_session_service::{EditSessionService, EditSessionServiceApi};
use log::error;
use notification_service::{DefaultNotificationService, NotificationServiceApi};
use search_service::{SearchService, SearchServiceApi};
use std::sync::Arc;
use thiserror::Error;

/// Generic result type
pub type Result<T> = std::result::Result<T, Error>;

/// Generic error type
#[derive(Debug, Error)]
pub enum Error {
    /// all errors originating from the persistence layer
    #[error("Persistence error: {0}")]
    Persistence(#[from] contact_hub_persistence::Error),

    /// errors for lookups of contacts that do not exist
    #[error("not found")]
    NotFound,

    /// errors stemming from trying to do invalid operations, e.g.
    /// submitting a form while no edit session is open
    #[error("invalid operation")]
    InvalidOperation,

    /// errors that stem from validation
    #[error("Validation Error: {0}")]
    Validation(String),
}

/// A dependency container for all services that are used by the application
#[derive(Clone)]
pub struct ServiceContext {
    pub config: Config,
    pub contact_service: Arc<dyn ContactServiceApi>,
    pub search_service: Arc<dyn SearchServiceApi>,
    pub edit_session_service: Arc<dyn EditSessionServiceApi>,
    pub notification_service: Arc<dyn NotificationServiceApi>,
}

impl ServiceContext {
    /// Placing a call is out of scope for this system; the stub only
    /// tells the user what a real device would do now.
    pub async fn place_call_prompt(&self, phone: &str) -> Notification {
        self.notification_service
            .notify(&format!("Calling {phone}..."))
            .await
    }

    /// Composing an email is out of scope for this system; the stub only
    /// tells the user what a real mail client would do now.
    pub async fn compose_email_prompt(&self, email: &str) -> Notification {
        self.notification_service
            .notify(&format!("Opening email to {email}..."))
            .await
    }
}

/// building up the service context dependencies here for now. Later we can
/// modularize this and make it more flexible.
pub async fn create_service_context(config: Config, stores: StoreContext) -> Result<ServiceContext> {
    let notification_service: Arc<dyn NotificationServiceApi> =
        Arc::new(DefaultNotificationService::new());

    // a broken snapshot must never prevent startup; the session then
    // simply begins with an empty collection
    let contacts = match stores.contact_store.load().await {
        Ok(contacts) => contacts,
        Err(e) => {
            error!("Error loading contacts from storage: {e}");
            vec![]
        }
    };
    let contact_service: Arc<dyn ContactServiceApi> = Arc::new(ContactService::new(
        stores.contact_store.clone(),
        notification_service.clone(),
        contacts,
    ));

    let search_service = SearchService::new(contact_service.clone());
    let edit_session_service =
        EditSessionService::new(contact_service.clone(), notification_service.clone());

    Ok(ServiceContext {
        config,
        contact_service,
        search_service: Arc::new(search_service),
        edit_session_service: Arc::new(edit_session_service),
        notification_service,
    })
}
