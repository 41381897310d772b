use std::sync::Arc;

use async_trait::async_trait;
use contact_hub_core::contact::{Contact, ContactForm};
use contact_hub_core::util::date::DateTimeUtc;
use tokio::sync::RwLock;

use super::contact_service::ContactServiceApi;
use super::notification_service::NotificationServiceApi;
use super::{Error, Result};
use crate::util;

#[cfg(test)]
use mockall::automock;

/// The target of an open edit session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditSessionState {
    /// A new contact is being put together; submitting generates a fresh
    /// id and creation date.
    Creating,
    /// An existing contact is being changed; submitting keeps its id and
    /// creation date.
    Editing { contact_id: String },
}

/// One open create-or-edit flow.
struct OpenSession {
    state: EditSessionState,
    form: ContactForm,
    /// encoded avatar image for the next submission; replaced once the
    /// out-of-scope file reader has finished
    pending_avatar: Option<String>,
    /// creation date carried over from the contact being edited
    date_added: Option<DateTimeUtc>,
}

/// The edit session mediates between raw form input and validated contact
/// records in the store.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EditSessionServiceApi: Send + Sync {
    /// Opens a session for a new contact, clearing any prior form state.
    async fn begin_create(&self);

    /// Opens a session for an existing contact and returns the
    /// pre-populated form.
    async fn begin_edit(&self, id: &str) -> Result<ContactForm>;

    /// The form state of the open session, if any.
    async fn form(&self) -> Option<ContactForm>;

    /// Replaces the avatar value the next submission will store. Ignored
    /// while no session is open.
    async fn set_pending_avatar(&self, avatar: Option<String>);

    /// Validates the form and writes the resulting contact to the store.
    ///
    /// Missing required fields are reported as a validation error naming
    /// every one of them; the session keeps its state (including the
    /// rejected input) and the store is untouched. On success the session
    /// is closed and the stored contact returned.
    async fn submit(&self, form: ContactForm) -> Result<Contact>;

    /// Closes the session without touching the store.
    async fn cancel(&self);

    /// The state of the open session, if any.
    async fn state(&self) -> Option<EditSessionState>;
}

#[derive(Clone)]
pub struct EditSessionService {
    contact_service: Arc<dyn ContactServiceApi>,
    notification_service: Arc<dyn NotificationServiceApi>,
    session: Arc<RwLock<Option<OpenSession>>>,
}

impl EditSessionService {
    pub fn new(
        contact_service: Arc<dyn ContactServiceApi>,
        notification_service: Arc<dyn NotificationServiceApi>,
    ) -> Self {
        Self {
            contact_service,
            notification_service,
            session: Arc::new(RwLock::new(None)),
        }
    }
}

fn none_if_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[async_trait]
impl EditSessionServiceApi for EditSessionService {
    async fn begin_create(&self) {
        *self.session.write().await = Some(OpenSession {
            state: EditSessionState::Creating,
            form: ContactForm::default(),
            pending_avatar: None,
            date_added: None,
        });
    }

    async fn begin_edit(&self, id: &str) -> Result<ContactForm> {
        let contact = self
            .contact_service
            .get_contact(id)
            .await?
            .ok_or(Error::NotFound)?;
        let form = ContactForm::from(&contact);
        *self.session.write().await = Some(OpenSession {
            state: EditSessionState::Editing {
                contact_id: contact.id.clone(),
            },
            form: form.clone(),
            pending_avatar: contact.avatar.clone(),
            date_added: Some(contact.date_added),
        });
        Ok(form)
    }

    async fn form(&self) -> Option<ContactForm> {
        self.session.read().await.as_ref().map(|s| s.form.clone())
    }

    async fn set_pending_avatar(&self, avatar: Option<String>) {
        if let Some(open) = self.session.write().await.as_mut() {
            open.pending_avatar = avatar;
        }
    }

    async fn submit(&self, form: ContactForm) -> Result<Contact> {
        let mut session = self.session.write().await;
        let open = session.as_mut().ok_or(Error::InvalidOperation)?;

        let name = form.name.trim();
        let phone = form.phone.trim();
        let mut missing = vec![];
        if name.is_empty() {
            missing.push("name");
        }
        if phone.is_empty() {
            missing.push("phone");
        }
        if !missing.is_empty() {
            // keep what the user typed; the session stays open
            open.form = form;
            return Err(Error::Validation(format!(
                "Please fill in all required fields: {}",
                missing.join(", ")
            )));
        }

        let (id, date_added) = match &open.state {
            EditSessionState::Editing { contact_id } => (
                contact_id.clone(),
                open.date_added.unwrap_or_else(util::date::now),
            ),
            EditSessionState::Creating => (util::get_uuid_v4().to_string(), util::date::now()),
        };

        let contact = Contact {
            id,
            name: name.to_string(),
            phone: phone.to_string(),
            email: none_if_empty(form.email.trim()),
            address: none_if_empty(form.address.trim()),
            group: form.group.trim().parse().ok(),
            notes: none_if_empty(form.notes.trim()),
            is_favorite: form.is_favorite,
            is_emergency: form.is_emergency,
            avatar: open.pending_avatar.clone(),
            date_added,
        };

        self.contact_service.upsert(contact.clone()).await?;
        *session = None;
        drop(session);

        self.notification_service
            .notify("Contact saved successfully!")
            .await;
        Ok(contact)
    }

    async fn cancel(&self) {
        *self.session.write().await = None;
    }

    async fn state(&self) -> Option<EditSessionState> {
        self.session.read().await.as_ref().map(|s| s.state.clone())
    }
}
