use std::sync::Arc;

use async_trait::async_trait;
use contact_hub_core::contact::Contact;
use contact_hub_persistence::ContactStoreApi;
use log::error;
use tokio::sync::RwLock;

use super::Result;
use super::notification_service::NotificationServiceApi;

#[cfg(test)]
use mockall::automock;

/// The single source of truth for the contact collection.
///
/// All reads return copies of the current in-memory state; every mutation
/// is written through to persistent storage before the operation returns.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ContactServiceApi: Send + Sync {
    /// The full collection, in insertion order.
    async fn get_contacts(&self) -> Result<Vec<Contact>>;

    /// Looks up a single contact by its id.
    async fn get_contact(&self, id: &str) -> Result<Option<Contact>>;

    /// Replaces the contact carrying the same id, or appends the contact
    /// if its id is not present yet. Assumes pre-validated input; the
    /// edit session guarantees name and phone are non-empty.
    async fn upsert(&self, contact: Contact) -> Result<()>;

    /// Removes a contact. Removing an id that is not present is a no-op,
    /// not an error. Callers must have obtained user confirmation for the
    /// destruction beforehand.
    async fn delete(&self, id: &str) -> Result<()>;

    /// Removes every contact in one step. Callers must have obtained user
    /// confirmation beforehand.
    async fn clear(&self) -> Result<()>;

    /// Flips the favorite flag of a contact. Toggles skip form validation
    /// on purpose: flipping a flag on an already validated record cannot
    /// invalidate it. No-op for an unknown id.
    async fn toggle_favorite(&self, id: &str) -> Result<()>;

    /// Flips the emergency flag of a contact. Same validation exemption
    /// as [`toggle_favorite`](Self::toggle_favorite). No-op for an
    /// unknown id.
    async fn toggle_emergency(&self, id: &str) -> Result<()>;
}

/// The contact service is responsible for managing the contact collection
#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn ContactStoreApi>,
    notification_service: Arc<dyn NotificationServiceApi>,
    contacts: Arc<RwLock<Vec<Contact>>>,
}

impl ContactService {
    /// Creates the service over the initial collection read from storage.
    pub fn new(
        store: Arc<dyn ContactStoreApi>,
        notification_service: Arc<dyn NotificationServiceApi>,
        contacts: Vec<Contact>,
    ) -> Self {
        Self {
            store,
            notification_service,
            contacts: Arc::new(RwLock::new(contacts)),
        }
    }

    /// Write-through of the current collection as one full snapshot. A
    /// failed write is logged and tolerated; the in-memory state stays
    /// authoritative for the rest of the session.
    async fn persist(&self, contacts: &[Contact]) {
        if let Err(e) = self.store.save(contacts).await {
            error!("Error saving contacts to storage: {e}");
        }
    }
}

#[async_trait]
impl ContactServiceApi for ContactService {
    async fn get_contacts(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.read().await.clone())
    }

    async fn get_contact(&self, id: &str) -> Result<Option<Contact>> {
        Ok(self
            .contacts
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn upsert(&self, contact: Contact) -> Result<()> {
        let mut contacts = self.contacts.write().await;
        match contacts.iter_mut().find(|c| c.id == contact.id) {
            Some(existing) => *existing = contact,
            None => contacts.push(contact),
        }
        self.persist(&contacts).await;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut contacts = self.contacts.write().await;
        contacts.retain(|c| c.id != id);
        self.persist(&contacts).await;
        drop(contacts);

        self.notification_service
            .notify("Contact deleted successfully")
            .await;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let mut contacts = self.contacts.write().await;
        contacts.clear();
        self.persist(&contacts).await;
        drop(contacts);

        self.notification_service
            .notify("All contacts have been cleared")
            .await;
        Ok(())
    }

    async fn toggle_favorite(&self, id: &str) -> Result<()> {
        let mut contacts = self.contacts.write().await;
        let message = match contacts.iter_mut().find(|c| c.id == id) {
            Some(contact) => {
                contact.is_favorite = !contact.is_favorite;
                if contact.is_favorite {
                    "Added to favorites"
                } else {
                    "Removed from favorites"
                }
            }
            None => return Ok(()),
        };
        self.persist(&contacts).await;
        drop(contacts);

        self.notification_service.notify(message).await;
        Ok(())
    }

    async fn toggle_emergency(&self, id: &str) -> Result<()> {
        let mut contacts = self.contacts.write().await;
        let message = match contacts.iter_mut().find(|c| c.id == id) {
            Some(contact) => {
                contact.is_emergency = !contact.is_emergency;
                if contact.is_emergency {
                    "Marked as emergency contact"
                } else {
                    "Removed from emergency contacts"
                }
            }
            None => return Ok(()),
        };
        self.persist(&contacts).await;
        drop(contacts);

        self.notification_service.notify(message).await;
        Ok(())
    }
}
