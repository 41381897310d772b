use contact_hub_core::contact::Contact;

use super::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ContactStoreApi: Send + Sync {
    /// Reads and deserializes the persisted collection. Implementations
    /// treat a missing or unreadable snapshot as an empty collection
    /// wherever possible, so a broken slot never takes the system down.
    async fn load(&self) -> Result<Vec<Contact>>;

    /// Serializes and writes the full collection, replacing any prior
    /// persisted value. There are no partial writes or diffs.
    async fn save(&self, contacts: &[Contact]) -> Result<()>;
}
