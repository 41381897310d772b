use std::path::{Path, PathBuf};

use async_trait::async_trait;
use contact_hub_core::contact::Contact;
use log::{error, info};
use tokio::fs;

use crate::constants::CONTACTS_SNAPSHOT_FILE;
use crate::contact::ContactStoreApi;
use crate::Result;

/// Contact storage backed by a single JSON snapshot file.
///
/// The collection is persisted as one JSON array; every save overwrites
/// the previous snapshot as a whole.
#[derive(Debug, Clone)]
pub struct JsonContactStore {
    path: PathBuf,
}

impl JsonContactStore {
    pub fn new(data_dir: &str) -> Self {
        Self {
            path: Path::new(data_dir).join(CONTACTS_SNAPSHOT_FILE),
        }
    }
}

#[async_trait]
impl ContactStoreApi for JsonContactStore {
    async fn load(&self) -> Result<Vec<Contact>> {
        if !self.path.exists() {
            return Ok(vec![]);
        }
        let snapshot = fs::read_to_string(&self.path).await?;
        match serde_json::from_str(&snapshot) {
            Ok(contacts) => Ok(contacts),
            Err(e) => {
                // a corrupted snapshot must not take the session down
                error!("Error loading contacts from storage: {e}");
                Ok(vec![])
            }
        }
    }

    async fn save(&self, contacts: &[Contact]) -> Result<()> {
        if let Some(parent_dir) = self.path.parent() {
            fs::create_dir_all(parent_dir).await?;
        }
        let snapshot = serde_json::to_string(contacts)?;
        fs::write(&self.path, snapshot).await?;
        info!("{} contacts have been written", contacts.len());
        Ok(())
    }
}
