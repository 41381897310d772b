use crate::Config;
use contact_hub_persistence::{ContactStoreApi, JsonContactStore};
use std::sync::Arc;

pub use contact_hub_persistence::Error;
pub use contact_hub_persistence::contact;

/// A container for all persistence related dependencies.
#[derive(Clone)]
pub struct StoreContext {
    pub contact_store: Arc<dyn ContactStoreApi>,
}

/// Creates a new instance of the StoreContext with the given configuration.
pub fn get_store_context(conf: &Config) -> StoreContext {
    let contact_store = Arc::new(JsonContactStore::new(&conf.data_dir));
    StoreContext { contact_store }
}
