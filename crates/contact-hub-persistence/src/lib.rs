pub mod constants;
pub mod contact;
pub mod json;

use thiserror::Error;

/// Generic persistence result type
pub type Result<T> = std::result::Result<T, Error>;

/// Generic persistence error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("io error {0}")]
    Io(#[from] std::io::Error),

    #[error("unable to serialize contacts: {0}")]
    Json(#[from] serde_json::Error),
}

pub use contact::ContactStoreApi;
pub use json::JsonContactStore;
