use serde::{Deserialize, Serialize};

use crate::util::date::{DateTimeUtc, now};
use crate::util::get_uuid_v4;

/// A notification as it will be delivered to the UI.
///
/// A transient feedback message. Every notification is independent: it
/// carries its own id and lifetime, and several can be visible at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// The unique id of the notification
    pub id: String,
    /// The message shown to the user
    pub message: String,
    /// The datetime when the notification was created
    pub datetime: DateTimeUtc,
    /// Whether the notification is still visible or already fading out
    pub active: bool,
}

impl Notification {
    pub fn new(message: &str) -> Self {
        Self {
            id: get_uuid_v4().to_string(),
            message: message.to_string(),
            datetime: now(),
            active: true,
        }
    }
}
