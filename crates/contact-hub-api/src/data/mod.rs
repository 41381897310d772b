pub use contact_hub_core::contact;
pub use contact_hub_core::notification;

pub use contact_hub_core::contact::Contact;
pub use contact_hub_core::contact::ContactForm;
pub use contact_hub_core::contact::ContactGroup;
pub use contact_hub_core::contact::ContactStats;
pub use contact_hub_core::contact::LightContact;
pub use contact_hub_core::notification::Notification;
