#[cfg(test)]
#[allow(clippy::module_inception)]
pub mod tests {
    use crate::CONFIG;
    use async_trait::async_trait;
    use contact_hub_core::contact::Contact;
    use contact_hub_core::util::date;
    use contact_hub_persistence::{ContactStoreApi, Result};

    // Need to wrap mocks, because traits are in a different crate
    mockall::mock! {
        pub ContactStoreApiMock {}

        #[async_trait]
        impl ContactStoreApi for ContactStoreApiMock {
            async fn load(&self) -> Result<Vec<Contact>>;
            async fn save(&self, contacts: &[Contact]) -> Result<()>;
        }
    }

    pub fn init_test_cfg() {
        // tests initialize concurrently, so don't race on init()
        CONFIG.get_or_init(|| crate::Config {
            data_dir: ".".to_string(),
        });
    }

    pub fn empty_contact() -> Contact {
        Contact {
            id: "".to_string(),
            name: "".to_string(),
            phone: "".to_string(),
            email: None,
            address: None,
            group: None,
            notes: None,
            is_favorite: false,
            is_emergency: false,
            avatar: None,
            date_added: date::now(),
        }
    }

    pub fn contact_with_name_phone(id: &str, name: &str, phone: &str) -> Contact {
        let mut contact = empty_contact();
        contact.id = id.to_owned();
        contact.name = name.to_owned();
        contact.phone = phone.to_owned();
        contact
    }
}
