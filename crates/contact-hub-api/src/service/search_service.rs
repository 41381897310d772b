use std::sync::Arc;

use async_trait::async_trait;
use contact_hub_core::contact::{Contact, ContactStats, LightContact};
use tokio::sync::RwLock;

use super::Result;
use super::contact_service::ContactServiceApi;

#[cfg(test)]
use mockall::automock;

/// Derived, read-only views over the contact store.
///
/// Every view is a pure function of the current collection and the
/// current search term; nothing here owns contact state. When a view
/// comes back empty, the presentation layer shows its empty-state text
/// instead of a list.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SearchServiceApi: Send + Sync {
    /// Sets the search term the main list is filtered by.
    async fn set_search_term(&self, term: &str);

    /// The currently set search term.
    async fn search_term(&self) -> String;

    /// The main list: contacts whose name, phone or email contains the
    /// current search term, case-insensitively, in store order. An empty
    /// term matches every contact.
    async fn filtered_list(&self) -> Result<Vec<Contact>>;

    /// Sidebar projection of the favorite contacts, in store order.
    async fn favorites(&self) -> Result<Vec<LightContact>>;

    /// Sidebar projection of the emergency contacts, in store order.
    async fn emergency_contacts(&self) -> Result<Vec<LightContact>>;

    /// Counters over the full collection. The search term never affects
    /// these.
    async fn stats(&self) -> Result<ContactStats>;
}

#[derive(Clone)]
pub struct SearchService {
    contact_service: Arc<dyn ContactServiceApi>,
    search_term: Arc<RwLock<String>>,
}

impl SearchService {
    pub fn new(contact_service: Arc<dyn ContactServiceApi>) -> Self {
        Self {
            contact_service,
            search_term: Arc::new(RwLock::new(String::new())),
        }
    }
}

/// Case-insensitive substring match against name, phone and email. An
/// empty term matches everything.
pub fn matches_search_term(contact: &Contact, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    contact.name.to_lowercase().contains(&term)
        || contact.phone.to_lowercase().contains(&term)
        || contact
            .email
            .as_ref()
            .is_some_and(|email| email.to_lowercase().contains(&term))
}

#[async_trait]
impl SearchServiceApi for SearchService {
    async fn set_search_term(&self, term: &str) {
        *self.search_term.write().await = term.to_string();
    }

    async fn search_term(&self) -> String {
        self.search_term.read().await.clone()
    }

    async fn filtered_list(&self) -> Result<Vec<Contact>> {
        let term = self.search_term.read().await.clone();
        let contacts = self.contact_service.get_contacts().await?;
        Ok(contacts
            .into_iter()
            .filter(|contact| matches_search_term(contact, &term))
            .collect())
    }

    async fn favorites(&self) -> Result<Vec<LightContact>> {
        let contacts = self.contact_service.get_contacts().await?;
        Ok(contacts
            .iter()
            .filter(|c| c.is_favorite)
            .map(LightContact::from)
            .collect())
    }

    async fn emergency_contacts(&self) -> Result<Vec<LightContact>> {
        let contacts = self.contact_service.get_contacts().await?;
        Ok(contacts
            .iter()
            .filter(|c| c.is_emergency)
            .map(LightContact::from)
            .collect())
    }

    async fn stats(&self) -> Result<ContactStats> {
        let contacts = self.contact_service.get_contacts().await?;
        Ok(ContactStats {
            total: contacts.len(),
            favorite_count: contacts.iter().filter(|c| c.is_favorite).count(),
            emergency_count: contacts.iter().filter(|c| c.is_emergency).count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::contact_service::MockContactServiceApi;
    use crate::service::contact_service::tests::{get_ctx, get_service};
    use crate::tests::tests::{contact_with_name_phone, empty_contact};

    fn baseline_collection() -> Vec<Contact> {
        let mut ana = contact_with_name_phone("1", "Ana Ruiz", "555-1111");
        ana.email = Some("ana@example.com".to_string());
        ana.is_favorite = true;
        let bo = contact_with_name_phone("2", "Bo Larsen", "555-2222");
        let mut cleo = contact_with_name_phone("3", "Cleo Brandt", "0043-555-31");
        cleo.email = Some("cleo@mail.test".to_string());
        cleo.is_emergency = true;
        vec![ana, bo, cleo]
    }

    fn get_search_service(contacts: Vec<Contact>) -> SearchService {
        let mut contact_service = MockContactServiceApi::new();
        contact_service
            .expect_get_contacts()
            .returning(move || Ok(contacts.clone()));
        SearchService::new(Arc::new(contact_service))
    }

    #[test]
    fn matches_search_term_baseline() {
        let mut contact = empty_contact();
        contact.name = "Ana Ruiz".to_string();
        contact.phone = "555-1111".to_string();
        contact.email = Some("Ana.Ruiz@Example.com".to_string());

        assert!(matches_search_term(&contact, ""));
        assert!(matches_search_term(&contact, "ana"));
        assert!(matches_search_term(&contact, "RUIZ"));
        assert!(matches_search_term(&contact, "5-11"));
        assert!(matches_search_term(&contact, "example.COM"));
        assert!(!matches_search_term(&contact, "larsen"));
    }

    #[test]
    fn matches_search_term_without_email() {
        let mut contact = empty_contact();
        contact.name = "Bo".to_string();
        contact.phone = "555".to_string();

        assert!(!matches_search_term(&contact, "example"));
    }

    #[tokio::test]
    async fn filtered_list_with_empty_term_equals_full_collection() {
        let contacts = baseline_collection();
        let service = get_search_service(contacts.clone());

        let filtered = service.filtered_list().await.unwrap();
        assert_eq!(filtered, contacts);
    }

    #[tokio::test]
    async fn filtered_list_matches_name_phone_and_email() {
        let service = get_search_service(baseline_collection());

        service.set_search_term("AN").await;
        let by_name = service.filtered_list().await.unwrap();
        // "AN" hits Ana's name and Cleo's name ("Brandt")
        assert_eq!(by_name.len(), 2);
        assert_eq!(by_name[0].id, "1");
        assert_eq!(by_name[1].id, "3");

        service.set_search_term("555-2").await;
        let by_phone = service.filtered_list().await.unwrap();
        assert_eq!(by_phone.len(), 1);
        assert_eq!(by_phone[0].id, "2");

        service.set_search_term("mail.test").await;
        let by_email = service.filtered_list().await.unwrap();
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].id, "3");

        service.set_search_term("no such contact").await;
        assert!(service.filtered_list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn sidebar_projections_follow_the_flags() {
        let service = get_search_service(baseline_collection());

        let favorites = service.favorites().await.unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].name, "Ana Ruiz");

        let emergency = service.emergency_contacts().await.unwrap();
        assert_eq!(emergency.len(), 1);
        assert_eq!(emergency[0].name, "Cleo Brandt");
    }

    #[tokio::test]
    async fn stats_are_not_affected_by_the_search_term() {
        let service = get_search_service(baseline_collection());
        service.set_search_term("no such contact").await;

        assert!(service.filtered_list().await.unwrap().is_empty());
        let stats = service.stats().await.unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.favorite_count, 1);
        assert_eq!(stats.emergency_count, 1);
    }

    #[tokio::test]
    async fn stats_after_first_upsert() {
        // wired against the real contact service, as the application does
        let contact_service = Arc::new(get_service(get_ctx(), vec![]));
        let service = SearchService::new(contact_service.clone());

        contact_service
            .upsert(contact_with_name_phone("1234", "Ana Ruiz", "555-1111"))
            .await
            .unwrap();

        let stats = service.stats().await.unwrap();
        assert_eq!(stats.total, 1);
        assert_eq!(stats.favorite_count, 0);
        assert_eq!(stats.emergency_count, 0);
    }

    #[tokio::test]
    async fn toggling_favorite_moves_a_contact_in_and_out_of_the_sidebar() {
        let contact_service = Arc::new(get_service(
            get_ctx(),
            vec![contact_with_name_phone("1234", "Ana Ruiz", "555-1111")],
        ));
        let service = SearchService::new(contact_service.clone());

        contact_service.toggle_favorite("1234").await.unwrap();
        let favorites = service.favorites().await.unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].id, "1234");

        contact_service.toggle_favorite("1234").await.unwrap();
        assert!(service.favorites().await.unwrap().is_empty());
    }
}
