// Storage
//
// The whole collection lives in one named slot, kept under the name the
// snapshot layout has always used.
pub const CONTACTS_SNAPSHOT_FILE: &str = "contacthub_contacts.json";
