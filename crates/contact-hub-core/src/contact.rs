use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::util::date::DateTimeUtc;

/// The group a contact can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactGroup {
    Family,
    Friends,
    Work,
    School,
    Other,
}

#[derive(Debug, Error)]
#[error("unknown contact group: {0}")]
pub struct ParseContactGroupError(String);

impl FromStr for ContactGroup {
    type Err = ParseContactGroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "family" => Ok(Self::Family),
            "friends" => Ok(Self::Friends),
            "work" => Ok(Self::Work),
            "school" => Ok(Self::School),
            "other" => Ok(Self::Other),
            _ => Err(ParseContactGroupError(s.to_owned())),
        }
    }
}

impl fmt::Display for ContactGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Family => "family",
            Self::Friends => "friends",
            Self::Work => "work",
            Self::School => "school",
            Self::Other => "other",
        };
        f.write_str(tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// The unique id of the contact, assigned at creation
    pub id: String,
    /// The display name of the contact
    pub name: String,
    /// The phone number of the contact
    pub phone: String,
    /// email address of the contact
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
    /// postal address of the contact
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub address: Option<String>,
    /// The group the contact is filed under
    #[serde(
        default,
        deserialize_with = "group_tag",
        skip_serializing_if = "Option::is_none"
    )]
    pub group: Option<ContactGroup>,
    /// Free-form notes
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub is_emergency: bool,
    /// The avatar image, encoded as a data URL
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub avatar: Option<String>,
    /// The datetime when the contact was created; never changes afterwards
    pub date_added: DateTimeUtc,
}

impl Contact {
    /// Up to two uppercase initials derived from the name, rendered in
    /// place of a missing avatar.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

/// Older snapshots encode absent optional fields as empty strings.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Tolerant group decoding: empty or unknown tags read as no group, so a
/// single odd record cannot fail the whole snapshot.
fn group_tag<'de, D>(deserializer: D) -> Result<Option<ContactGroup>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(tag) => match tag.parse() {
            Ok(group) => Ok(Some(group)),
            Err(e) => {
                warn!("Dropping {e} while reading a contact");
                Ok(None)
            }
        },
    }
}

/// The reduced contact data the sidebars render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightContact {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl From<&Contact> for LightContact {
    fn from(value: &Contact) -> Self {
        Self {
            id: value.id.clone(),
            name: value.name.clone(),
            phone: value.phone.clone(),
            avatar: value.avatar.clone(),
        }
    }
}

/// Counters over the full collection, independent of any search filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactStats {
    pub total: usize,
    pub favorite_count: usize,
    pub emergency_count: usize,
}

/// Raw form input for a create or edit submission.
///
/// Everything arrives as the form field produced it: untrimmed text and
/// the group tag as its select value. The edit session validates this and
/// turns it into a stored [`Contact`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub group: String,
    pub notes: String,
    pub is_favorite: bool,
    pub is_emergency: bool,
}

impl From<&Contact> for ContactForm {
    fn from(value: &Contact) -> Self {
        Self {
            name: value.name.clone(),
            phone: value.phone.clone(),
            email: value.email.clone().unwrap_or_default(),
            address: value.address.clone().unwrap_or_default(),
            group: value.group.map(|g| g.to_string()).unwrap_or_default(),
            notes: value.notes.clone().unwrap_or_default(),
            is_favorite: value.is_favorite,
            is_emergency: value.is_emergency,
        }
    }
}
