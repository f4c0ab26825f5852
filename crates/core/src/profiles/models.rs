//! Profile Models

use jiff::{Timestamp, civil::Date};
use serde::{Deserialize, Serialize};

use crate::uuids::TypedUuid;

/// User UUID, shared with the auth provider.
pub type UserUuid = TypedUuid<Profile>;

/// Postal address. Every field is optional; absent fields are simply not shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street and number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    /// City
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// State or region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Postal code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,

    /// Country
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Address {
    /// Whether no field is filled in.
    pub fn is_empty(&self) -> bool {
        [
            &self.street,
            &self.city,
            &self.state,
            &self.zip,
            &self.country,
        ]
        .iter()
        .all(|field| field.as_deref().is_none_or(|value| value.trim().is_empty()))
    }
}

/// Communication preferences. An absent field means the default applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Newsletter opt-in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub newsletter: Option<bool>,

    /// SMS notifications opt-in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sms_notifications: Option<bool>,

    /// Email notifications opt-in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_notifications: Option<bool>,
}

impl Preferences {
    /// Preferences written for a brand new profile.
    pub fn initial() -> Self {
        Self {
            newsletter: Some(true),
            sms_notifications: Some(false),
            email_notifications: Some(true),
        }
    }

    /// Whether the user receives the newsletter. Defaults to yes.
    pub fn newsletter(&self) -> bool {
        self.newsletter.unwrap_or(true)
    }

    /// Whether the user receives SMS notifications. Defaults to no.
    pub fn sms_notifications(&self) -> bool {
        self.sms_notifications.unwrap_or(false)
    }

    /// Whether the user receives email notifications. Defaults to yes.
    pub fn email_notifications(&self) -> bool {
        self.email_notifications.unwrap_or(true)
    }
}

/// Profile Model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Owning user
    pub id: UserUuid,

    /// Contact email
    pub email: String,

    /// Full name
    #[serde(default)]
    pub full_name: String,

    /// Public handle; empty until chosen
    #[serde(default)]
    pub username: String,

    /// Phone number
    #[serde(default)]
    pub phone: String,

    /// Date of birth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<Date>,

    /// Free text about the user
    #[serde(default)]
    pub bio: String,

    /// Shipping address
    #[serde(default)]
    pub address: Address,

    /// Communication preferences
    #[serde(default)]
    pub preferences: Preferences,

    /// Avatar image
    #[serde(default)]
    pub avatar_url: String,

    /// When the profile was created
    pub created_at: Timestamp,

    /// When the profile was last edited
    pub updated_at: Timestamp,
}

impl Profile {
    /// Apply a section edit, stamping the edit time.
    pub fn apply(&mut self, update: ProfileUpdate, at: Timestamp) {
        match update {
            ProfileUpdate::Basic {
                full_name,
                username,
                email,
                phone,
                date_of_birth,
            } => {
                self.full_name = full_name;
                self.username = username;
                self.email = email;
                self.phone = phone;
                self.date_of_birth = date_of_birth;
            }
            ProfileUpdate::Bio(bio) => self.bio = bio,
            ProfileUpdate::Address(address) => self.address = address,
            ProfileUpdate::Preferences(preferences) => self.preferences = preferences,
        }

        self.updated_at = at;
    }

    /// Name to greet the user with.
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            "User"
        } else {
            &self.full_name
        }
    }
}

/// New Profile Model, created the first time a signed-in user visits their profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfile {
    /// Owning user
    pub id: UserUuid,

    /// Email from the auth provider
    pub email: String,

    /// Full name from the auth provider's user metadata, if any
    pub full_name: String,
}

impl NewProfile {
    /// Describe the profile for a signed-in user.
    pub fn for_user(id: UserUuid, email: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            full_name: full_name.into(),
        }
    }

    /// Materialise the profile with every other field at its default.
    pub fn into_profile(self, at: Timestamp) -> Profile {
        Profile {
            id: self.id,
            email: self.email,
            full_name: self.full_name,
            username: String::new(),
            phone: String::new(),
            date_of_birth: None,
            bio: String::new(),
            address: Address::default(),
            preferences: Preferences::initial(),
            avatar_url: String::new(),
            created_at: at,
            updated_at: at,
        }
    }
}

/// A section-scoped profile edit. Each section replaces only its own fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileUpdate {
    /// Identity and contact details.
    Basic {
        /// Full name
        full_name: String,
        /// Public handle
        username: String,
        /// Contact email
        email: String,
        /// Phone number
        phone: String,
        /// Date of birth
        date_of_birth: Option<Date>,
    },

    /// Free text about the user.
    Bio(String),

    /// Shipping address, replaced wholesale.
    Address(Address),

    /// Communication preferences, replaced wholesale.
    Preferences(Preferences),
}
