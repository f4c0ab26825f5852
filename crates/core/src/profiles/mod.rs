//! Profiles

pub mod errors;
pub mod models;
pub mod service;

pub use errors::ProfilesError;
pub use models::{Address, NewProfile, Preferences, Profile, ProfileUpdate, UserUuid};
pub use service::{InMemoryProfiles, MockProfilesService, ProfilesService};
