//! Profiles service.

use jiff::Timestamp;
use mockall::automock;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::profiles::{
    errors::ProfilesError,
    models::{NewProfile, Profile, ProfileUpdate, UserUuid},
};

/// Profile storage for signed-in users.
#[automock]
pub trait ProfilesService {
    /// Retrieve a user's profile.
    ///
    /// # Errors
    ///
    /// Returns [`ProfilesError::NotFound`] if the user has no profile yet.
    fn get_profile(&self, user: UserUuid) -> Result<Profile, ProfilesError>;

    /// Retrieve a user's profile, creating it with defaults on first visit.
    ///
    /// # Errors
    ///
    /// Returns a [`ProfilesError`] if the profile can't be read or created.
    fn get_or_create(&mut self, profile: NewProfile) -> Result<Profile, ProfilesError>;

    /// Apply a section edit to a user's profile.
    ///
    /// # Errors
    ///
    /// Returns [`ProfilesError::NotFound`] if the user has no profile, or
    /// [`ProfilesError::UsernameTaken`] if the edit claims another user's username.
    fn update(&mut self, user: UserUuid, update: ProfileUpdate) -> Result<Profile, ProfilesError>;

    /// Whether `user` may take `username`.
    ///
    /// Empty usernames and the user's own current username are always available.
    ///
    /// # Errors
    ///
    /// Returns a [`ProfilesError`] if profiles can't be read.
    fn username_available(&self, user: UserUuid, username: &str) -> Result<bool, ProfilesError>;
}

/// Profiles held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfiles {
    profiles: FxHashMap<UserUuid, Profile>,
}

impl InMemoryProfiles {
    /// An empty profile store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with existing profiles.
    pub fn with_profiles(profiles: impl IntoIterator<Item = Profile>) -> Self {
        Self {
            profiles: profiles
                .into_iter()
                .map(|profile| (profile.id, profile))
                .collect(),
        }
    }

    fn username_taken(&self, user: UserUuid, username: &str) -> bool {
        !username.is_empty()
            && self
                .profiles
                .values()
                .any(|profile| profile.id != user && profile.username == username)
    }
}

impl ProfilesService for InMemoryProfiles {
    fn get_profile(&self, user: UserUuid) -> Result<Profile, ProfilesError> {
        self.profiles
            .get(&user)
            .cloned()
            .ok_or(ProfilesError::NotFound(user))
    }

    fn get_or_create(&mut self, profile: NewProfile) -> Result<Profile, ProfilesError> {
        let profile = self.profiles.entry(profile.id).or_insert_with(|| {
            debug!(user = %profile.id, "creating profile");

            profile.into_profile(Timestamp::now())
        });

        Ok(profile.clone())
    }

    fn update(&mut self, user: UserUuid, update: ProfileUpdate) -> Result<Profile, ProfilesError> {
        if let ProfileUpdate::Basic { username, .. } = &update {
            if self.username_taken(user, username) {
                return Err(ProfilesError::UsernameTaken(username.clone()));
            }
        }

        let profile = self
            .profiles
            .get_mut(&user)
            .ok_or(ProfilesError::NotFound(user))?;

        profile.apply(update, Timestamp::now());

        Ok(profile.clone())
    }

    fn username_available(&self, user: UserUuid, username: &str) -> Result<bool, ProfilesError> {
        Ok(!self.username_taken(user, username))
    }
}
