//! Profiles service errors.

use thiserror::Error;

use crate::profiles::models::UserUuid;

/// Errors raised by profile lookups and edits.
#[derive(Debug, Error)]
pub enum ProfilesError {
    /// No profile exists for this user.
    #[error("profile not found: {0}")]
    NotFound(UserUuid),

    /// Another profile already holds this username.
    #[error("username already taken: {0:?}")]
    UsernameTaken(String),
}
