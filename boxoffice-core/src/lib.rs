pub mod toggles;
pub mod preference;
pub mod session;

pub use toggles::Toggles;
pub use preference::{Preference, PreferenceOption, PREFERENCE_MENU};
pub use session::{Identity, Role, SessionRecord};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid username or password")]
    AuthenticationFailed,
    #[error("Unauthorized: no active session")]
    Unauthorized,
    #[error("Security violation: guest session has no token")]
    SecurityViolation,
    #[error("Session expired: please log in again")]
    SessionExpired,
}

pub type CoreResult<T> = Result<T, CoreError>;
