use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::CoreError;

const GUEST_TOKEN_BYTES: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Guest,
    Member,
}

/// Per-client session state as it is persisted in the session store.
///
/// The fields are loose on purpose: a record can be written by one flow and
/// read by another, so the combination is only checked when it is resolved
/// into an [`Identity`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub role: Option<Role>,
    pub user_id: Option<String>,
    pub guest_token: Option<String>,
}

impl SessionRecord {
    pub fn has_member_identity(&self) -> bool {
        self.user_id.is_some()
    }

    /// Issue a fresh guest token and tag the session as guest.
    pub fn enter_guest_flow(&mut self) -> String {
        let token = generate_guest_token();
        self.guest_token = Some(token.clone());
        self.role = Some(Role::Guest);
        token
    }

    pub fn sign_in(&mut self, user_id: impl Into<String>) {
        self.user_id = Some(user_id.into());
        self.role = Some(Role::Member);
    }
}

/// Who is making a booking, once the session has been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Guest { token: String },
    Member { user_id: String },
}

impl TryFrom<&SessionRecord> for Identity {
    type Error = CoreError;

    fn try_from(record: &SessionRecord) -> Result<Self, Self::Error> {
        match record.role {
            Some(Role::Guest) => record
                .guest_token
                .clone()
                .map(|token| Identity::Guest { token })
                .ok_or(CoreError::SecurityViolation),
            Some(Role::Member) => record
                .user_id
                .clone()
                .map(|user_id| Identity::Member { user_id })
                .ok_or(CoreError::SessionExpired),
            None => Err(CoreError::Unauthorized),
        }
    }
}

/// URL-safe random token, 16 bytes of entropy.
pub fn generate_guest_token() -> String {
    let mut bytes = [0u8; GUEST_TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
