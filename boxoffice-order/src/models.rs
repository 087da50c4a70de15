use boxoffice_core::Identity;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Who an order belongs to. Members and guests live in separate namespaces
/// so a guest email can never collide with a member id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerRef {
    Member(String),
    Guest(String),
}

impl CustomerRef {
    /// Guests are identified by the email they typed at checkout, not by their token.
    pub fn resolve(identity: &Identity, email: Option<&str>) -> Option<Self> {
        match identity {
            Identity::Member { user_id } => Some(CustomerRef::Member(user_id.clone())),
            Identity::Guest { .. } => email
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(|e| CustomerRef::Guest(e.to_string())),
        }
    }
}

impl fmt::Display for CustomerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerRef::Member(id) => write!(f, "member:{}", id),
            CustomerRef::Guest(email) => write!(f, "guest:{}", email),
        }
    }
}

impl Serialize for CustomerRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// A confirmed booking. Orders are never edited after creation.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    id: Uuid,
    customer: CustomerRef,
    movie: String,
    seats: Vec<String>,
    created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(customer: CustomerRef, movie: String, seats: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer,
            movie,
            seats,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn customer(&self) -> &CustomerRef {
        &self.customer
    }

    pub fn movie(&self) -> &str {
        &self.movie
    }

    pub fn seats(&self) -> &[String] {
        &self.seats
    }
}
