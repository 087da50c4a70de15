use serde::{Deserialize, Serialize};

/// Seat preference requested by a client in auto-seating mode.
///
/// Unknown keys are kept as `Any` rather than rejected: they simply do not
/// narrow the candidate pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    Front,
    Back,
    Center,
    Aisle,
    Any,
}

impl Preference {
    pub fn parse(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "front" => Preference::Front,
            "back" => Preference::Back,
            "center" => Preference::Center,
            "aisle" => Preference::Aisle,
            _ => Preference::Any,
        }
    }
}

impl<'de> Deserialize<'de> for Preference {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let key = String::deserialize(deserializer)?;
        Ok(Preference::parse(&key))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PreferenceOption {
    pub key: &'static str,
    pub label: &'static str,
}

/// Menu shown to clients when seats are picked automatically.
pub const PREFERENCE_MENU: [PreferenceOption; 4] = [
    PreferenceOption { key: "front", label: "Front rows" },
    PreferenceOption { key: "back", label: "Back row" },
    PreferenceOption { key: "center", label: "Center view" },
    PreferenceOption { key: "aisle", label: "Aisle access" },
];
