use serde::{Deserialize, Serialize};

/// Feature toggles driving the booking flow.
///
/// Both experiments are off unless the toggle source says otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toggles {
    #[serde(default)]
    pub guest_checkout: bool,
    #[serde(default)]
    pub auto_seating: bool,
}

impl Toggles {
    pub fn new(guest_checkout: bool, auto_seating: bool) -> Self {
        Self { guest_checkout, auto_seating }
    }

    pub fn seat_mode(&self) -> SeatMode {
        if self.auto_seating {
            SeatMode::Auto
        } else {
            SeatMode::Manual
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatMode {
    Manual,
    Auto,
}
