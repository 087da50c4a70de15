use boxoffice_core::toggles::SeatMode;
use boxoffice_core::{Preference, PreferenceOption, Toggles, PREFERENCE_MENU};
use serde::Serialize;
use tracing::debug;

use crate::seat::Seat;
use crate::venue::default_seat_map;

/// What a client needs to render the seat step of the booking flow.
///
/// Exactly one of `seats` and `preferences` is present, depending on `mode`.
#[derive(Debug, Clone, Serialize)]
pub struct SeatConfiguration {
    pub mode: SeatMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seats: Option<Vec<Seat>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Vec<PreferenceOption>>,
}

/// In-memory seat map for a single screening.
pub struct SeatInventory {
    seats: Vec<Seat>,
}

impl SeatInventory {
    pub fn new(seats: Vec<Seat>) -> Self {
        Self { seats }
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn available_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_available()).count()
    }

    pub fn seat_configuration(&self, toggles: &Toggles) -> SeatConfiguration {
        match toggles.seat_mode() {
            SeatMode::Manual => SeatConfiguration {
                mode: SeatMode::Manual,
                seats: Some(self.seats.clone()),
                preferences: None,
            },
            SeatMode::Auto => SeatConfiguration {
                mode: SeatMode::Auto,
                seats: None,
                preferences: Some(PREFERENCE_MENU.to_vec()),
            },
        }
    }

    /// First-fit allocation of `count` seats.
    ///
    /// Seats matching the preference are tried first; if there are not enough
    /// of them every available seat becomes a candidate. Nothing is marked sold
    /// unless the whole request can be met.
    pub fn allocate(&mut self, preference: Preference, count: usize) -> Result<Vec<String>, AllocationError> {
        let available: Vec<usize> = self.seats.iter()
            .enumerate()
            .filter(|(_, seat)| seat.is_available())
            .map(|(idx, _)| idx)
            .collect();

        let preferred: Vec<usize> = available.iter()
            .copied()
            .filter(|&idx| matches_preference(&self.seats[idx], preference))
            .collect();

        let candidates = if preferred.len() >= count {
            preferred
        } else {
            debug!(
                "Preference {:?} has {} seats for {} requested, falling back to all available",
                preference, preferred.len(), count
            );
            available
        };

        if candidates.len() < count {
            return Err(AllocationError::InsufficientSeats {
                requested: count,
                available: candidates.len(),
            });
        }

        let assigned = candidates.into_iter()
            .take(count)
            .map(|idx| {
                let seat = &mut self.seats[idx];
                seat.mark_sold();
                seat.id.clone()
            })
            .collect();

        Ok(assigned)
    }
}

impl Default for SeatInventory {
    fn default() -> Self {
        Self::new(default_seat_map())
    }
}

// Front has no filter of its own: it is served from the whole available pool.
fn matches_preference(seat: &Seat, preference: Preference) -> bool {
    match preference {
        Preference::Center => seat.col == 3,
        Preference::Aisle => seat.col == 1 || seat.col == 5,
        Preference::Back => seat.row == "B",
        Preference::Front | Preference::Any => true,
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AllocationError {
    #[error("No seats left in that category: requested {requested}, available {available}")]
    InsufficientSeats {
        requested: usize,
        available: usize,
    },
}
