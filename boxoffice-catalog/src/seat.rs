use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatType {
    Front,
    Back,
    Center,
    Aisle,
}

/// Availability of a seat. On the wire: `0` available, `1` sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum SeatStatus {
    Available,
    Sold,
}

impl From<SeatStatus> for u8 {
    fn from(status: SeatStatus) -> Self {
        match status {
            SeatStatus::Available => 0,
            SeatStatus::Sold => 1,
        }
    }
}

impl TryFrom<u8> for SeatStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SeatStatus::Available),
            1 => Ok(SeatStatus::Sold),
            other => Err(format!("unknown seat status {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: String,
    pub row: String,
    pub col: u32,
    #[serde(rename = "type")]
    pub seat_type: SeatType,
    pub status: SeatStatus,
}

impl Seat {
    pub fn new(row: &str, col: u32, seat_type: SeatType, status: SeatStatus) -> Self {
        Self {
            id: format!("{}{}", row, col),
            row: row.to_string(),
            col,
            seat_type,
            status,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == SeatStatus::Available
    }

    /// Seats only ever move from available to sold.
    pub fn mark_sold(&mut self) {
        self.status = SeatStatus::Sold;
    }
}
