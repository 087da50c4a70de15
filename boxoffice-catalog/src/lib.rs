pub mod seat;
pub mod venue;
pub mod inventory;

pub use seat::{Seat, SeatStatus, SeatType};
pub use inventory::{AllocationError, SeatConfiguration, SeatInventory};
