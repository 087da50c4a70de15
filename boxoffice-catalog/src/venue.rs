use crate::seat::{Seat, SeatStatus, SeatType};

/// The screening room every process starts with. A5 is already sold.
pub fn default_seat_map() -> Vec<Seat> {
    use SeatStatus::{Available, Sold};
    use SeatType::{Aisle, Back, Center, Front};

    vec![
        Seat::new("A", 1, Aisle, Available),
        Seat::new("A", 2, Front, Available),
        Seat::new("A", 3, Center, Available),
        Seat::new("A", 4, Front, Available),
        Seat::new("A", 5, Aisle, Sold),
        Seat::new("B", 1, Back, Available),
        Seat::new("B", 2, Back, Available),
        Seat::new("B", 3, Back, Available),
    ]
}
