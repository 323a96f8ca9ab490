use chrono::NaiveDate;

use crate::model::{Booking, Room};

/// A room is occupied for an arrival date when any booking on it departs on
/// or after that date (`check_out >= arrival`). The departure day itself
/// does not free the room for a same-day arrival.
pub(crate) fn room_occupied(bookings: &[Booking], room_number: u32, arrival: NaiveDate) -> bool {
    bookings
        .iter()
        .any(|b| b.room_number == room_number && b.stay.blocks_arrival(arrival))
}

/// First room in ascending room-number order with no booking blocking the
/// arrival date.
pub(crate) fn first_free_room(
    rooms: &[Room],
    bookings: &[Booking],
    arrival: NaiveDate,
) -> Option<u32> {
    rooms
        .iter()
        .find(|room| !room_occupied(bookings, room.room_number, arrival))
        .map(|room| room.room_number)
}

/// At most one booking can match per the guest-exclusivity invariant.
pub(crate) fn find_by_email<'a>(bookings: &'a [Booking], email: &str) -> Option<&'a Booking> {
    bookings.iter().find(|b| b.email == email)
}
