use chrono::NaiveDate;

use crate::model::{Booking, GuestEntry, Room};

use super::conflict::{find_by_email, room_occupied};
use super::{Engine, EngineError};

impl Engine {
    /// Rooms with no stay departing on or after `as_of`, in ascending
    /// room-number order. The reference date is always supplied by the
    /// caller — the engine never reads the clock.
    pub async fn available_rooms(&self, as_of: NaiveDate) -> Vec<Room> {
        let bookings = self.bookings.read().await;
        self.rooms
            .iter()
            .filter(|room| !room_occupied(&bookings, room.room_number, as_of))
            .copied()
            .collect()
    }

    pub async fn booking_by_email(&self, email: &str) -> Result<Booking, EngineError> {
        let bookings = self.bookings.read().await;
        find_by_email(&bookings, email)
            .cloned()
            .ok_or_else(|| EngineError::NotFound(email.to_string()))
    }

    /// `(name, room)` projection of every booking, in insertion order.
    /// An empty collection signals `NoGuests` so callers can tell "nobody
    /// is booked" apart from a successful list.
    pub async fn list_guests(&self) -> Result<Vec<GuestEntry>, EngineError> {
        let bookings = self.bookings.read().await;
        if bookings.is_empty() {
            return Err(EngineError::NoGuests);
        }
        Ok(bookings
            .iter()
            .map(|b| GuestEntry {
                name: b.name.clone(),
                room_number: b.room_number,
            })
            .collect())
    }

    pub async fn booking_count(&self) -> usize {
        self.bookings.read().await.len()
    }
}
