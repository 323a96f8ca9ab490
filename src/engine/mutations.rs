use chrono::NaiveDate;
use ulid::Ulid;

use crate::model::{Booking, BookingPatch, ModifyOutcome, Stay};

use super::conflict::{find_by_email, first_free_room, room_occupied};
use super::{Engine, EngineError};

impl Engine {
    /// Book a stay. `room_number: None` auto-assigns the lowest free room;
    /// `Some(n)` books exactly room `n` or fails.
    ///
    /// Checks run in a fixed order — duplicate guest, then room validity,
    /// then availability — and the first failure wins. A rejected request
    /// leaves the collection untouched.
    pub async fn create_booking(
        &self,
        name: String,
        email: String,
        check_in: NaiveDate,
        check_out: NaiveDate,
        room_number: Option<u32>,
    ) -> Result<Booking, EngineError> {
        let mut bookings = self.bookings.write().await;

        if let Some(existing) = find_by_email(&bookings, &email) {
            return Err(EngineError::DuplicateGuest {
                email: existing.email.clone(),
                room_number: existing.room_number,
                check_in: existing.stay.check_in,
                check_out: existing.stay.check_out,
            });
        }

        let assigned = match room_number {
            Some(n) => {
                if !self.room_exists(n) {
                    return Err(EngineError::InvalidRoom(n));
                }
                if room_occupied(&bookings, n, check_in) {
                    return Err(EngineError::RoomAlreadyBooked(n));
                }
                n
            }
            None => first_free_room(&self.rooms, &bookings, check_in)
                .ok_or(EngineError::NoRoomsAvailable)?,
        };

        let booking = Booking {
            id: Ulid::new(),
            name,
            email,
            stay: Stay::new(check_in, check_out),
            room_number: assigned,
        };
        bookings.push(booking.clone());
        Ok(booking)
    }

    /// Remove the booking addressed by `email` and return it. The vacated
    /// room immediately becomes eligible for stays not blocked by the
    /// remaining bookings on it.
    pub async fn cancel_booking(&self, email: &str) -> Result<Booking, EngineError> {
        let mut bookings = self.bookings.write().await;
        let pos = bookings
            .iter()
            .position(|b| b.email == email)
            .ok_or_else(|| EngineError::NotFound(email.to_string()))?;
        Ok(bookings.remove(pos))
    }

    /// Apply a partial update to the booking addressed by its current email.
    ///
    /// A room change is reported back as an advisory `moved_from` notice;
    /// the new room/date combination is not re-checked against other stays,
    /// so a modify can place two bookings on the same room for overlapping
    /// dates where a create could not.
    pub async fn modify_booking(
        &self,
        email: &str,
        patch: BookingPatch,
    ) -> Result<ModifyOutcome, EngineError> {
        let mut bookings = self.bookings.write().await;
        let booking = bookings
            .iter_mut()
            .find(|b| b.email == email)
            .ok_or_else(|| EngineError::NotFound(email.to_string()))?;

        let previous_room = booking.room_number;
        if let Some(name) = patch.name {
            booking.name = name;
        }
        if let Some(new_email) = patch.email {
            booking.email = new_email;
        }
        if let Some(check_in) = patch.check_in {
            booking.stay.check_in = check_in;
        }
        if let Some(check_out) = patch.check_out {
            booking.stay.check_out = check_out;
        }
        if let Some(room) = patch.room_number {
            booking.room_number = room;
        }

        let moved_from = (booking.room_number != previous_room).then_some(previous_room);
        Ok(ModifyOutcome {
            booking: booking.clone(),
            moved_from,
        })
    }
}
