mod conflict;
mod error;
mod mutations;
mod queries;

pub use error::EngineError;

use tokio::sync::RwLock;

use crate::model::{Booking, Room};

/// In-memory authority over the room pool and the booking collection.
///
/// The room pool is fixed at construction and never changes. Every
/// operation that touches bookings goes through the single `bookings`
/// lock: mutations hold the write guard for their whole check-then-commit
/// sequence, so concurrent requests racing for the same room or email
/// serialize and no caller observes a partially applied change.
pub struct Engine {
    rooms: Vec<Room>,
    bookings: RwLock<Vec<Booking>>,
}

impl Engine {
    /// Build an engine with rooms numbered `1..=room_count`.
    pub fn new(room_count: u32) -> Self {
        let rooms = (1..=room_count)
            .map(|room_number| Room { room_number })
            .collect();
        Self {
            rooms,
            bookings: RwLock::new(Vec::new()),
        }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room_exists(&self, room_number: u32) -> bool {
        self.rooms.iter().any(|r| r.room_number == room_number)
    }
}
