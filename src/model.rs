use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// A guest's stay: arrival and departure calendar dates.
///
/// No ordering between the two dates is enforced; the conflict predicate
/// below is the only place the dates are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stay {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl Stay {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self { check_in, check_out }
    }

    /// A stay keeps its room occupied for any arrival on or before its
    /// departure date: departing on day D still conflicts with arriving on D.
    /// No same-day turnover.
    pub fn blocks_arrival(&self, arrival: NaiveDate) -> bool {
        self.check_out >= arrival
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// A bookable unit identified by an immutable room number. Occupancy is
/// always derived from the booking collection, never stored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub room_number: u32,
}

/// One guest's reservation of one room over a date range.
///
/// `id` is assigned at creation and never changes; every other field may be
/// rewritten by a modify. The record is addressed by its current `email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Ulid,
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub stay: Stay,
    pub room_number: u32,
}

/// Partial update for a booking. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub room_number: Option<u32>,
}

/// Guest-register projection: who is in which room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestEntry {
    pub name: String,
    pub room_number: u32,
}

/// Result of a modify: the updated record plus an advisory notice when the
/// patch moved the booking to a different room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifyOutcome {
    pub booking: Booking,
    /// Previous room number, present only when the patch changed rooms.
    pub moved_from: Option<u32>,
}
