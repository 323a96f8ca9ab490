use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The guest already holds an active booking; carries its room and dates.
    DuplicateGuest {
        email: String,
        room_number: u32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
    InvalidRoom(u32),
    NoRoomsAvailable,
    RoomAlreadyBooked(u32),
    NotFound(String),
    NoGuests,
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::DuplicateGuest {
                email,
                room_number,
                check_in,
                check_out,
            } => write!(
                f,
                "{email} already has a booking in room {room_number} from {check_in} to {check_out}"
            ),
            EngineError::InvalidRoom(n) => write!(f, "room {n} does not exist"),
            EngineError::NoRoomsAvailable => {
                write!(f, "all rooms are currently occupied")
            }
            EngineError::RoomAlreadyBooked(n) => {
                write!(f, "room {n} is already booked for an overlapping stay")
            }
            EngineError::NotFound(email) => write!(f, "no booking found for {email}"),
            EngineError::NoGuests => write!(f, "no guests are currently booked"),
        }
    }
}

impl std::error::Error for EngineError {}
