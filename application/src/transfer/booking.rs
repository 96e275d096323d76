use kernel::prelude::entity::{Booking, DestructRoom, Room};
use time::OffsetDateTime;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RoomDto {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i32,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<Room> for RoomDto {
    fn from(value: Room) -> Self {
        let DestructRoom {
            id,
            name,
            capacity,
            hotel_id,
            created_at,
            updated_at,
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            capacity: capacity.into(),
            hotel_id: hotel_id.into(),
            created_at: created_at.into(),
            updated_at: updated_at.into(),
        }
    }
}

/// What a user sees of their own booking: its id and the room it holds.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookingDto {
    pub id: i32,
    pub room: RoomDto,
}

impl From<(Booking, Room)> for BookingDto {
    fn from((booking, room): (Booking, Room)) -> Self {
        Self {
            id: (*booking.id()).into(),
            room: RoomDto::from(room),
        }
    }
}

pub struct GetBookingDto {
    pub user_id: i32,
}

pub struct CreateBookingDto {
    pub user_id: i32,
    pub room_id: i32,
}

pub struct UpdateBookingDto {
    pub user_id: i32,
    pub room_id: i32,
    pub booking_id: i32,
}
