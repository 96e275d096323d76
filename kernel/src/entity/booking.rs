mod id;

pub use self::id::*;
use crate::entity::{CreatedAt, RoomId, UpdatedAt, UserId};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Booking {
    id: BookingId,
    user_id: UserId,
    room_id: RoomId,
    created_at: CreatedAt<Booking>,
    updated_at: UpdatedAt<Booking>,
}

impl Booking {
    pub fn new(
        id: BookingId,
        user_id: UserId,
        room_id: RoomId,
        created_at: CreatedAt<Booking>,
        updated_at: UpdatedAt<Booking>,
    ) -> Self {
        Self {
            id,
            user_id,
            room_id,
            created_at,
            updated_at,
        }
    }
}
