use vodca::{AsRefln, Fromln};

// Carried for display only. Occupancy is decided by the existence of a booking.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln)]
pub struct RoomCapacity(i32);

impl RoomCapacity {
    pub fn new(capacity: impl Into<i32>) -> Self {
        Self(capacity.into())
    }
}
