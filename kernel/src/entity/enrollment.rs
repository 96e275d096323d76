mod address;
mod id;
mod name;

pub use self::{address::*, id::*, name::*};
use crate::entity::UserId;
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Enrollment {
    id: EnrollmentId,
    user_id: UserId,
    name: EnrollmentName,
    address: Option<Address>,
}

impl Enrollment {
    pub fn new(
        id: EnrollmentId,
        user_id: UserId,
        name: EnrollmentName,
        address: Option<Address>,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            address,
        }
    }
}
