mod id;
mod token;

pub use self::{id::*, token::*};
use crate::entity::UserId;
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Session {
    id: SessionId,
    user_id: UserId,
    token: SessionToken,
}

impl Session {
    pub fn new(id: SessionId, user_id: UserId, token: SessionToken) -> Self {
        Self { id, user_id, token }
    }
}
