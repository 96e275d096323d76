use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct HotelId(i32);

impl HotelId {
    pub fn new(id: impl Into<i32>) -> Self {
        Self(id.into())
    }
}
