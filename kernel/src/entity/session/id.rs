use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Fromln, AsRefln)]
pub struct SessionId(i32);

impl SessionId {
    pub fn new(id: impl Into<i32>) -> Self {
        Self(id.into())
    }
}
