use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Fromln, AsRefln)]
pub struct EnrollmentId(i32);

impl EnrollmentId {
    pub fn new(id: impl Into<i32>) -> Self {
        Self(id.into())
    }
}
