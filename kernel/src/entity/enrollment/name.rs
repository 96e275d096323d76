use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct EnrollmentName(String);

impl EnrollmentName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}
