mod booking;
mod eligibility;
mod session;

pub use self::{booking::*, eligibility::*, session::*};
