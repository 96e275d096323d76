mod booking;
mod session;

pub use self::{booking::*, session::*};
