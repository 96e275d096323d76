mod booking;
mod enrollment;
mod room;
mod session;
mod ticket;

pub use self::{booking::*, enrollment::*, room::*, session::*, ticket::*};
