mod booking;
mod common;
mod enrollment;
mod hotel;
mod room;
mod session;
mod ticket;
mod user;

pub use self::{
    booking::*, common::*, enrollment::*, hotel::*, room::*, session::*, ticket::*, user::*,
};
