mod id;
mod status;
mod ticket_type;

pub use self::{id::*, status::*, ticket_type::*};
use crate::entity::EnrollmentId;
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Ticket {
    id: TicketId,
    enrollment_id: EnrollmentId,
    status: TicketStatus,
    ticket_type: TicketType,
}

impl Ticket {
    pub fn new(
        id: TicketId,
        enrollment_id: EnrollmentId,
        status: TicketStatus,
        ticket_type: TicketType,
    ) -> Self {
        Self {
            id,
            enrollment_id,
            status,
            ticket_type,
        }
    }

    /// A ticket grants a hotel room only when it is for in-person attendance,
    /// its type bundles accommodation and it has been paid for.
    pub fn permits_hotel_booking(&self) -> bool {
        !*self.ticket_type.is_remote().as_ref()
            && *self.ticket_type.includes_hotel().as_ref()
            && self.status != TicketStatus::Reserved
    }
}
