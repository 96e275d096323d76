use error_stack::Report;

use kernel::interface::database::DatabaseConnection;
use kernel::interface::query::{
    BookingQuery, DependOnBookingQuery, DependOnEnrollmentQuery, DependOnRoomQuery,
    DependOnTicketQuery, EnrollmentQuery, RoomQuery, TicketQuery,
};
use kernel::prelude::entity::{RoomId, UserId};
use kernel::KernelError;

/// Gates every booking write. Both checks only read.
#[async_trait::async_trait]
pub trait BookingEligibilityService:
    'static
    + Sync
    + Send
    + DependOnEnrollmentQuery
    + DependOnTicketQuery
    + DependOnRoomQuery
    + DependOnBookingQuery
{
    async fn validate_enrollment(
        &self,
        con: &mut <Self::DatabaseConnection as DatabaseConnection>::Transaction,
        user_id: &UserId,
    ) -> error_stack::Result<(), KernelError> {
        let enrollment = self
            .enrollment_query()
            .find_by_user_id(con, user_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::Forbidden)
                    .attach_printable(format!("{user_id:?} has no enrollment"))
            })?;

        let ticket = self
            .ticket_query()
            .find_by_enrollment_id(con, enrollment.id())
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::Forbidden)
                    .attach_printable(format!("{:?} has no ticket", enrollment.id()))
            })?;

        if !ticket.permits_hotel_booking() {
            return Err(Report::new(KernelError::Forbidden).attach_printable(format!(
                "{:?} does not grant a hotel room (status: {}, remote: {}, hotel: {})",
                ticket.id(),
                ticket.status().as_ref(),
                ticket.ticket_type().is_remote().as_ref(),
                ticket.ticket_type().includes_hotel().as_ref(),
            )));
        }

        Ok(())
    }

    async fn check_room_availability(
        &self,
        con: &mut <Self::DatabaseConnection as DatabaseConnection>::Transaction,
        room_id: &RoomId,
    ) -> error_stack::Result<(), KernelError> {
        if self.room_query().find_by_id(con, room_id).await?.is_none() {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("{room_id:?} does not exist")));
        }

        // A single booking fills the room.
        if let Some(booking) = self.booking_query().find_by_room_id(con, room_id).await? {
            return Err(Report::new(KernelError::Forbidden)
                .attach_printable(format!("{room_id:?} is taken by {:?}", booking.id())));
        }

        Ok(())
    }
}

impl<T> BookingEligibilityService for T where
    T: DependOnEnrollmentQuery + DependOnTicketQuery + DependOnRoomQuery + DependOnBookingQuery
{
}
