use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Booking, BookingId, RoomId, UserId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookingModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        user_id: &UserId,
        room_id: &RoomId,
    ) -> error_stack::Result<Booking, KernelError>;

    /// Moves the booking to `room_id`. Returns `None` when no booking with
    /// `booking_id` is owned by `user_id`.
    async fn update_room(
        &self,
        con: &mut Self::Transaction,
        booking_id: &BookingId,
        user_id: &UserId,
        room_id: &RoomId,
    ) -> error_stack::Result<Option<Booking>, KernelError>;
}

pub trait DependOnBookingModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type BookingModifier: BookingModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn booking_modifier(&self) -> &Self::BookingModifier;
}
