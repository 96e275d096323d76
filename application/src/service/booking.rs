use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{BookingQuery, DependOnBookingQuery};
use kernel::interface::update::{BookingModifier, DependOnBookingModifier};
use kernel::prelude::entity::{BookingId, RoomId, UserId};
use kernel::KernelError;

use crate::service::BookingEligibilityService;
use crate::transfer::{BookingDto, CreateBookingDto, GetBookingDto, UpdateBookingDto};

#[async_trait::async_trait]
pub trait GetBookingService: 'static + Sync + Send + DependOnBookingQuery {
    async fn get_booking(
        &self,
        dto: GetBookingDto,
    ) -> error_stack::Result<BookingDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let user_id = UserId::new(dto.user_id);
        let found = self
            .booking_query()
            .find_with_room_by_user_id(&mut connection, &user_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("{user_id:?} has no booking"))
            })?;

        Ok(BookingDto::from(found))
    }
}

impl<T> GetBookingService for T where T: DependOnBookingQuery {}

#[async_trait::async_trait]
pub trait CreateBookingService:
    'static + Sync + Send + BookingEligibilityService + DependOnBookingModifier
{
    async fn create_booking(
        &self,
        dto: CreateBookingDto,
    ) -> error_stack::Result<BookingId, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let user_id = UserId::new(dto.user_id);
        let room_id = RoomId::new(dto.room_id);
        self.validate_enrollment(&mut connection, &user_id).await?;
        self.check_room_availability(&mut connection, &room_id).await?;

        let booking = self
            .booking_modifier()
            .create(&mut connection, &user_id, &room_id)
            .await?;
        connection.commit().await?;

        tracing::info!("{:?} booked {:?} for {:?}", user_id, room_id, booking.id());
        Ok(*booking.id())
    }
}

impl<T> CreateBookingService for T where T: BookingEligibilityService + DependOnBookingModifier {}

#[async_trait::async_trait]
pub trait UpdateBookingService:
    'static + Sync + Send + BookingEligibilityService + DependOnBookingModifier
{
    async fn update_booking(
        &self,
        dto: UpdateBookingDto,
    ) -> error_stack::Result<BookingId, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let user_id = UserId::new(dto.user_id);
        let room_id = RoomId::new(dto.room_id);
        let booking_id = BookingId::new(dto.booking_id);
        self.validate_enrollment(&mut connection, &user_id).await?;
        self.check_room_availability(&mut connection, &room_id).await?;

        if self
            .booking_query()
            .find_by_user_id(&mut connection, &user_id)
            .await?
            .is_none()
        {
            return Err(Report::new(KernelError::Forbidden)
                .attach_printable(format!("{user_id:?} has no booking to change")));
        }

        let booking = self
            .booking_modifier()
            .update_room(&mut connection, &booking_id, &user_id, &room_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::Forbidden)
                    .attach_printable(format!("{booking_id:?} is not owned by {user_id:?}"))
            })?;
        connection.commit().await?;

        tracing::info!("{:?} moved {:?} to {:?}", user_id, booking.id(), room_id);
        Ok(*booking.id())
    }
}

impl<T> UpdateBookingService for T where T: BookingEligibilityService + DependOnBookingModifier {}
