use sqlx::PgConnection;
use time::OffsetDateTime;

use kernel::interface::query::BookingQuery;
use kernel::interface::update::BookingModifier;
use kernel::prelude::entity::{
    Booking, BookingId, CreatedAt, HotelId, Room, RoomCapacity, RoomId, RoomName, UpdatedAt,
    UserId,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresBookingRepository;

#[async_trait::async_trait]
impl BookingQuery for PostgresBookingRepository {
    type Transaction = PostgresTransaction;
    async fn find_by_room_id(
        &self,
        con: &mut PostgresTransaction,
        room_id: &RoomId,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        PgBookingInternal::find_by_room_id(con, room_id).await
    }

    async fn find_by_user_id(
        &self,
        con: &mut PostgresTransaction,
        user_id: &UserId,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        PgBookingInternal::find_by_user_id(con, user_id).await
    }

    async fn find_with_room_by_user_id(
        &self,
        con: &mut PostgresTransaction,
        user_id: &UserId,
    ) -> error_stack::Result<Option<(Booking, Room)>, KernelError> {
        PgBookingInternal::find_with_room_by_user_id(con, user_id).await
    }
}

#[async_trait::async_trait]
impl BookingModifier for PostgresBookingRepository {
    type Transaction = PostgresTransaction;
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        user_id: &UserId,
        room_id: &RoomId,
    ) -> error_stack::Result<Booking, KernelError> {
        PgBookingInternal::create(con, user_id, room_id).await
    }

    async fn update_room(
        &self,
        con: &mut PostgresTransaction,
        booking_id: &BookingId,
        user_id: &UserId,
        room_id: &RoomId,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        PgBookingInternal::update_room(con, booking_id, user_id, room_id).await
    }
}

#[derive(sqlx::FromRow)]
struct BookingRow {
    id: i32,
    user_id: i32,
    room_id: i32,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
}

impl From<BookingRow> for Booking {
    fn from(value: BookingRow) -> Self {
        Booking::new(
            BookingId::new(value.id),
            UserId::new(value.user_id),
            RoomId::new(value.room_id),
            CreatedAt::new(value.created_at),
            UpdatedAt::new(value.updated_at),
        )
    }
}

#[derive(sqlx::FromRow)]
struct BookingWithRoomRow {
    id: i32,
    user_id: i32,
    room_id: i32,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
    room_name: String,
    room_capacity: i32,
    room_hotel_id: i32,
    room_created_at: OffsetDateTime,
    room_updated_at: OffsetDateTime,
}

impl From<BookingWithRoomRow> for (Booking, Room) {
    fn from(value: BookingWithRoomRow) -> Self {
        let booking = Booking::new(
            BookingId::new(value.id),
            UserId::new(value.user_id),
            RoomId::new(value.room_id),
            CreatedAt::new(value.created_at),
            UpdatedAt::new(value.updated_at),
        );
        let room = Room::new(
            RoomId::new(value.room_id),
            RoomName::new(value.room_name),
            RoomCapacity::new(value.room_capacity),
            HotelId::new(value.room_hotel_id),
            CreatedAt::new(value.room_created_at),
            UpdatedAt::new(value.room_updated_at),
        );
        (booking, room)
    }
}

pub(in crate::database) struct PgBookingInternal;

impl PgBookingInternal {
    #[tracing::instrument(skip(con))]
    async fn find_by_room_id(
        con: &mut PgConnection,
        room_id: &RoomId,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        let row = sqlx::query_as::<_, BookingRow>(
            // language=postgresql
            r#"
            SELECT id, user_id, room_id, created_at, updated_at
            FROM bookings
            WHERE room_id = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(room_id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Booking::from))
    }

    #[tracing::instrument(skip(con))]
    async fn find_by_user_id(
        con: &mut PgConnection,
        user_id: &UserId,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        let row = sqlx::query_as::<_, BookingRow>(
            // language=postgresql
            r#"
            SELECT id, user_id, room_id, created_at, updated_at
            FROM bookings
            WHERE user_id = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(user_id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Booking::from))
    }

    #[tracing::instrument(skip(con))]
    async fn find_with_room_by_user_id(
        con: &mut PgConnection,
        user_id: &UserId,
    ) -> error_stack::Result<Option<(Booking, Room)>, KernelError> {
        let row = sqlx::query_as::<_, BookingWithRoomRow>(
            // language=postgresql
            r#"
            SELECT
                b.id, b.user_id, b.room_id, b.created_at, b.updated_at,
                r.name AS room_name,
                r.capacity AS room_capacity,
                r.hotel_id AS room_hotel_id,
                r.created_at AS room_created_at,
                r.updated_at AS room_updated_at
            FROM bookings b
            INNER JOIN rooms r ON r.id = b.room_id
            WHERE b.user_id = $1
            ORDER BY b.id
            LIMIT 1
            "#,
        )
        .bind(user_id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(<(Booking, Room)>::from))
    }

    #[tracing::instrument(skip(con))]
    async fn create(
        con: &mut PgConnection,
        user_id: &UserId,
        room_id: &RoomId,
    ) -> error_stack::Result<Booking, KernelError> {
        let row = sqlx::query_as::<_, BookingRow>(
            // language=postgresql
            r#"
            INSERT INTO bookings (user_id, room_id)
            VALUES ($1, $2)
            RETURNING id, user_id, room_id, created_at, updated_at
            "#,
        )
        .bind(user_id.as_ref())
        .bind(room_id.as_ref())
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(Booking::from(row))
    }

    #[tracing::instrument(skip(con))]
    async fn update_room(
        con: &mut PgConnection,
        booking_id: &BookingId,
        user_id: &UserId,
        room_id: &RoomId,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        let row = sqlx::query_as::<_, BookingRow>(
            // language=postgresql
            r#"
            UPDATE bookings
            SET room_id = $3, updated_at = now()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, room_id, created_at, updated_at
            "#,
        )
        .bind(booking_id.as_ref())
        .bind(user_id.as_ref())
        .bind(room_id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Booking::from))
    }
}
