use std::ops::{Deref, DerefMut};

use error_stack::{Report, ResultExt};
use sqlx::{Error, PgConnection, Pool, Postgres};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnBookingQuery, DependOnEnrollmentQuery, DependOnRoomQuery, DependOnSessionQuery,
    DependOnTicketQuery,
};
use kernel::interface::update::DependOnBookingModifier;
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

pub use self::{booking::*, enrollment::*, room::*, session::*, ticket::*};

mod booking;
mod enrollment;
#[cfg(test)]
mod fixture;
mod room;
mod session;
mod ticket;

static POSTGRES_URL: &str = "POSTGRES_URL";

pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL)?;
        let pool = Pool::connect(&url)
            .await
            .convert_error()
            .attach_printable_lazy(|| "Failed to connect postgres")?;
        Ok(Self { pool })
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for PostgresDatabase {
    type Transaction = PostgresTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let transaction = self.pool.begin().await.convert_error()?;
        Ok(PostgresTransaction(transaction))
    }
}

/// Runs at the server's default isolation level. Reads taken inside it do
/// not lock the rows they return.
pub struct PostgresTransaction(sqlx::Transaction<'static, Postgres>);

#[async_trait::async_trait]
impl Transaction for PostgresTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        self.0.commit().await.convert_error()
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        self.0.rollback().await.convert_error()
    }
}

impl Deref for PostgresTransaction {
    type Target = PgConnection;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PostgresTransaction {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl DependOnEnrollmentQuery for PostgresDatabase {
    type EnrollmentQuery = PostgresEnrollmentRepository;
    fn enrollment_query(&self) -> &Self::EnrollmentQuery {
        &PostgresEnrollmentRepository
    }
}

impl DependOnTicketQuery for PostgresDatabase {
    type TicketQuery = PostgresTicketRepository;
    fn ticket_query(&self) -> &Self::TicketQuery {
        &PostgresTicketRepository
    }
}

impl DependOnRoomQuery for PostgresDatabase {
    type RoomQuery = PostgresRoomRepository;
    fn room_query(&self) -> &Self::RoomQuery {
        &PostgresRoomRepository
    }
}

impl DependOnBookingQuery for PostgresDatabase {
    type BookingQuery = PostgresBookingRepository;
    fn booking_query(&self) -> &Self::BookingQuery {
        &PostgresBookingRepository
    }
}

impl DependOnBookingModifier for PostgresDatabase {
    type BookingModifier = PostgresBookingRepository;
    fn booking_modifier(&self) -> &Self::BookingModifier {
        &PostgresBookingRepository
    }
}

impl DependOnSessionQuery for PostgresDatabase {
    type SessionQuery = PostgresSessionRepository;
    fn session_query(&self) -> &Self::SessionQuery {
        &PostgresSessionRepository
    }
}

impl<T> ConvertError for Result<T, Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| match error {
            Error::PoolTimedOut => Report::from(error).change_context(KernelError::Timeout),
            _ => Report::from(error).change_context(KernelError::Internal),
        })
    }
}
