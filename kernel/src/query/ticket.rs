use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{EnrollmentId, Ticket};
use crate::KernelError;

#[async_trait::async_trait]
pub trait TicketQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    /// The returned ticket always carries its [`TicketType`](crate::entity::TicketType).
    async fn find_by_enrollment_id(
        &self,
        con: &mut Self::Transaction,
        enrollment_id: &EnrollmentId,
    ) -> error_stack::Result<Option<Ticket>, KernelError>;
}

pub trait DependOnTicketQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type TicketQuery: TicketQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn ticket_query(&self) -> &Self::TicketQuery;
}
