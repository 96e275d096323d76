use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Enrollment, UserId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait EnrollmentQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_user_id(
        &self,
        con: &mut Self::Transaction,
        user_id: &UserId,
    ) -> error_stack::Result<Option<Enrollment>, KernelError>;
}

pub trait DependOnEnrollmentQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type EnrollmentQuery: EnrollmentQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn enrollment_query(&self) -> &Self::EnrollmentQuery;
}
