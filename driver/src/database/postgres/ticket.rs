use error_stack::Report;
use sqlx::PgConnection;

use kernel::interface::query::TicketQuery;
use kernel::prelude::entity::{
    EnrollmentId, IncludesHotel, IsRemote, Ticket, TicketId, TicketPrice, TicketStatus,
    TicketType, TicketTypeId, TicketTypeName,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresTicketRepository;

#[async_trait::async_trait]
impl TicketQuery for PostgresTicketRepository {
    type Transaction = PostgresTransaction;
    async fn find_by_enrollment_id(
        &self,
        con: &mut PostgresTransaction,
        enrollment_id: &EnrollmentId,
    ) -> error_stack::Result<Option<Ticket>, KernelError> {
        PgTicketInternal::find_by_enrollment_id(con, enrollment_id).await
    }
}

#[derive(sqlx::FromRow)]
struct TicketRow {
    id: i32,
    enrollment_id: i32,
    status: String,
    ticket_type_id: i32,
    ticket_type_name: String,
    price: i32,
    is_remote: bool,
    includes_hotel: bool,
}

impl TryFrom<TicketRow> for Ticket {
    type Error = Report<KernelError>;

    fn try_from(value: TicketRow) -> Result<Self, Self::Error> {
        let status = TicketStatus::try_from(value.status.as_str())?;
        Ok(Ticket::new(
            TicketId::new(value.id),
            EnrollmentId::new(value.enrollment_id),
            status,
            TicketType::new(
                TicketTypeId::new(value.ticket_type_id),
                TicketTypeName::new(value.ticket_type_name),
                TicketPrice::new(value.price),
                IsRemote::new(value.is_remote),
                IncludesHotel::new(value.includes_hotel),
            ),
        ))
    }
}

pub(in crate::database) struct PgTicketInternal;

impl PgTicketInternal {
    #[tracing::instrument(skip(con))]
    async fn find_by_enrollment_id(
        con: &mut PgConnection,
        enrollment_id: &EnrollmentId,
    ) -> error_stack::Result<Option<Ticket>, KernelError> {
        let row = sqlx::query_as::<_, TicketRow>(
            // language=postgresql
            r#"
            SELECT
                t.id, t.enrollment_id, t.status,
                tt.id AS ticket_type_id, tt.name AS ticket_type_name,
                tt.price, tt.is_remote, tt.includes_hotel
            FROM tickets t
            INNER JOIN ticket_types tt ON tt.id = t.ticket_type_id
            WHERE t.enrollment_id = $1
            "#,
        )
        .bind(enrollment_id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(Ticket::try_from).transpose()
    }
}
