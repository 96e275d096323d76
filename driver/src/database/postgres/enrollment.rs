use sqlx::PgConnection;

use kernel::interface::query::EnrollmentQuery;
use kernel::prelude::entity::{Address, Enrollment, EnrollmentId, EnrollmentName, UserId};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresEnrollmentRepository;

#[async_trait::async_trait]
impl EnrollmentQuery for PostgresEnrollmentRepository {
    type Transaction = PostgresTransaction;
    async fn find_by_user_id(
        &self,
        con: &mut PostgresTransaction,
        user_id: &UserId,
    ) -> error_stack::Result<Option<Enrollment>, KernelError> {
        PgEnrollmentInternal::find_by_user_id(con, user_id).await
    }
}

#[derive(sqlx::FromRow)]
struct EnrollmentRow {
    id: i32,
    user_id: i32,
    name: String,
    cep: Option<String>,
    street: Option<String>,
    city: Option<String>,
    state: Option<String>,
    number: Option<String>,
    neighborhood: Option<String>,
    address_detail: Option<String>,
}

impl From<EnrollmentRow> for Enrollment {
    fn from(value: EnrollmentRow) -> Self {
        let address = match (
            value.cep,
            value.street,
            value.city,
            value.state,
            value.number,
            value.neighborhood,
        ) {
            (Some(cep), Some(street), Some(city), Some(state), Some(number), Some(neighborhood)) => {
                Some(Address::new(
                    cep,
                    street,
                    city,
                    state,
                    number,
                    neighborhood,
                    value.address_detail,
                ))
            }
            _ => None,
        };
        Enrollment::new(
            EnrollmentId::new(value.id),
            UserId::new(value.user_id),
            EnrollmentName::new(value.name),
            address,
        )
    }
}

pub(in crate::database) struct PgEnrollmentInternal;

impl PgEnrollmentInternal {
    #[tracing::instrument(skip(con))]
    async fn find_by_user_id(
        con: &mut PgConnection,
        user_id: &UserId,
    ) -> error_stack::Result<Option<Enrollment>, KernelError> {
        let row = sqlx::query_as::<_, EnrollmentRow>(
            // language=postgresql
            r#"
            SELECT
                e.id, e.user_id, e.name,
                a.cep, a.street, a.city, a.state, a.number, a.neighborhood, a.address_detail
            FROM enrollments e
            LEFT JOIN addresses a ON a.enrollment_id = e.id
            WHERE e.user_id = $1
            "#,
        )
        .bind(user_id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Enrollment::from))
    }
}
