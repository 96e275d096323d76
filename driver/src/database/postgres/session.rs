use sqlx::PgConnection;

use kernel::interface::query::SessionQuery;
use kernel::prelude::entity::{Session, SessionId, SessionToken, UserId};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresSessionRepository;

#[async_trait::async_trait]
impl SessionQuery for PostgresSessionRepository {
    type Transaction = PostgresTransaction;
    async fn find_by_token(
        &self,
        con: &mut PostgresTransaction,
        token: &SessionToken,
    ) -> error_stack::Result<Option<Session>, KernelError> {
        PgSessionInternal::find_by_token(con, token).await
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    id: i32,
    user_id: i32,
    token: String,
}

impl From<SessionRow> for Session {
    fn from(value: SessionRow) -> Self {
        Session::new(
            SessionId::new(value.id),
            UserId::new(value.user_id),
            SessionToken::new(value.token),
        )
    }
}

pub(in crate::database) struct PgSessionInternal;

impl PgSessionInternal {
    #[tracing::instrument(skip(con))]
    async fn find_by_token(
        con: &mut PgConnection,
        token: &SessionToken,
    ) -> error_stack::Result<Option<Session>, KernelError> {
        let row = sqlx::query_as::<_, SessionRow>(
            // language=postgresql
            r#"
            SELECT id, user_id, token
            FROM sessions
            WHERE token = $1
            "#,
        )
        .bind(token.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Session::from))
    }
}
