use kernel::interface::database::DatabaseConnection;
use kernel::interface::query::{DependOnSessionQuery, SessionQuery};
use kernel::prelude::entity::{SessionToken, UserId};
use kernel::KernelError;

use crate::transfer::AuthenticateDto;

#[async_trait::async_trait]
pub trait AuthenticateService: 'static + Sync + Send + DependOnSessionQuery {
    /// Resolves a bearer token to the user that owns the session.
    async fn authenticate(
        &self,
        dto: AuthenticateDto,
    ) -> error_stack::Result<Option<UserId>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let token = SessionToken::new(dto.token);
        let session = self
            .session_query()
            .find_by_token(&mut connection, &token)
            .await?;

        Ok(session.map(|session| *session.user_id()))
    }
}

impl<T> AuthenticateService for T where T: DependOnSessionQuery {}
