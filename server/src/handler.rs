use driver::database::PostgresDatabase;
use kernel::KernelError;
use std::ops::Deref;
use std::sync::Arc;
use vodca::References;

use crate::extractor::DependOnAuthenticateService;

/// Router state shared by every booking route.
#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let pgpool = PostgresDatabase::new().await?;
        tracing::info!("Connected to postgres");
        Ok(Self(Arc::new(Handler { pgpool })))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

impl DependOnAuthenticateService for AppModule {
    type AuthenticateService = PostgresDatabase;
    fn authenticate_service(&self) -> &Self::AuthenticateService {
        self.pgpool()
    }
}

/// Bookings, enrollments, tickets and sessions all live in the same
/// database, so one pool serves every service.
#[derive(References)]
pub struct Handler {
    pgpool: PostgresDatabase,
}
