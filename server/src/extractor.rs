use application::service::AuthenticateService;
use application::transfer::AuthenticateDto;
use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Json, Request};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::RequestPartsExt;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use kernel::prelude::entity::UserId;
use serde::de::DeserializeOwned;

/// Router state able to resolve session tokens.
pub trait DependOnAuthenticateService: 'static + Sync + Send {
    type AuthenticateService: AuthenticateService;
    fn authenticate_service(&self) -> &Self::AuthenticateService;
}

/// The user owning the session named by the request's bearer token.
#[derive(Debug, Clone, Copy)]
pub struct AuthorizedUser(UserId);

impl AuthorizedUser {
    pub fn id(&self) -> UserId {
        self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthorizedUser
where
    S: DependOnAuthenticateService,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| StatusCode::UNAUTHORIZED)?;

        let user = state
            .authenticate_service()
            .authenticate(AuthenticateDto {
                token: bearer.token().to_string(),
            })
            .await
            .map_err(|report| {
                tracing::error!("{report:?}");
                StatusCode::UNAUTHORIZED
            })?;

        user.map(Self).ok_or(StatusCode::UNAUTHORIZED)
    }
}

/// JSON body whose every rejection (syntax, missing field, wrong type or
/// content type) answers 400.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("Rejected body: {rejection}");
                StatusCode::BAD_REQUEST
            })?;
        Ok(Self(value))
    }
}
