use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::extractor::{AuthorizedUser, ValidatedJson};
use crate::handler::AppModule;
use crate::request::{BookingRequest, BookingTransformer, GetBookingRequest};
use crate::response::BookingPresenter;
use application::service::{CreateBookingService, GetBookingService, UpdateBookingService};
use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::Router;

pub trait BookingRouter {
    fn route_booking(self) -> Self;
}

impl BookingRouter for Router<AppModule> {
    fn route_booking(self) -> Self {
        self.route(
            "/booking",
            get(
                |State(module): State<AppModule>, user: AuthorizedUser| async move {
                    Controller::new(BookingTransformer, BookingPresenter)
                        .intake(GetBookingRequest::new(user.id()))
                        .handle(|dto| async move { module.pgpool().get_booking(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>,
                 user: AuthorizedUser,
                 ValidatedJson(req): ValidatedJson<BookingRequest>| async move {
                    Controller::new(BookingTransformer, BookingPresenter)
                        .intake((user.id(), req))
                        .handle(|dto| async move { module.pgpool().create_booking(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/booking/:booking_id",
            put(
                |State(module): State<AppModule>,
                 user: AuthorizedUser,
                 Path(booking_id): Path<i32>,
                 ValidatedJson(req): ValidatedJson<BookingRequest>| async move {
                    Controller::new(BookingTransformer, BookingPresenter)
                        .intake((user.id(), booking_id, req))
                        .handle(|dto| async move { module.pgpool().update_booking(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
