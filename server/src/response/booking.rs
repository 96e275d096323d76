use crate::controller::Exhaust;
use application::transfer::{BookingDto, RoomDto};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::prelude::entity::BookingId;
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    id: i32,
    name: String,
    capacity: i32,
    hotel_id: i32,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    updated_at: OffsetDateTime,
}

impl From<RoomDto> for RoomResponse {
    fn from(value: RoomDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
            capacity: value.capacity,
            hotel_id: value.hotel_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    id: i32,
    #[serde(rename = "Room")]
    room: RoomResponse,
}

impl IntoResponse for BookingResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingIdResponse {
    booking_id: BookingId,
}

impl IntoResponse for BookingIdResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct BookingPresenter;

impl Exhaust<BookingDto> for BookingPresenter {
    type To = BookingResponse;
    fn emit(&self, input: BookingDto) -> Self::To {
        BookingResponse {
            id: input.id,
            room: RoomResponse::from(input.room),
        }
    }
}

impl Exhaust<BookingId> for BookingPresenter {
    type To = BookingIdResponse;
    fn emit(&self, input: BookingId) -> Self::To {
        BookingIdResponse { booking_id: input }
    }
}
