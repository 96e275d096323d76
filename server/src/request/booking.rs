use crate::controller::Intake;
use application::transfer::{CreateBookingDto, GetBookingDto, UpdateBookingDto};
use kernel::prelude::entity::UserId;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    room_id: i32,
}

#[derive(Debug)]
pub struct GetBookingRequest {
    user_id: UserId,
}

impl GetBookingRequest {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

pub struct BookingTransformer;

impl Intake<GetBookingRequest> for BookingTransformer {
    type To = GetBookingDto;
    fn emit(&self, GetBookingRequest { user_id }: GetBookingRequest) -> Self::To {
        GetBookingDto {
            user_id: user_id.into(),
        }
    }
}

impl Intake<(UserId, BookingRequest)> for BookingTransformer {
    type To = CreateBookingDto;
    fn emit(&self, (user_id, BookingRequest { room_id }): (UserId, BookingRequest)) -> Self::To {
        CreateBookingDto {
            user_id: user_id.into(),
            room_id,
        }
    }
}

impl Intake<(UserId, i32, BookingRequest)> for BookingTransformer {
    type To = UpdateBookingDto;
    fn emit(
        &self,
        (user_id, booking_id, BookingRequest { room_id }): (UserId, i32, BookingRequest),
    ) -> Self::To {
        UpdateBookingDto {
            user_id: user_id.into(),
            room_id,
            booking_id,
        }
    }
}
