use destructure::Destructure;
use vodca::{AsRefln, Fromln, References};

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct TicketType {
    id: TicketTypeId,
    name: TicketTypeName,
    price: TicketPrice,
    is_remote: IsRemote,
    includes_hotel: IncludesHotel,
}

impl TicketType {
    pub fn new(
        id: TicketTypeId,
        name: TicketTypeName,
        price: TicketPrice,
        is_remote: IsRemote,
        includes_hotel: IncludesHotel,
    ) -> Self {
        Self {
            id,
            name,
            price,
            is_remote,
            includes_hotel,
        }
    }
}

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Fromln, AsRefln)]
pub struct TicketTypeId(i32);

impl TicketTypeId {
    pub fn new(id: impl Into<i32>) -> Self {
        Self(id.into())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct TicketTypeName(String);

impl TicketTypeName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln)]
pub struct TicketPrice(i32);

impl TicketPrice {
    pub fn new(price: impl Into<i32>) -> Self {
        Self(price.into())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln)]
pub struct IsRemote(bool);

impl IsRemote {
    pub fn new(value: impl Into<bool>) -> Self {
        Self(value.into())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln)]
pub struct IncludesHotel(bool);

impl IncludesHotel {
    pub fn new(value: impl Into<bool>) -> Self {
        Self(value.into())
    }
}
