use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Address {
    cep: String,
    street: String,
    city: String,
    state: String,
    number: String,
    neighborhood: String,
    address_detail: Option<String>,
}

impl Address {
    pub fn new(
        cep: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        number: impl Into<String>,
        neighborhood: impl Into<String>,
        address_detail: Option<String>,
    ) -> Self {
        Self {
            cep: cep.into(),
            street: street.into(),
            city: city.into(),
            state: state.into(),
            number: number.into(),
            neighborhood: neighborhood.into(),
            address_detail,
        }
    }
}
