use error_stack::Report;

use crate::KernelError;

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum TicketStatus {
    Reserved,
    Paid,
}

impl AsRef<str> for TicketStatus {
    fn as_ref(&self) -> &str {
        match self {
            TicketStatus::Reserved => "RESERVED",
            TicketStatus::Paid => "PAID",
        }
    }
}

impl TryFrom<&str> for TicketStatus {
    type Error = Report<KernelError>;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "RESERVED" => Ok(TicketStatus::Reserved),
            "PAID" => Ok(TicketStatus::Paid),
            other => Err(Report::new(KernelError::Internal)
                .attach_printable(format!("Unknown ticket status: {other}"))),
        }
    }
}
