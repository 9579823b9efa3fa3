use crate::model::Money;
use smol_str::SmolStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Contribution amounts must not be negative (got {0})")]
    InvalidAmount(Money),
    #[error("Participant names must not be blank")]
    BlankName,
    #[error("Cannot settle a pool with no participants")]
    NoParticipants,
    #[error("Unknown participant '{0}'")]
    UnknownParticipant(SmolStr),
}
