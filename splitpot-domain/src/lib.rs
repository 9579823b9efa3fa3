#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod ledger;
pub mod model;
pub mod services;

pub use error::LedgerError;
pub use ledger::Ledger;
pub use model::{BalanceSheet, Money, ParticipantStanding, Transfer, DISPLAY_SCALE};
pub use services::SettlementCalculator;
