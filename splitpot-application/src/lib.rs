#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod ports;
pub mod processor;

pub use error::{ScriptParseError, SettlementBuildError};
pub use model::{
    Command, Contribution, Declaration, Script, ScriptStatement, ScriptStatementWithLine,
    SettlementResult, Statement,
};
pub use ports::{ScriptParser, TransferPlanner};
pub use processor::ScriptProcessor;
