use splitpot_domain::LedgerError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptParseError {
    #[error("Syntax error at line {line}: {detail}")]
    SyntaxError { line: usize, detail: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettlementBuildError {
    /// A statement was rejected by the ledger; `line` points at it.
    #[error("Line {line}: {source}")]
    RejectedContribution { line: usize, source: LedgerError },
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
