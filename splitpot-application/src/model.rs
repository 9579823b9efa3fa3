use splitpot_domain::{BalanceSheet, Money, Transfer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'a> {
    pub members: Vec<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contribution<'a> {
    pub name: &'a str,
    pub amount: Money,
}

/// A statement that mutates the pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement<'a> {
    Declaration(Declaration<'a>),
    Contribution(Contribution<'a>),
}

/// A statement that asks for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Total,
    Balances,
    Settle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStatement<'a> {
    Domain(Statement<'a>),
    Command(Command),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStatementWithLine<'a> {
    pub line: usize,
    pub statement: ScriptStatement<'a>,
}

/// A parsed script, statements in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script<'a> {
    statements: Vec<ScriptStatementWithLine<'a>>,
}

impl<'a> Script<'a> {
    pub fn new(statements: Vec<ScriptStatementWithLine<'a>>) -> Self {
        Self { statements }
    }

    pub fn statements(&self) -> &[ScriptStatementWithLine<'a>] {
        &self.statements
    }

    pub fn has_commands(&self) -> bool {
        self.statements
            .iter()
            .any(|stmt| matches!(stmt.statement, ScriptStatement::Command(_)))
    }
}

/// Everything a caller needs to render a settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementResult {
    pub total_spend: Money,
    pub per_head_share: Money,
    pub standings: BalanceSheet,
    pub transfers: Vec<Transfer>,
}
