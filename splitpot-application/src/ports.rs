use crate::{error::ScriptParseError, model::Script};
use splitpot_domain::{BalanceSheet, Transfer};

pub trait ScriptParser: Send + Sync {
    fn parse<'a>(&self, content: &'a str) -> Result<Script<'a>, ScriptParseError>;
}

pub trait TransferPlanner: Send + Sync {
    fn plan(&self, standings: &BalanceSheet) -> Vec<Transfer>;
}
