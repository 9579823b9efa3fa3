use crate::{
    error::{ScriptParseError, SettlementBuildError},
    model::{Script, ScriptStatement, SettlementResult, Statement},
    ports::{ScriptParser, TransferPlanner},
};
use splitpot_domain::{Ledger, Money};

/// Wires the parser and planner ports to the domain ledger.
///
/// Commands embedded in a script see only the statements above them, so
/// every operation takes an optional statement-count prefix.
#[derive(Clone, Copy)]
pub struct ScriptProcessor<'a> {
    parser: &'a dyn ScriptParser,
    planner: &'a dyn TransferPlanner,
}

impl<'a> ScriptProcessor<'a> {
    pub fn new(parser: &'a dyn ScriptParser, planner: &'a dyn TransferPlanner) -> Self {
        Self { parser, planner }
    }

    pub fn parse_script<'b>(&self, content: &'b str) -> Result<Script<'b>, ScriptParseError> {
        self.parser.parse(content)
    }

    pub fn build_ledger(&self, script: &Script<'_>) -> Result<Ledger, SettlementBuildError> {
        self.build_ledger_for_prefix(script, script.statements().len())
    }

    /// Replays the first `prefix_len` statements into a fresh ledger.
    ///
    /// A declaration registers each member with a zero contribution; a
    /// rejected statement reports its source line and leaves nothing
    /// half-applied at the caller's level (the partial ledger is dropped).
    pub fn build_ledger_for_prefix(
        &self,
        script: &Script<'_>,
        prefix_len: usize,
    ) -> Result<Ledger, SettlementBuildError> {
        let mut ledger = Ledger::new();

        for stmt in script.statements().iter().take(prefix_len) {
            let ScriptStatement::Domain(domain) = &stmt.statement else {
                continue;
            };
            match domain {
                Statement::Declaration(decl) => {
                    for member in &decl.members {
                        ledger.register_contribution(member, Money::ZERO).map_err(
                            |source| SettlementBuildError::RejectedContribution {
                                line: stmt.line,
                                source,
                            },
                        )?;
                    }
                }
                Statement::Contribution(contribution) => {
                    ledger
                        .register_contribution(contribution.name, contribution.amount)
                        .map_err(|source| SettlementBuildError::RejectedContribution {
                            line: stmt.line,
                            source,
                        })?;
                }
            }
        }

        Ok(ledger)
    }

    pub fn settlement_for(
        &self,
        script: &Script<'_>,
    ) -> Result<SettlementResult, SettlementBuildError> {
        self.settlement_for_prefix(script, script.statements().len())
    }

    pub fn settlement_for_prefix(
        &self,
        script: &Script<'_>,
        prefix_len: usize,
    ) -> Result<SettlementResult, SettlementBuildError> {
        let ledger = self.build_ledger_for_prefix(script, prefix_len)?;
        let standings = ledger.compute_balances()?;
        let transfers = self.planner.plan(&standings);
        let per_head_share = standings
            .values()
            .next()
            .map(|standing| standing.fair_share)
            .unwrap_or(Money::ZERO);

        Ok(SettlementResult {
            total_spend: ledger.total_spend(),
            per_head_share,
            standings,
            transfers,
        })
    }
}
