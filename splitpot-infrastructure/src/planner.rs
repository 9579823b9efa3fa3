use splitpot_application::TransferPlanner;
use splitpot_domain::{BalanceSheet, SettlementCalculator, Transfer};

/// `TransferPlanner` backed by the greedy largest-first matcher.
#[derive(Default)]
pub struct LargestFirstPlanner;

impl TransferPlanner for LargestFirstPlanner {
    fn plan(&self, standings: &BalanceSheet) -> Vec<Transfer> {
        SettlementCalculator.suggest_transfers(standings)
    }
}
