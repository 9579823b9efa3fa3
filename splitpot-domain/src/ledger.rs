use crate::{
    error::LedgerError,
    model::{BalanceSheet, Money, ParticipantStanding},
};
use rust_decimal::Decimal;
use smol_str::SmolStr;
use std::collections::BTreeMap;

/// Caller-owned record of who paid what into the shared pool.
///
/// A participant exists from their first registered contribution onward,
/// including a zero contribution (a member who joined but paid nothing).
/// Contributions for the same name accumulate; nothing is ever deleted.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    paid: BTreeMap<SmolStr, Money>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `amount` paid by `name`, creating the participant on first
    /// sight. Rejects blank names and negative amounts without mutating.
    pub fn register_contribution(&mut self, name: &str, amount: Money) -> Result<(), LedgerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::BlankName);
        }
        if amount.is_negative() {
            return Err(LedgerError::InvalidAmount(amount));
        }
        *self.paid.entry(SmolStr::new(name)).or_insert(Money::ZERO) += amount;
        Ok(())
    }

    pub fn participant_count(&self) -> usize {
        self.paid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paid.is_empty()
    }

    pub fn participants(&self) -> impl Iterator<Item = &str> {
        self.paid.keys().map(SmolStr::as_str)
    }

    /// Sum of all registered contributions, recomputed from source values.
    pub fn total_spend(&self) -> Money {
        self.paid.values().sum()
    }

    pub fn paid_by(&self, name: &str) -> Result<Money, LedgerError> {
        self.paid
            .get(name)
            .copied()
            .ok_or_else(|| LedgerError::UnknownParticipant(SmolStr::new(name)))
    }

    /// Derives every participant's standing from an equal split of the total.
    ///
    /// Recomputes from the registered `paid` values each call, so repeated
    /// calls without intervening contributions yield identical standings.
    pub fn compute_balances(&self) -> Result<BalanceSheet, LedgerError> {
        if self.paid.is_empty() {
            return Err(LedgerError::NoParticipants);
        }

        let fair_share = Money::new(
            self.total_spend().amount() / Decimal::from(self.paid.len() as u64),
        );

        Ok(self
            .paid
            .iter()
            .map(|(name, &paid)| {
                (
                    name.clone(),
                    ParticipantStanding {
                        paid,
                        fair_share,
                        balance: paid - fair_share,
                    },
                )
            })
            .collect())
    }
}
