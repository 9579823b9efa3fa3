use crate::model::{BalanceSheet, Money, Transfer};
use smol_str::SmolStr;

/// Greedy largest-first transfer matcher.
///
/// Matches the biggest remaining debtor against the biggest remaining
/// creditor until one queue runs dry. Approximates, but does not
/// guarantee, the minimum possible number of transfers.
pub struct SettlementCalculator;

impl SettlementCalculator {
    /// Produces transfers that zero out every standing in `sheet`.
    ///
    /// Standings already settled within tolerance are skipped. Matching
    /// runs at full precision; each emitted amount is rounded to display
    /// scale. A sub-tolerance residual left on one queue after the other
    /// empties is abandoned without a transfer.
    pub fn suggest_transfers(&self, sheet: &BalanceSheet) -> Vec<Transfer> {
        let mut debtors: Vec<(SmolStr, Money)> = Vec::new();
        let mut creditors: Vec<(SmolStr, Money)> = Vec::new();

        for (name, standing) in sheet {
            if standing.is_settled() {
                continue;
            }
            if standing.balance.is_negative() {
                debtors.push((name.clone(), -standing.balance));
            } else {
                creditors.push((name.clone(), standing.balance));
            }
        }

        sort_largest_first(&mut debtors);
        sort_largest_first(&mut creditors);

        let mut transfers = Vec::with_capacity(debtors.len().max(creditors.len()));
        let mut debtor_idx = 0;
        let mut creditor_idx = 0;

        while debtor_idx < debtors.len() && creditor_idx < creditors.len() {
            let debtor = &debtors[debtor_idx];
            let creditor = &creditors[creditor_idx];
            let amount = debtor.1.min(creditor.1);

            transfers.push(Transfer {
                from: debtor.0.clone(),
                to: creditor.0.clone(),
                amount: amount.rounded(),
            });

            debtors[debtor_idx].1 -= amount;
            creditors[creditor_idx].1 -= amount;

            if debtors[debtor_idx].1.is_settled() {
                debtor_idx += 1;
            }
            if creditors[creditor_idx].1.is_settled() {
                creditor_idx += 1;
            }
        }

        transfers
    }
}

// Ties break on name so output is deterministic for a given sheet.
fn sort_largest_first(queue: &mut [(SmolStr, Money)]) {
    queue.sort_unstable_by(|lhs, rhs| rhs.1.cmp(&lhs.1).then_with(|| lhs.0.cmp(&rhs.0)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ledger::Ledger, model::ParticipantStanding};
    use rstest::{fixture, rstest};
    use rust_decimal_macros::dec;

    #[fixture]
    fn calculator() -> SettlementCalculator {
        SettlementCalculator
    }

    fn sheet_from_paid(entries: &[(&str, Money)]) -> BalanceSheet {
        let mut ledger = Ledger::new();
        for (name, amount) in entries {
            ledger.register_contribution(name, *amount).unwrap();
        }
        ledger.compute_balances().unwrap()
    }

    fn standing(balance: Money) -> ParticipantStanding {
        ParticipantStanding {
            paid: Money::ZERO,
            fair_share: Money::ZERO,
            balance,
        }
    }

    #[rstest]
    fn single_payer_collects_from_everyone_else(calculator: SettlementCalculator) {
        let sheet = sheet_from_paid(&[
            ("ana", Money::from_i64(30)),
            ("bruno", Money::ZERO),
            ("carla", Money::ZERO),
        ]);

        let transfers = calculator.suggest_transfers(&sheet);

        assert_eq!(transfers.len(), 2);
        for transfer in &transfers {
            assert_eq!(transfer.to, "ana");
            assert_eq!(transfer.amount, Money::new(dec!(10.0)));
        }
        let froms: Vec<&str> = transfers.iter().map(|t| t.from.as_str()).collect();
        assert_eq!(froms, ["bruno", "carla"]);
    }

    #[rstest]
    fn equal_payers_produce_no_transfers(calculator: SettlementCalculator) {
        let sheet = sheet_from_paid(&[
            ("ana", Money::from_i64(100)),
            ("bruno", Money::from_i64(100)),
            ("carla", Money::from_i64(100)),
        ]);

        assert!(calculator.suggest_transfers(&sheet).is_empty());
    }

    #[rstest]
    fn empty_sheet_produces_no_transfers(calculator: SettlementCalculator) {
        assert!(calculator.suggest_transfers(&BalanceSheet::new()).is_empty());
    }

    #[rstest]
    fn largest_debtor_pays_largest_creditor_first(calculator: SettlementCalculator) {
        let mut sheet = BalanceSheet::new();
        sheet.insert("ana".into(), standing(Money::from_i64(50)));
        sheet.insert("bruno".into(), standing(Money::from_i64(10)));
        sheet.insert("carla".into(), standing(Money::from_i64(-40)));
        sheet.insert("diego".into(), standing(Money::from_i64(-20)));

        let transfers = calculator.suggest_transfers(&sheet);

        assert_eq!(
            transfers,
            vec![
                Transfer {
                    from: "carla".into(),
                    to: "ana".into(),
                    amount: Money::new(dec!(40.0)),
                },
                Transfer {
                    from: "diego".into(),
                    to: "ana".into(),
                    amount: Money::new(dec!(10.0)),
                },
                Transfer {
                    from: "diego".into(),
                    to: "bruno".into(),
                    amount: Money::new(dec!(10.0)),
                },
            ]
        );
    }

    #[rstest]
    fn uneven_split_rounds_at_emission_only(calculator: SettlementCalculator) {
        // 10 across three people: shares of 3.33…, one creditor at +6.66…
        let sheet = sheet_from_paid(&[
            ("ana", Money::from_i64(10)),
            ("bruno", Money::ZERO),
            ("carla", Money::ZERO),
        ]);

        let transfers = calculator.suggest_transfers(&sheet);

        assert_eq!(transfers.len(), 2);
        for transfer in &transfers {
            assert_eq!(transfer.to, "ana");
            assert_eq!(transfer.amount, Money::new(dec!(3.3)));
        }
    }

    #[rstest]
    fn amounts_are_positive_and_never_self_directed(calculator: SettlementCalculator) {
        let sheet = sheet_from_paid(&[
            ("ana", Money::new(dec!(12.7))),
            ("bruno", Money::new(dec!(3.3))),
            ("carla", Money::ZERO),
            ("diego", Money::new(dec!(40.05))),
        ]);

        for transfer in calculator.suggest_transfers(&sheet) {
            assert!(transfer.amount > Money::ZERO);
            assert_ne!(transfer.from, transfer.to);
        }
    }

    #[rstest]
    fn transfers_cover_each_debtors_full_debt(calculator: SettlementCalculator) {
        let sheet = sheet_from_paid(&[
            ("ana", Money::from_i64(90)),
            ("bruno", Money::from_i64(30)),
            ("carla", Money::ZERO),
            ("diego", Money::ZERO),
        ]);
        let transfers = calculator.suggest_transfers(&sheet);

        for (name, standing) in &sheet {
            let outgoing: Money = transfers
                .iter()
                .filter(|t| t.from == *name)
                .map(|t| t.amount)
                .sum();
            let incoming: Money = transfers
                .iter()
                .filter(|t| t.to == *name)
                .map(|t| t.amount)
                .sum();
            assert!((standing.balance + outgoing - incoming).is_settled());
        }
    }
}
