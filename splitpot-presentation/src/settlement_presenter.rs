use splitpot_application::SettlementResult;
use splitpot_i18n as i18n;

pub struct SettlementPresenter;

/// Text view of a settlement, one printable line per entry.
pub struct SettlementView {
    pub totals_line: String,
    pub standing_lines: Vec<String>,
    pub transfer_lines: Vec<String>,
}

impl SettlementView {
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.totals_line.as_str())
            .chain(self.standing_lines.iter().map(String::as_str))
            .chain(self.transfer_lines.iter().map(String::as_str))
    }
}

impl SettlementPresenter {
    pub fn render(result: &SettlementResult) -> SettlementView {
        SettlementView {
            totals_line: Self::build_totals_line(result),
            standing_lines: Self::build_standing_lines(result),
            transfer_lines: Self::build_transfer_lines(result),
        }
    }

    pub fn build_totals_line(result: &SettlementResult) -> String {
        format!(
            "{}: ${} - {}: ${}",
            i18n::TOTAL_SPENT,
            result.total_spend,
            i18n::PER_HEAD_SHARE,
            result.per_head_share,
        )
    }

    pub fn build_standing_lines(result: &SettlementResult) -> Vec<String> {
        result
            .standings
            .iter()
            .map(|(name, standing)| {
                format!(
                    "{name}: {} ${} - {} ${} - {} ${}",
                    i18n::PAID,
                    standing.paid,
                    i18n::MUST_PUT_IN,
                    standing.amount_to_put_in(),
                    i18n::GETS_BACK,
                    standing.amount_to_recover(),
                )
            })
            .collect()
    }

    pub fn build_transfer_lines(result: &SettlementResult) -> Vec<String> {
        if result.transfers.is_empty() {
            return vec![i18n::NOTHING_TO_SETTLE.to_string()];
        }
        result
            .transfers
            .iter()
            .map(|transfer| i18n::transfer_line(&transfer.from, transfer.amount, &transfer.to))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use splitpot_domain::{BalanceSheet, Money, ParticipantStanding, Transfer};

    fn standing(paid: i64, fair_share: i64) -> ParticipantStanding {
        ParticipantStanding {
            paid: Money::from_i64(paid),
            fair_share: Money::from_i64(fair_share),
            balance: Money::from_i64(paid - fair_share),
        }
    }

    fn sample_result() -> SettlementResult {
        let mut standings = BalanceSheet::new();
        standings.insert("ana".into(), standing(30, 10));
        standings.insert("bruno".into(), standing(0, 10));
        standings.insert("carla".into(), standing(0, 10));

        SettlementResult {
            total_spend: Money::from_i64(30),
            per_head_share: Money::from_i64(10),
            standings,
            transfers: vec![
                Transfer {
                    from: "bruno".into(),
                    to: "ana".into(),
                    amount: Money::from_i64(10),
                },
                Transfer {
                    from: "carla".into(),
                    to: "ana".into(),
                    amount: Money::from_i64(10),
                },
            ],
        }
    }

    #[test]
    fn totals_line_shows_total_and_share_at_display_scale() {
        let line = SettlementPresenter::build_totals_line(&sample_result());
        assert!(line.contains("$30.0"));
        assert!(line.contains("$10.0"));
    }

    #[test]
    fn standing_lines_project_the_signed_balance_both_ways() {
        let lines = SettlementPresenter::build_standing_lines(&sample_result());

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ana:"));
        assert!(lines[0].contains("$20.0"));
        assert!(lines[1].starts_with("bruno:"));
        assert!(lines[1].contains("$10.0"));
    }

    #[test]
    fn transfer_lines_name_payer_amount_and_payee() {
        let lines = SettlementPresenter::build_transfer_lines(&sample_result());

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("bruno"));
        assert!(lines[0].contains("$10.0"));
        assert!(lines[0].contains("ana"));
    }

    #[test]
    fn settled_pool_renders_an_explicit_line() {
        let mut result = sample_result();
        result.transfers.clear();

        let lines = SettlementPresenter::build_transfer_lines(&result);
        assert_eq!(lines, [splitpot_i18n::NOTHING_TO_SETTLE]);
    }

    #[test]
    fn view_lines_concatenate_in_render_order() {
        let view = SettlementPresenter::render(&sample_result());
        assert_eq!(view.lines().count(), 1 + 3 + 2);
    }
}
