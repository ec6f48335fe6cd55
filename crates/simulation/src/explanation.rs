//! Explanation of the causal drivers behind a forecast.
//!
//! One templated sentence per active lever group, in a fixed order: sales,
//! expenses, fraud sensitivity, supply chain. Levers are compared with `1.0`
//! by exact equality.

use rust_decimal::Decimal;
use scenario_domain::ScenarioParameters;
use scenario_domain::numeric::round_whole;

/// Summary used when no lever differs from neutral.
pub const BASELINE_SUMMARY: &str = "Simulation uses current health, fraud and expense signals \
to project revenue, cash and risk over the next four periods without changing underlying data.";

const SUPPLY_CHAIN_SENTENCE: &str = "Supply-chain levers (supplier delays and reorder thresholds) \
change inventory risk and slightly impact overall health.";

/// Builds the explanation for a set of levers.
///
/// Never returns an empty string.
#[must_use]
pub fn compose_explanation(params: &ScenarioParameters) -> String {
    let mut parts: Vec<String> = Vec::new();

    let sales = params.sales_growth_multiplier;
    if sales != Decimal::ONE {
        let change = sales.saturating_sub(Decimal::ONE);
        if change >= Decimal::ZERO {
            parts.push(format!(
                "Sales growth increased by {}%, lifting revenue forecasts across the horizon.",
                percent(change)
            ));
        } else {
            parts.push(format!(
                "Sales growth reduced by {}%, compressing revenue forecasts.",
                percent(-change)
            ));
        }
    }

    let expense = params.expense_growth_multiplier;
    if expense != Decimal::ONE {
        let change = expense.saturating_sub(Decimal::ONE);
        if change >= Decimal::ZERO {
            parts.push(format!(
                "Operating expenses are projected to increase by {}%, adding expense pressure \
                 that reduces projected cash and health.",
                percent(change)
            ));
        } else {
            parts.push(format!(
                "Operating expenses are tightened by {}%, relieving expense pressure and \
                 supporting stronger cash generation.",
                percent(-change)
            ));
        }
    }

    if params.fraud_sensitivity != Decimal::ONE {
        parts.push(format!(
            "Fraud sensitivity set to {} adjusts how strongly fraud findings influence the \
             unified risk index.",
            two_decimals(params.fraud_sensitivity)
        ));
    }

    if params.supplier_delay_factor != Decimal::ONE
        || params.reorder_threshold_multiplier != Decimal::ONE
    {
        parts.push(SUPPLY_CHAIN_SENTENCE.to_string());
    }

    if parts.is_empty() {
        BASELINE_SUMMARY.to_string()
    } else {
        parts.join(" ")
    }
}

fn percent(fraction: Decimal) -> Decimal {
    round_whole(fraction.saturating_mul(Decimal::ONE_HUNDRED))
}

fn two_decimals(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp(2);
    rounded.rescale(2);
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_neutral_uses_baseline_summary() {
        assert_eq!(
            compose_explanation(&ScenarioParameters::neutral()),
            BASELINE_SUMMARY
        );
    }

    #[test]
    fn test_sales_increase_sentence() {
        let params = ScenarioParameters::neutral().with_sales_growth(dec!(1.2));
        assert_eq!(
            compose_explanation(&params),
            "Sales growth increased by 20%, lifting revenue forecasts across the horizon."
        );
    }

    #[test]
    fn test_sales_decrease_reports_magnitude() {
        let params = ScenarioParameters::neutral().with_sales_growth(dec!(0.85));
        assert_eq!(
            compose_explanation(&params),
            "Sales growth reduced by 15%, compressing revenue forecasts."
        );
    }

    #[test]
    fn test_expense_sentences() {
        let up = ScenarioParameters::neutral().with_expense_growth(dec!(1.3));
        let text = compose_explanation(&up);
        assert!(text.starts_with("Operating expenses are projected to increase by 30%"));
        assert!(text.contains("expense pressure"));

        let down = ScenarioParameters::neutral().with_expense_growth(dec!(0.9));
        let text = compose_explanation(&down);
        assert!(text.starts_with("Operating expenses are tightened by 10%"));
        assert!(text.contains("stronger cash generation"));
    }

    #[test]
    fn test_fraud_sensitivity_two_decimals() {
        let params = ScenarioParameters::neutral().with_fraud_sensitivity(dec!(0.5));
        assert_eq!(
            compose_explanation(&params),
            "Fraud sensitivity set to 0.50 adjusts how strongly fraud findings influence the \
             unified risk index."
        );
    }

    #[test]
    fn test_supply_chain_sentence_appears_once() {
        let both = ScenarioParameters::neutral()
            .with_supplier_delay(dec!(1.2))
            .with_reorder_threshold(dec!(0.7));
        assert_eq!(compose_explanation(&both), SUPPLY_CHAIN_SENTENCE);

        let reorder_only = ScenarioParameters::neutral().with_reorder_threshold(dec!(1.1));
        assert_eq!(compose_explanation(&reorder_only), SUPPLY_CHAIN_SENTENCE);
    }

    #[test]
    fn test_sentence_order_and_spacing() {
        let params = ScenarioParameters::neutral()
            .with_supplier_delay(dec!(1.1))
            .with_fraud_sensitivity(dec!(1.25))
            .with_expense_growth(dec!(1.1))
            .with_sales_growth(dec!(1.05));
        let text = compose_explanation(&params);

        let sales = text.find("Sales growth").unwrap();
        let expense = text.find("Operating expenses").unwrap();
        let fraud = text.find("Fraud sensitivity set to 1.25").unwrap();
        let supply = text.find("Supply-chain levers").unwrap();
        assert!(sales < expense && expense < fraud && fraud < supply);
        assert!(!text.contains("  "));
        assert!(text.contains("increased by 5%"));
    }
}
