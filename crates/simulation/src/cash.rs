//! Cash projection.

use crate::config::EngineConfig;
use crate::revenue::RevenueProjection;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

/// Unrounded cash position at the end of the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CashProjection {
    /// Per-period expense after the expense growth lever.
    pub period_expense: Decimal,
    /// Expenses over the whole horizon.
    pub expense_sum: Decimal,
    /// Revenue over the whole horizon.
    pub revenue_sum: Decimal,
    /// Starting cash plus revenue minus expenses.
    pub projected_cash: Decimal,
}

impl CashProjection {
    /// Whether the scenario ends the horizon below zero cash.
    #[must_use]
    pub fn is_loss(&self) -> bool {
        self.projected_cash.is_sign_negative() && !self.projected_cash.is_zero()
    }
}

/// Nets projected revenue against scaled, flat expenses.
///
/// Expenses are identical in every period. The result is not clamped: a
/// negative figure is a valid loss scenario. Sums saturate at the decimal
/// range.
#[must_use]
pub fn project_cash(
    starting_cash: Decimal,
    base_expense_total: Decimal,
    expense_growth_multiplier: Decimal,
    revenue: &RevenueProjection,
    config: &EngineConfig,
) -> CashProjection {
    let period_expense = base_expense_total.saturating_mul(expense_growth_multiplier);
    let expense_sum = period_expense.saturating_mul(config.horizon());
    let revenue_sum = revenue.total();
    let projected_cash = starting_cash
        .saturating_add(revenue_sum)
        .saturating_sub(expense_sum);

    debug!(%revenue_sum, %expense_sum, %projected_cash, "projected cash");

    CashProjection {
        period_expense,
        expense_sum,
        revenue_sum,
        projected_cash,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::revenue::project_revenue;
    use rust_decimal_macros::dec;

    #[test]
    fn test_neutral_cash() {
        let config = EngineConfig::default();
        let revenue = project_revenue(dec!(50000), Decimal::ONE, &config);
        let cash = project_cash(dec!(100000), dec!(50000), Decimal::ONE, &revenue, &config);

        assert_eq!(cash.expense_sum, dec!(200000));
        assert_eq!(cash.revenue_sum, dec!(292600));
        assert_eq!(cash.projected_cash, dec!(192600));
        assert!(!cash.is_loss());
    }

    #[test]
    fn test_expense_growth_reduces_cash() {
        let config = EngineConfig::default();
        let revenue = project_revenue(dec!(50000), Decimal::ONE, &config);
        let cash = project_cash(dec!(100000), dec!(50000), dec!(1.3), &revenue, &config);

        assert_eq!(cash.period_expense, dec!(65000));
        assert_eq!(cash.projected_cash, dec!(132600));
    }

    #[test]
    fn test_huge_expense_saturates() {
        let config = EngineConfig::default();
        let revenue = project_revenue(dec!(1000), Decimal::ONE, &config);
        let cash = project_cash(
            Decimal::MIN,
            dec!(70000000000000000000000000000),
            dec!(2),
            &revenue,
            &config,
        );

        assert_eq!(cash.period_expense, Decimal::MAX);
        assert_eq!(cash.expense_sum, Decimal::MAX);
        assert_eq!(cash.projected_cash, Decimal::MIN);
        assert!(cash.is_loss());
    }

    #[test]
    fn test_loss_scenario_is_not_clamped() {
        let config = EngineConfig::default();
        let revenue = project_revenue(dec!(50000), dec!(0.5), &config);
        let cash = project_cash(dec!(-20000), dec!(50000), dec!(1.5), &revenue, &config);

        // -20000 + 146300 - 300000
        assert_eq!(cash.projected_cash, dec!(-173700));
        assert!(cash.is_loss());
    }
}
