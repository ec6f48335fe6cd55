use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use scenario_simulation::prelude::*;

fn reference_baseline() -> BaselineState {
    BaselineState::new(dec!(75), dec!(50000), dec!(10), dec!(100000))
}

fn revenue_values(result: &SimulationResult) -> Vec<Decimal> {
    result.revenue_forecast.iter().map(|p| p.value).collect()
}

fn lever_grid() -> Vec<Decimal> {
    vec![
        dec!(-1),
        dec!(0),
        dec!(0.5),
        dec!(0.8),
        dec!(1),
        dec!(1.3),
        dec!(1.5),
        dec!(3),
        dec!(10),
    ]
}

#[test]
fn test_reference_neutral_scenario() {
    let result = simulate(reference_baseline(), ScenarioParameters::neutral());

    assert_eq!(
        revenue_values(&result),
        vec![dec!(70000), dec!(72100), dec!(74200), dec!(76300)]
    );
    assert_eq!(result.risk_index, dec!(6.0));
    assert_eq!(result.new_health_score, dec!(75.0));
    assert_eq!(result.delta_from_base, Decimal::ZERO);
    assert_eq!(result.explanation_summary, BASELINE_SUMMARY);
}

#[test]
fn test_neutral_reproduces_any_baseline() {
    for health in [dec!(0), dec!(12.5), dec!(64.3), dec!(100)] {
        let baseline = BaselineState::new(health, dec!(8000), dec!(35), dec!(-4000));
        let result = simulate(baseline, ScenarioParameters::neutral());

        assert_eq!(result.new_health_score, health.round_dp(1));
        assert_eq!(result.delta_from_base, Decimal::ZERO);
    }
}

#[test]
fn test_sales_growth_scenario() {
    let neutral = simulate(reference_baseline(), ScenarioParameters::neutral());
    let boosted = simulate(
        reference_baseline(),
        ScenarioParameters::neutral().with_sales_growth(dec!(1.2)),
    );

    for (base, scaled) in revenue_values(&neutral)
        .into_iter()
        .zip(revenue_values(&boosted))
    {
        assert_eq!(scaled, base * dec!(1.2));
    }
    assert!(boosted.explanation_summary.contains("20%"));
    assert!(boosted.explanation_summary.contains("increased"));
}

#[test]
fn test_expense_growth_scenario() {
    let neutral = simulate(reference_baseline(), ScenarioParameters::neutral());
    let pressured = simulate(
        reference_baseline(),
        ScenarioParameters::neutral().with_expense_growth(dec!(1.3)),
    );

    assert_eq!(pressured.risk_index - neutral.risk_index, dec!(18));
    assert!(pressured.explanation_summary.contains("increase"));
    assert!(pressured.explanation_summary.contains("expense pressure"));
    assert!(pressured.projected_cash < neutral.projected_cash);
}

#[test]
fn test_scores_stay_bounded() {
    let baselines = [
        reference_baseline(),
        BaselineState::new(dec!(0), dec!(0), dec!(0), dec!(0)),
        BaselineState::new(dec!(100), dec!(1000000), dec!(100), dec!(-500000)),
    ];

    for baseline in baselines {
        for value in lever_grid() {
            for lever in Lever::ALL {
                let params = ScenarioParameters::neutral().with(lever, value);
                let result = simulate(baseline, params);

                assert!(result.risk_index >= Decimal::ZERO);
                assert!(result.risk_index <= dec!(100));
                assert!(result.new_health_score >= Decimal::ZERO);
                assert!(result.new_health_score <= dec!(100));
                assert!(!result.explanation_summary.is_empty());
            }
        }
    }
}

#[test]
fn test_sales_growth_monotonicity() {
    let others = ScenarioParameters::neutral()
        .with_expense_growth(dec!(1.1))
        .with_supplier_delay(dec!(1.2));
    let multipliers = [dec!(0.8), dec!(0.95), dec!(1), dec!(1.05), dec!(1.3)];

    let results: Vec<SimulationResult> = multipliers
        .iter()
        .map(|m| simulate(reference_baseline(), others.with_sales_growth(*m)))
        .collect();

    for pair in results.windows(2) {
        assert!(pair[1].projected_cash >= pair[0].projected_cash);
        for (prev, next) in revenue_values(&pair[0])
            .into_iter()
            .zip(revenue_values(&pair[1]))
        {
            assert!(next >= prev);
        }
    }
}

#[test]
fn test_identical_inputs_identical_outputs() {
    let params = ScenarioParameters::neutral()
        .with_sales_growth(dec!(1.07))
        .with_expense_growth(dec!(0.93))
        .with_fraud_sensitivity(dec!(1.4))
        .with_supplier_delay(dec!(1.25))
        .with_reorder_threshold(dec!(0.6));

    let first = simulate(reference_baseline(), params);
    let second = simulate(reference_baseline(), params);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_reported_precision() {
    let params = ScenarioParameters::neutral()
        .with_sales_growth(dec!(1.07))
        .with_fraud_sensitivity(dec!(1.33));
    let result = simulate(reference_baseline(), params);

    assert_eq!(result.new_health_score.scale(), 1);
    assert_eq!(result.delta_from_base.scale(), 1);
    assert_eq!(result.risk_index.scale(), 1);
    assert_eq!(result.projected_cash.fract(), Decimal::ZERO);
    assert!(
        result
            .revenue_forecast
            .iter()
            .all(|p| p.value.fract().is_zero())
    );
}

#[test]
fn test_negative_cash_is_reported() {
    let baseline = BaselineState::new(dec!(40), dec!(50000), dec!(5), dec!(0));
    let params = ScenarioParameters::neutral()
        .with_sales_growth(dec!(0.5))
        .with_expense_growth(dec!(1.5));
    let result = simulate(baseline, params);

    // 146300 - 300000
    assert_eq!(result.projected_cash, dec!(-153700));
}

#[test]
fn test_extreme_inputs_stay_bounded() {
    let baselines = [
        BaselineState::new(dec!(50), Decimal::MAX, Decimal::MAX, Decimal::MIN),
        BaselineState::new(Decimal::MIN, Decimal::MIN, Decimal::MIN, Decimal::MAX),
    ];

    for baseline in baselines {
        for value in [Decimal::MIN, Decimal::MAX] {
            for lever in Lever::ALL {
                let result = simulate(baseline, ScenarioParameters::neutral().with(lever, value));

                assert!(result.risk_index >= Decimal::ZERO);
                assert!(result.risk_index <= dec!(100));
                assert!(result.new_health_score >= Decimal::ZERO);
                assert!(result.new_health_score <= dec!(100));
                assert_eq!(result.revenue_forecast.len(), 4);
            }
        }
    }
}

#[test]
fn test_nudging_one_lever_leaves_the_neutral_pivot() {
    let neutral = simulate(reference_baseline(), ScenarioParameters::neutral());
    let nudged = simulate(
        reference_baseline(),
        ScenarioParameters::neutral().with_fraud_sensitivity(dec!(1.01)),
    );

    assert_eq!(neutral.new_health_score, dec!(75.0));
    assert_eq!(nudged.risk_index, dec!(6.1));
    // Off neutral the risk reference term applies: 75 + (40 - 6.06) / 4.5
    assert_eq!(nudged.new_health_score, dec!(82.5));
    assert_eq!(nudged.delta_from_base, dec!(7.5));
}
