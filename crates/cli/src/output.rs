//! Table rendering for CLI output.

use prettytable::{Table, row};
use scenario_domain::Lever;
use scenario_simulation::{SimulationReport, SweepPoint};

/// Prints a simulation report.
pub fn print_report(report: &SimulationReport, detailed: bool) {
    let result = &report.result;
    let baseline = &result.metadata;

    println!("\n📊 Scenario Results");
    println!("════════════════════════════════════");

    let mut summary = Table::new();
    summary.add_row(row!["Metric", "Baseline", "Scenario"]);
    summary.add_row(row![
        "Health score",
        baseline.base_health_score,
        format!("{} ({:+})", result.new_health_score, result.delta_from_base)
    ]);
    summary.add_row(row!["Risk index", "", result.risk_index]);
    summary.add_row(row![
        "Projected cash",
        baseline.starting_cash,
        result.projected_cash
    ]);
    summary.printstd();

    let mut revenue = Table::new();
    revenue.add_row(row!["Period", "Revenue"]);
    for point in &result.revenue_forecast {
        revenue.add_row(row![point.period, point.value]);
    }
    revenue.printstd();

    if detailed {
        let risk = &report.risk;
        let health = &report.health;

        let mut breakdown = Table::new();
        breakdown.add_row(row!["Component", "Value"]);
        breakdown.add_row(row!["Fraud risk", risk.fraud_component]);
        breakdown.add_row(row!["Inventory risk", risk.inventory_component]);
        breakdown.add_row(row!["Expense risk", risk.expense_component]);
        breakdown.add_row(row!["Raw risk", risk.raw_risk]);
        breakdown.add_row(row![
            "Revenue vs expense",
            health.revenue_vs_expense_delta.round_dp(2)
        ]);
        breakdown.add_row(row!["Risk delta", health.risk_delta.round_dp(2)]);
        breakdown.add_row(row!["Supplier delta", health.supplier_delta.round_dp(2)]);
        breakdown.printstd();
    }

    println!("\n{}", result.explanation_summary);
    println!("════════════════════════════════════");
}

/// Prints the points of a lever sweep.
pub fn print_sweep(lever: Lever, points: &[SweepPoint]) {
    println!("\n📈 Sweep of {lever}");

    let mut table = Table::new();
    table.add_row(row![lever.as_str(), "Health", "Δ", "Risk", "Cash"]);
    for point in points {
        let result = &point.result;
        table.add_row(row![
            point.value,
            result.new_health_score,
            result.delta_from_base,
            result.risk_index,
            result.projected_cash
        ]);
    }
    table.printstd();
}
