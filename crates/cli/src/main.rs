//! Command Line Interface for the scenario engine.
mod output;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use dotenv::dotenv;
use rust_decimal::Decimal;
use scenario_api::{ApiServer, AppState, ServerConfig};
use scenario_domain::{BaselineState, Lever, ScenarioParameters, StaticBaselineProvider};
use scenario_simulation::{LeverSweep, ScenarioEngine};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scenario")]
#[command(about = "What-if scenario engine for business health, cash and risk", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single scenario
    Simulate {
        #[command(flatten)]
        baseline: BaselineArgs,

        #[command(flatten)]
        levers: LeverArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Include risk and health breakdowns
        #[arg(long)]
        detailed: bool,
    },
    /// Sweep one lever across a range of values
    Sweep {
        #[command(flatten)]
        baseline: BaselineArgs,

        #[command(flatten)]
        levers: LeverArgs,

        /// Lever to vary (sales, expense, fraud, supplier, reorder)
        #[arg(short, long)]
        lever: String,

        /// First value (defaults to the lever's typical minimum)
        #[arg(long)]
        start: Option<Decimal>,

        /// Last value (defaults to the lever's typical maximum)
        #[arg(long)]
        end: Option<Decimal>,

        /// Number of grid points
        #[arg(long, default_value_t = 11)]
        steps: usize,

        /// Print the sweep as JSON
        #[arg(long)]
        json: bool,
    },
    /// Serve the HTTP API
    Serve {
        #[command(flatten)]
        baseline: BaselineArgs,

        /// Host to bind (overrides SCENARIO_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides SCENARIO_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

/// Baseline inputs. Either a JSON file, the synthetic baseline, or all four
/// fields.
#[derive(Args, Debug, Clone, Default)]
struct BaselineArgs {
    /// JSON file holding a baseline state
    #[arg(long, conflicts_with = "synthetic")]
    baseline_file: Option<PathBuf>,

    /// Use the synthetic no-data baseline
    #[arg(long)]
    synthetic: bool,

    /// Current health score
    #[arg(long, env = "BASE_HEALTH_SCORE")]
    base_health: Option<Decimal>,

    /// Expense total for one period
    #[arg(long, env = "BASE_EXPENSE_TOTAL")]
    base_expense: Option<Decimal>,

    /// Fraud rate as a percentage
    #[arg(long, env = "FRAUD_RATE_PERCENT")]
    fraud_rate: Option<Decimal>,

    /// Cash on hand
    #[arg(long, env = "STARTING_CASH", allow_hyphen_values = true)]
    starting_cash: Option<Decimal>,
}

impl BaselineArgs {
    fn resolve(&self) -> Result<BaselineState> {
        if let Some(path) = &self.baseline_file {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading baseline file {}", path.display()))?;
            return serde_json::from_str(&raw)
                .with_context(|| format!("parsing baseline file {}", path.display()));
        }

        if self.synthetic {
            return Ok(BaselineState::synthetic());
        }

        match (
            self.base_health,
            self.base_expense,
            self.fraud_rate,
            self.starting_cash,
        ) {
            (Some(health), Some(expense), Some(fraud), Some(cash)) => {
                Ok(BaselineState::new(health, expense, fraud, cash))
            }
            _ => {
                let missing: Vec<&str> = [
                    ("--base-health", self.base_health.is_none()),
                    ("--base-expense", self.base_expense.is_none()),
                    ("--fraud-rate", self.fraud_rate.is_none()),
                    ("--starting-cash", self.starting_cash.is_none()),
                ]
                .into_iter()
                .filter_map(|(flag, absent)| absent.then_some(flag))
                .collect();
                bail!(
                    "incomplete baseline, missing {} (or pass --baseline-file / --synthetic)",
                    missing.join(", ")
                )
            }
        }
    }
}

/// Lever values. Unset levers stay neutral.
#[derive(Args, Debug, Clone)]
struct LeverArgs {
    /// Sales growth multiplier
    #[arg(long, default_value = "1.0")]
    sales_growth: Decimal,

    /// Expense growth multiplier
    #[arg(long, default_value = "1.0")]
    expense_growth: Decimal,

    /// Fraud sensitivity
    #[arg(long, default_value = "1.0")]
    fraud_sensitivity: Decimal,

    /// Supplier delay factor
    #[arg(long, default_value = "1.0")]
    supplier_delay: Decimal,

    /// Reorder threshold multiplier
    #[arg(long, default_value = "1.0")]
    reorder_threshold: Decimal,
}

impl From<&LeverArgs> for ScenarioParameters {
    fn from(args: &LeverArgs) -> Self {
        ScenarioParameters::neutral()
            .with_sales_growth(args.sales_growth)
            .with_expense_growth(args.expense_growth)
            .with_fraud_sensitivity(args.fraud_sensitivity)
            .with_supplier_delay(args.supplier_delay)
            .with_reorder_threshold(args.reorder_threshold)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let engine = ScenarioEngine::default();

    match &cli.command {
        Commands::Simulate {
            baseline,
            levers,
            json,
            detailed,
        } => {
            let baseline = baseline.resolve()?;
            let params = ScenarioParameters::from(levers);
            let report = engine.simulate_detailed(&baseline, &params);

            match (*json, *detailed) {
                (true, true) => println!("{}", serde_json::to_string_pretty(&report)?),
                (true, false) => println!("{}", serde_json::to_string_pretty(&report.result)?),
                (false, detailed) => output::print_report(&report, detailed),
            }
        }
        Commands::Sweep {
            baseline,
            levers,
            lever,
            start,
            end,
            steps,
            json,
        } => {
            let baseline = baseline.resolve()?;
            let params = ScenarioParameters::from(levers);
            let lever = Lever::parse(lever)?;
            let range = lever.typical_range();
            let sweep = LeverSweep::new(
                lever,
                start.unwrap_or(range.min),
                end.unwrap_or(range.max),
                *steps,
            );

            let points = sweep.run(&engine, &baseline, &params)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&points)?);
            } else {
                output::print_sweep(lever, &points);
            }
        }
        Commands::Serve {
            baseline,
            host,
            port,
        } => {
            let baseline = baseline.resolve()?;
            let mut config = ServerConfig::from_env();
            if let Some(host) = host {
                config = config.with_host(host.clone());
            }
            if let Some(port) = port {
                config = config.with_port(*port);
            }
            info!(address = %config.address(), "Starting scenario API");
            let state = AppState::new(engine, Arc::new(StaticBaselineProvider::new(baseline)));
            ApiServer::new(config, state).run().await?;
        }
    }

    Ok(())
}
