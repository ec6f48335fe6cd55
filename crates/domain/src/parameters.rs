//! Scenario levers and parameters.
//!
//! A scenario is described by five independent multipliers. A multiplier of
//! exactly `1.0` is the neutral pivot: it means "no change from baseline" for
//! that lever.

use crate::error::ScenarioError;
use crate::numeric::finite_decimal;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

fn neutral() -> Decimal {
    Decimal::ONE
}

/// The five lever values of a what-if scenario.
///
/// Fields missing from a serialized payload default to neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioParameters {
    /// Multiplier applied to the projected revenue series.
    #[serde(default = "neutral")]
    pub sales_growth_multiplier: Decimal,
    /// Multiplier applied to the per-period expense total.
    #[serde(default = "neutral")]
    pub expense_growth_multiplier: Decimal,
    /// Weight given to fraud findings in the risk index.
    #[serde(default = "neutral")]
    pub fraud_sensitivity: Decimal,
    /// Supplier lead time relative to today.
    #[serde(default = "neutral")]
    pub supplier_delay_factor: Decimal,
    /// Reorder threshold relative to today.
    #[serde(default = "neutral")]
    pub reorder_threshold_multiplier: Decimal,
}

impl Default for ScenarioParameters {
    fn default() -> Self {
        Self::neutral()
    }
}

impl ScenarioParameters {
    /// Parameters with every lever at its neutral value.
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            sales_growth_multiplier: Decimal::ONE,
            expense_growth_multiplier: Decimal::ONE,
            fraud_sensitivity: Decimal::ONE,
            supplier_delay_factor: Decimal::ONE,
            reorder_threshold_multiplier: Decimal::ONE,
        }
    }

    /// Creates parameters from floating point lever values, in the order
    /// sales, expense, fraud, supplier delay, reorder threshold.
    ///
    /// # Errors
    /// Returns [`ScenarioError::NonFinite`] if any value is NaN or infinite.
    pub fn from_f64(
        sales_growth_multiplier: f64,
        expense_growth_multiplier: f64,
        fraud_sensitivity: f64,
        supplier_delay_factor: f64,
        reorder_threshold_multiplier: f64,
    ) -> Result<Self, ScenarioError> {
        Ok(Self {
            sales_growth_multiplier: finite_decimal(
                sales_growth_multiplier,
                Lever::SalesGrowth.as_str(),
            )?,
            expense_growth_multiplier: finite_decimal(
                expense_growth_multiplier,
                Lever::ExpenseGrowth.as_str(),
            )?,
            fraud_sensitivity: finite_decimal(
                fraud_sensitivity,
                Lever::FraudSensitivity.as_str(),
            )?,
            supplier_delay_factor: finite_decimal(
                supplier_delay_factor,
                Lever::SupplierDelay.as_str(),
            )?,
            reorder_threshold_multiplier: finite_decimal(
                reorder_threshold_multiplier,
                Lever::ReorderThreshold.as_str(),
            )?,
        })
    }

    /// Sets the sales growth multiplier.
    #[must_use]
    pub fn with_sales_growth(mut self, value: Decimal) -> Self {
        self.sales_growth_multiplier = value;
        self
    }

    /// Sets the expense growth multiplier.
    #[must_use]
    pub fn with_expense_growth(mut self, value: Decimal) -> Self {
        self.expense_growth_multiplier = value;
        self
    }

    /// Sets the fraud sensitivity.
    #[must_use]
    pub fn with_fraud_sensitivity(mut self, value: Decimal) -> Self {
        self.fraud_sensitivity = value;
        self
    }

    /// Sets the supplier delay factor.
    #[must_use]
    pub fn with_supplier_delay(mut self, value: Decimal) -> Self {
        self.supplier_delay_factor = value;
        self
    }

    /// Sets the reorder threshold multiplier.
    #[must_use]
    pub fn with_reorder_threshold(mut self, value: Decimal) -> Self {
        self.reorder_threshold_multiplier = value;
        self
    }

    /// Returns the value of a single lever.
    #[must_use]
    pub fn get(&self, lever: Lever) -> Decimal {
        match lever {
            Lever::SalesGrowth => self.sales_growth_multiplier,
            Lever::ExpenseGrowth => self.expense_growth_multiplier,
            Lever::FraudSensitivity => self.fraud_sensitivity,
            Lever::SupplierDelay => self.supplier_delay_factor,
            Lever::ReorderThreshold => self.reorder_threshold_multiplier,
        }
    }

    /// Returns a copy with a single lever replaced.
    #[must_use]
    pub fn with(self, lever: Lever, value: Decimal) -> Self {
        match lever {
            Lever::SalesGrowth => self.with_sales_growth(value),
            Lever::ExpenseGrowth => self.with_expense_growth(value),
            Lever::FraudSensitivity => self.with_fraud_sensitivity(value),
            Lever::SupplierDelay => self.with_supplier_delay(value),
            Lever::ReorderThreshold => self.with_reorder_threshold(value),
        }
    }

    /// Levers whose value differs from neutral, in declaration order.
    ///
    /// Uses exact equality against `1.0`.
    #[must_use]
    pub fn active_levers(&self) -> Vec<Lever> {
        Lever::ALL
            .into_iter()
            .filter(|lever| self.get(*lever) != Decimal::ONE)
            .collect()
    }

    /// Whether every lever sits exactly at neutral.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        Lever::ALL
            .into_iter()
            .all(|lever| self.get(lever) == Decimal::ONE)
    }
}

/// One of the five scenario levers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lever {
    /// Sales growth multiplier.
    SalesGrowth,
    /// Expense growth multiplier.
    ExpenseGrowth,
    /// Fraud sensitivity.
    FraudSensitivity,
    /// Supplier delay factor.
    SupplierDelay,
    /// Reorder threshold multiplier.
    ReorderThreshold,
}

impl Lever {
    /// Every lever, in reporting order.
    pub const ALL: [Lever; 5] = [
        Lever::SalesGrowth,
        Lever::ExpenseGrowth,
        Lever::FraudSensitivity,
        Lever::SupplierDelay,
        Lever::ReorderThreshold,
    ];

    /// Field name of the lever in [`ScenarioParameters`].
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SalesGrowth => "sales_growth_multiplier",
            Self::ExpenseGrowth => "expense_growth_multiplier",
            Self::FraudSensitivity => "fraud_sensitivity",
            Self::SupplierDelay => "supplier_delay_factor",
            Self::ReorderThreshold => "reorder_threshold_multiplier",
        }
    }

    /// Parses a lever from its field name or short name.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "sales_growth_multiplier" | "sales_growth" | "sales" => Some(Self::SalesGrowth),
            "expense_growth_multiplier" | "expense_growth" | "expense" => {
                Some(Self::ExpenseGrowth)
            }
            "fraud_sensitivity" | "fraud" => Some(Self::FraudSensitivity),
            "supplier_delay_factor" | "supplier_delay" | "supplier" => Some(Self::SupplierDelay),
            "reorder_threshold_multiplier" | "reorder_threshold" | "reorder" => {
                Some(Self::ReorderThreshold)
            }
            _ => None,
        }
    }

    /// Parses a lever name, reporting unknown names as an error.
    ///
    /// # Errors
    /// Returns [`ScenarioError::UnknownLever`] if the name is not recognised.
    pub fn parse(s: &str) -> Result<Self, ScenarioError> {
        Self::from_str(s).ok_or_else(|| ScenarioError::UnknownLever(s.to_string()))
    }

    /// Recommended UI range for the lever. Not enforced by the engine.
    #[must_use]
    pub fn typical_range(&self) -> LeverRange {
        match self {
            Self::SalesGrowth | Self::ExpenseGrowth => LeverRange::new(decimal(8, 1), decimal(13, 1)),
            Self::FraudSensitivity => LeverRange::new(decimal(5, 1), decimal(15, 1)),
            Self::SupplierDelay => LeverRange::new(decimal(8, 1), decimal(15, 1)),
            Self::ReorderThreshold => LeverRange::new(decimal(5, 1), decimal(15, 1)),
        }
    }
}

impl fmt::Display for Lever {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn decimal(num: i64, scale: u32) -> Decimal {
    Decimal::new(num, scale)
}

/// Inclusive range for a lever value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeverRange {
    /// Lower bound (inclusive).
    pub min: Decimal,
    /// Upper bound (inclusive).
    pub max: Decimal,
}

impl LeverRange {
    /// Creates a new range.
    #[must_use]
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    /// Checks if a value lies within the range.
    #[must_use]
    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Caller-side bounds on lever values.
///
/// The engine accepts any finite lever value; bounds are applied by the
/// transport layer before a simulation is run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeverBounds {
    /// Bounds for the sales growth multiplier.
    pub sales_growth: LeverRange,
    /// Bounds for the expense growth multiplier.
    pub expense_growth: LeverRange,
    /// Bounds for the fraud sensitivity.
    pub fraud_sensitivity: LeverRange,
    /// Bounds for the supplier delay factor.
    pub supplier_delay: LeverRange,
    /// Bounds for the reorder threshold multiplier.
    pub reorder_threshold: LeverRange,
}

impl Default for LeverBounds {
    fn default() -> Self {
        Self {
            sales_growth: LeverRange::new(decimal(5, 1), decimal(2, 0)),
            expense_growth: LeverRange::new(decimal(5, 1), decimal(2, 0)),
            fraud_sensitivity: LeverRange::new(decimal(1, 1), decimal(3, 0)),
            supplier_delay: LeverRange::new(decimal(5, 1), decimal(3, 0)),
            reorder_threshold: LeverRange::new(decimal(5, 1), decimal(3, 0)),
        }
    }
}

impl LeverBounds {
    /// Bounds matching the recommended UI ranges of each lever.
    #[must_use]
    pub fn typical() -> Self {
        Self {
            sales_growth: Lever::SalesGrowth.typical_range(),
            expense_growth: Lever::ExpenseGrowth.typical_range(),
            fraud_sensitivity: Lever::FraudSensitivity.typical_range(),
            supplier_delay: Lever::SupplierDelay.typical_range(),
            reorder_threshold: Lever::ReorderThreshold.typical_range(),
        }
    }

    /// Returns the range for a lever.
    #[must_use]
    pub fn range(&self, lever: Lever) -> LeverRange {
        match lever {
            Lever::SalesGrowth => self.sales_growth,
            Lever::ExpenseGrowth => self.expense_growth,
            Lever::FraudSensitivity => self.fraud_sensitivity,
            Lever::SupplierDelay => self.supplier_delay,
            Lever::ReorderThreshold => self.reorder_threshold,
        }
    }

    /// Checks every lever against its range.
    ///
    /// # Errors
    /// Returns [`ScenarioError::OutOfBounds`] for the first lever outside its
    /// range.
    pub fn validate(&self, params: &ScenarioParameters) -> Result<(), ScenarioError> {
        for lever in Lever::ALL {
            let range = self.range(lever);
            let value = params.get(lever);
            if !range.contains(value) {
                return Err(ScenarioError::OutOfBounds {
                    lever: lever.as_str(),
                    value,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }
}
