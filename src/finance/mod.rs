//! Loan, rental return and construction cost calculators.
//!
//! Everything here is synchronous and free of I/O. Invalid input is reported
//! as [`CalculatorError::InvalidParameter`](crate::error::CalculatorError)
//! instead of producing `NaN` or infinite values.

use serde::{Deserialize, Serialize};

pub mod construction;
pub mod emi;
pub mod roi;

pub use construction::{
    estimate_construction, ConstructionEstimate, ConstructionParameters, LocationTier,
};
pub use emi::{
    amortization_schedule, calculate_emi, check_affordability, max_principal_for_payment, summarize,
    AmortizationRow, LoanParameters, LoanSummary, LoanTerm,
};
pub use roi::{calculate_roi, payback_period, MarketCondition, RoiBreakdown, RoiParameters};

/// Build quality grade, shared by the rental and construction calculators
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Basic,
    Standard,
    Premium,
    Luxury,
}

impl Quality {
    pub fn multiplier(self) -> f64 {
        match self {
            Quality::Basic => 0.8,
            Quality::Standard => 1.0,
            Quality::Premium => 1.3,
            Quality::Luxury => 1.6,
        }
    }
}
