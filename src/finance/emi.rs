//! Equated monthly installment (amortizing loan) calculator.
//!
//! `payment = P * r * (1 + r)^n / ((1 + r)^n - 1)` with `r` the monthly rate
//! (annual percent / 1200) and `n` the number of monthly periods. A zero rate
//! falls back to straight-line repayment.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CalculatorError;

/// Fraction of disposable monthly income that may go to the installment.
pub const DEBT_TO_INCOME_CEILING: f64 = 0.5;

/// Number of schedule rows shown by default.
pub const DISPLAY_PERIODS: usize = 60;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LoanTerm {
    Years(u32),
    Months(u32),
}

impl LoanTerm {
    /// Number of monthly periods.
    pub fn months(self) -> Result<u32, CalculatorError> {
        let months = match self {
            LoanTerm::Years(years) => years
                .checked_mul(12)
                .ok_or_else(|| CalculatorError::invalid("term", "term overflows"))?,
            LoanTerm::Months(months) => months,
        };
        if months == 0 {
            return Err(CalculatorError::invalid("term", "term must be positive"));
        }
        Ok(months)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoanParameters {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub term: LoanTerm,
    pub monthly_income: Option<f64>,
    pub existing_obligations: Option<f64>,
}

impl LoanParameters {
    pub fn new(principal: f64, annual_rate_percent: f64, term: LoanTerm) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term,
            monthly_income: None,
            existing_obligations: None,
        }
    }

    pub fn with_income(mut self, monthly_income: f64, existing_obligations: f64) -> Self {
        self.monthly_income = Some(monthly_income);
        self.existing_obligations = Some(existing_obligations);
        self
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Affordability {
    pub max_affordable_payment: f64,
    pub affordable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoanSummary {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub months: u32,
    pub monthly_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
    pub affordability: Option<Affordability>,
}

impl LoanSummary {
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 1200.0
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AmortizationRow {
    /// 1-based period number
    pub period: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub balance: f64,
}

fn validate(principal: f64, annual_rate_percent: f64) -> Result<(), CalculatorError> {
    if !(principal.is_finite() && principal > 0.0) {
        return Err(CalculatorError::invalid(
            "principal",
            format!("must be positive, got {}", principal),
        ));
    }
    if !(annual_rate_percent.is_finite() && annual_rate_percent >= 0.0) {
        return Err(CalculatorError::invalid(
            "annual_rate_percent",
            format!("must be non-negative, got {}", annual_rate_percent),
        ));
    }
    Ok(())
}

/// Fixed monthly payment for an amortizing loan.
pub fn calculate_emi(
    principal: f64,
    annual_rate_percent: f64,
    term: LoanTerm,
) -> Result<f64, CalculatorError> {
    validate(principal, annual_rate_percent)?;
    let n = term.months()?;
    emi_for_periods(principal, annual_rate_percent / 1200.0, n)
}

/// `1 - (1 + r)^-n`, evaluated in log space so neither a tiny rate nor a
/// very long term loses the result to rounding or overflow.
fn discount_complement(r: f64, n: u32) -> f64 {
    -(-(n as f64) * r.ln_1p()).exp_m1()
}

fn ensure_finite(value: f64, what: &str) -> Result<f64, CalculatorError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalculatorError::invalid(
            "annual_rate_percent",
            format!("{} has no finite value for this loan", what),
        ))
    }
}

fn emi_for_periods(principal: f64, r: f64, n: u32) -> Result<f64, CalculatorError> {
    if r == 0.0 {
        return Ok(principal / n as f64);
    }
    ensure_finite(principal * r / discount_complement(r, n), "monthly payment")
}

/// Installment ceiling from income, and whether `payment` fits under it.
pub fn check_affordability(
    payment: f64,
    monthly_income: f64,
    existing_obligations: f64,
) -> Affordability {
    let disposable = (monthly_income - existing_obligations).max(0.0);
    let max_affordable_payment = disposable * DEBT_TO_INCOME_CEILING;
    Affordability {
        max_affordable_payment,
        affordable: payment <= max_affordable_payment,
    }
}

/// Payment, totals and (when income is given) affordability for a loan.
pub fn summarize(params: &LoanParameters) -> Result<LoanSummary, CalculatorError> {
    validate(params.principal, params.annual_rate_percent)?;
    let months = params.term.months()?;

    let monthly_rate = params.annual_rate_percent / 1200.0;
    let monthly_payment = emi_for_periods(params.principal, monthly_rate, months)?;
    let total_paid = ensure_finite(monthly_payment * months as f64, "total repayment")?;
    let total_interest = total_paid - params.principal;

    let affordability = params.monthly_income.map(|income| {
        check_affordability(
            monthly_payment,
            income,
            params.existing_obligations.unwrap_or(0.0),
        )
    });

    debug!(
        "emi: principal={} rate={} months={} payment={:.2}",
        params.principal, params.annual_rate_percent, months, monthly_payment
    );

    Ok(LoanSummary {
        principal: params.principal,
        annual_rate_percent: params.annual_rate_percent,
        months,
        monthly_payment,
        total_paid,
        total_interest,
        affordability,
    })
}

/// Month-by-month split of each payment into interest and principal.
///
/// Returns at most `periods` rows and never more than the loan term. Balances
/// are not rounded, so the last row of a full schedule lands on zero up to
/// floating point error.
pub fn amortization_schedule(summary: &LoanSummary, periods: usize) -> Vec<AmortizationRow> {
    let r = summary.monthly_rate();
    let count = periods.min(summary.months as usize);
    let mut balance = summary.principal;
    let mut rows = Vec::with_capacity(count);

    for period in 1..=count {
        let interest = balance * r;
        let principal = summary.monthly_payment - interest;
        balance -= principal;
        rows.push(AmortizationRow {
            period: period as u32,
            payment: summary.monthly_payment,
            interest,
            principal,
            balance,
        });
    }

    rows
}

/// Largest principal whose installment does not exceed `payment`.
pub fn max_principal_for_payment(
    payment: f64,
    annual_rate_percent: f64,
    term: LoanTerm,
) -> Result<f64, CalculatorError> {
    if !(payment.is_finite() && payment > 0.0) {
        return Err(CalculatorError::invalid(
            "payment",
            format!("must be positive, got {}", payment),
        ));
    }
    validate(1.0, annual_rate_percent)?;
    let n = term.months()?;
    let r = annual_rate_percent / 1200.0;

    if r == 0.0 {
        return ensure_finite(payment * n as f64, "principal");
    }
    ensure_finite(payment * discount_complement(r, n) / r, "principal")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, rel: f64) -> bool {
        (a - b).abs() <= rel * b.abs().max(1.0)
    }

    #[test]
    fn reference_loan_matches_closed_form() {
        let emi = calculate_emi(1_000_000.0, 9.5, LoanTerm::Years(15)).unwrap();
        let r: f64 = 9.5 / 1200.0;
        let g = (1.0 + r).powf(180.0);
        let expected = 1_000_000.0 * r * g / (g - 1.0);
        assert!(close(emi, expected, 1e-6), "{} vs {}", emi, expected);
        assert!(close(emi, 10_442.2468, 1e-8), "{}", emi);
    }

    #[test]
    fn totals_reconcile_exactly() {
        let params = LoanParameters::new(1_000_000.0, 9.5, LoanTerm::Years(15));
        let summary = summarize(&params).unwrap();
        assert_eq!(summary.months, 180);
        assert_eq!(summary.total_paid - summary.principal, summary.total_interest);
        assert_eq!(summary.total_paid, summary.monthly_payment * 180.0);
    }

    #[test]
    fn zero_rate_is_straight_line() {
        let emi = calculate_emi(1_200_000.0, 0.0, LoanTerm::Years(10)).unwrap();
        assert_eq!(emi, 1_200_000.0 / 120.0);
    }

    #[test]
    fn months_and_years_agree() {
        let a = calculate_emi(500_000.0, 8.0, LoanTerm::Years(5)).unwrap();
        let b = calculate_emi(500_000.0, 8.0, LoanTerm::Months(60)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_invalid_input() {
        assert!(matches!(
            calculate_emi(1_000.0, 5.0, LoanTerm::Years(0)),
            Err(CalculatorError::InvalidParameter { param: "term", .. })
        ));
        assert!(matches!(
            calculate_emi(0.0, 5.0, LoanTerm::Years(1)),
            Err(CalculatorError::InvalidParameter { param: "principal", .. })
        ));
        assert!(matches!(
            calculate_emi(1_000.0, -1.0, LoanTerm::Years(1)),
            Err(CalculatorError::InvalidParameter { param: "annual_rate_percent", .. })
        ));
        assert!(calculate_emi(f64::NAN, 5.0, LoanTerm::Years(1)).is_err());
    }

    #[test]
    fn tiny_rate_approaches_straight_line() {
        let emi = calculate_emi(1_000_000.0, 1e-14, LoanTerm::Years(15)).unwrap();
        assert!(emi.is_finite());
        assert!(close(emi, 1_000_000.0 / 180.0, 1e-9), "{}", emi);
    }

    #[test]
    fn very_long_terms_settle_on_interest_only() {
        let interest_only = 1_000_000.0 * 12.0 / 1200.0;

        let emi = calculate_emi(1_000_000.0, 12.0, LoanTerm::Months(1_000_000)).unwrap();
        assert!(close(emi, interest_only, 1e-12), "{}", emi);

        let emi = calculate_emi(1_000_000.0, 12.0, LoanTerm::Months(3_000_000_000)).unwrap();
        assert!(close(emi, interest_only, 1e-12), "{}", emi);

        let term = LoanTerm::Months(3_000_000_000);
        let principal = max_principal_for_payment(interest_only, 12.0, term).unwrap();
        assert!(close(principal, 1_000_000.0, 1e-12), "{}", principal);
    }

    #[test]
    fn overflowing_payment_is_rejected() {
        assert!(matches!(
            calculate_emi(f64::MAX, 1e300, LoanTerm::Years(1)),
            Err(CalculatorError::InvalidParameter { param: "annual_rate_percent", .. })
        ));
        let huge = f64::MAX / 2.0;
        assert!(summarize(&LoanParameters::new(huge, 0.0, LoanTerm::Months(1))).is_ok());
        assert!(summarize(&LoanParameters::new(huge, 100.0, LoanTerm::Years(30))).is_err());
    }

    #[test]
    fn affordability_uses_half_of_disposable_income() {
        let a = check_affordability(20_000.0, 60_000.0, 10_000.0);
        assert_eq!(a.max_affordable_payment, 25_000.0);
        assert!(a.affordable);

        let b = check_affordability(30_000.0, 60_000.0, 10_000.0);
        assert!(!b.affordable);

        let c = check_affordability(1.0, 10_000.0, 20_000.0);
        assert_eq!(c.max_affordable_payment, 0.0);
        assert!(!c.affordable);
    }

    #[test]
    fn summary_includes_affordability_when_income_given() {
        let params = LoanParameters::new(1_000_000.0, 9.5, LoanTerm::Years(15))
            .with_income(50_000.0, 5_000.0);
        let summary = summarize(&params).unwrap();
        let affordability = summary.affordability.unwrap();
        assert_eq!(affordability.max_affordable_payment, 22_500.0);
        assert!(affordability.affordable);
    }

    #[test]
    fn schedule_first_row_and_cap() {
        let params = LoanParameters::new(1_000_000.0, 12.0, LoanTerm::Years(20));
        let summary = summarize(&params).unwrap();
        let rows = amortization_schedule(&summary, DISPLAY_PERIODS);
        assert_eq!(rows.len(), DISPLAY_PERIODS);
        assert_eq!(rows[0].period, 1);
        assert!(close(rows[0].interest, 10_000.0, 1e-12));
        assert!(close(rows[0].principal + rows[0].interest, summary.monthly_payment, 1e-12));
        assert!(rows.windows(2).all(|w| w[1].balance < w[0].balance));
    }

    #[test]
    fn full_schedule_pays_off_loan() {
        let params = LoanParameters::new(750_000.0, 7.25, LoanTerm::Months(84));
        let summary = summarize(&params).unwrap();
        let rows = amortization_schedule(&summary, usize::MAX);
        assert_eq!(rows.len(), 84);
        let last = rows.last().unwrap();
        assert!(last.balance.abs() < 1e-4, "residual {}", last.balance);
    }

    #[test]
    fn max_principal_inverts_emi() {
        let emi = calculate_emi(2_500_000.0, 8.5, LoanTerm::Years(20)).unwrap();
        let principal = max_principal_for_payment(emi, 8.5, LoanTerm::Years(20)).unwrap();
        assert!(close(principal, 2_500_000.0, 1e-9));

        let straight = max_principal_for_payment(1_000.0, 0.0, LoanTerm::Months(12)).unwrap();
        assert_eq!(straight, 12_000.0);
    }
}
