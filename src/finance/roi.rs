use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Quality;
use crate::error::CalculatorError;
use crate::models::PropertyType;

/// Monthly rent per square foot before multipliers.
pub const BASE_RENT_PER_SQFT: f64 = 25.0;
pub const PROPERTY_TAX_RATE: f64 = 0.01;
pub const MANAGEMENT_FEE_RATE: f64 = 0.08;
pub const INSURANCE_RATE: f64 = 0.005;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MarketCondition {
    Slow,
    Stable,
    Growing,
    Hot,
}

impl MarketCondition {
    pub fn multiplier(self) -> f64 {
        match self {
            MarketCondition::Slow => 0.9,
            MarketCondition::Stable => 1.0,
            MarketCondition::Growing => 1.1,
            MarketCondition::Hot => 1.25,
        }
    }
}

/// Yearly appreciation as a fraction of the investment.
pub fn appreciation_rate(property_type: PropertyType) -> f64 {
    match property_type {
        PropertyType::Apartment => 0.05,
        PropertyType::House => 0.06,
        PropertyType::Villa => 0.07,
        PropertyType::Commercial => 0.04,
        PropertyType::Room => 0.03,
        PropertyType::Office => 0.045,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoiParameters {
    pub area_sqft: f64,
    pub investment: f64,
    pub property_type: PropertyType,
    pub quality: Quality,
    pub market: MarketCondition,
    /// 0..=100
    pub occupancy_percent: f64,
    /// Share of annual rent set aside for maintenance, 0..=100
    pub maintenance_percent: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AnnualExpenses {
    pub maintenance: f64,
    pub property_tax: f64,
    pub management_fee: f64,
    pub insurance: f64,
}

impl AnnualExpenses {
    pub fn total(&self) -> f64 {
        self.maintenance + self.property_tax + self.management_fee + self.insurance
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoiBreakdown {
    pub monthly_rental_income: f64,
    pub annual_rental_income: f64,
    pub annual_expenses: AnnualExpenses,
    pub net_operating_income: f64,
    /// Percent
    pub cash_on_cash_roi: f64,
    pub annual_appreciation: f64,
    /// Percent
    pub total_roi: f64,
    /// `None` when the property never pays for itself
    pub payback_period_years: Option<f64>,
}

fn positive(param: &'static str, value: f64) -> Result<(), CalculatorError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CalculatorError::invalid(param, format!("must be positive, got {}", value)))
    }
}

fn percent(param: &'static str, value: f64) -> Result<(), CalculatorError> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(CalculatorError::invalid(param, format!("must be within 0..=100, got {}", value)))
    }
}

/// Years until cumulative operating income covers the investment.
pub fn payback_period(investment: f64, net_operating_income: f64) -> Result<f64, CalculatorError> {
    positive("investment", investment)?;
    if !(net_operating_income.is_finite() && net_operating_income > 0.0) {
        return Err(CalculatorError::invalid(
            "net_operating_income",
            format!("investment is never recovered at {}", net_operating_income),
        ));
    }
    Ok(investment / net_operating_income)
}

pub fn calculate_roi(params: &RoiParameters) -> Result<RoiBreakdown, CalculatorError> {
    positive("area_sqft", params.area_sqft)?;
    positive("investment", params.investment)?;
    percent("occupancy_percent", params.occupancy_percent)?;
    percent("maintenance_percent", params.maintenance_percent)?;

    let monthly_rental_income = params.area_sqft
        * BASE_RENT_PER_SQFT
        * params.quality.multiplier()
        * params.market.multiplier()
        * (params.occupancy_percent / 100.0);
    let annual_rental_income = monthly_rental_income * 12.0;

    let annual_expenses = AnnualExpenses {
        maintenance: annual_rental_income * params.maintenance_percent / 100.0,
        property_tax: params.investment * PROPERTY_TAX_RATE,
        management_fee: annual_rental_income * MANAGEMENT_FEE_RATE,
        insurance: params.investment * INSURANCE_RATE,
    };

    let net_operating_income = annual_rental_income - annual_expenses.total();
    let annual_appreciation = params.investment * appreciation_rate(params.property_type);
    let cash_on_cash_roi = net_operating_income / params.investment * 100.0;
    let total_roi = (net_operating_income + annual_appreciation) / params.investment * 100.0;
    let payback_period_years = payback_period(params.investment, net_operating_income).ok();

    debug!(
        "roi: noi={:.2} cash_on_cash={:.2}% total={:.2}%",
        net_operating_income, cash_on_cash_roi, total_roi
    );

    Ok(RoiBreakdown {
        monthly_rental_income,
        annual_rental_income,
        annual_expenses,
        net_operating_income,
        cash_on_cash_roi,
        annual_appreciation,
        total_roi,
        payback_period_years,
    })
}
