use property_scout::finance::{
    amortization_schedule, calculate_emi, calculate_roi, estimate_construction, payback_period,
    summarize, ConstructionParameters, LoanParameters, LoanTerm, LocationTier, MarketCondition,
    Quality, RoiParameters,
};
use property_scout::{CalculatorError, PropertyType};
use proptest::prelude::*;

fn arb_quality() -> impl Strategy<Value = Quality> {
    prop_oneof![
        Just(Quality::Basic),
        Just(Quality::Standard),
        Just(Quality::Premium),
        Just(Quality::Luxury),
    ]
}

fn arb_tier() -> impl Strategy<Value = LocationTier> {
    prop_oneof![
        Just(LocationTier::Metro),
        Just(LocationTier::Tier1),
        Just(LocationTier::Tier2),
        Just(LocationTier::Rural),
    ]
}

proptest! {
    #[test]
    fn totals_reconcile(
        principal in 10_000.0f64..50_000_000.0,
        rate in 0.0f64..24.0,
        years in 1u32..31,
    ) {
        let params = LoanParameters::new(principal, rate, LoanTerm::Years(years));
        let summary = summarize(&params).unwrap();
        prop_assert_eq!(summary.total_paid - principal, summary.total_interest);
        prop_assert!(summary.total_interest >= -1e-6 * principal);
    }

    #[test]
    fn schedule_converges_to_zero(
        principal in 10_000.0f64..50_000_000.0,
        rate in 0.0f64..24.0,
        months in 1u32..361,
    ) {
        let params = LoanParameters::new(principal, rate, LoanTerm::Months(months));
        let summary = summarize(&params).unwrap();
        let rows = amortization_schedule(&summary, usize::MAX);
        prop_assert_eq!(rows.len(), months as usize);
        let last = rows.last().unwrap();
        prop_assert!(last.balance.abs() <= principal * 1e-7, "residual {}", last.balance);
    }

    #[test]
    fn zero_rate_is_exactly_straight_line(principal in 1.0f64..10_000_000.0, years in 1u32..31) {
        let emi = calculate_emi(principal, 0.0, LoanTerm::Years(years)).unwrap();
        prop_assert_eq!(emi, principal / (years * 12) as f64);
    }

    #[test]
    fn payment_is_finite_and_positive_for_any_accepted_loan(
        principal in 1.0f64..1e12,
        rate in prop_oneof![0.0f64..1e-9, 0.0f64..100.0],
        months in 1u32..=u32::MAX,
    ) {
        let emi = calculate_emi(principal, rate, LoanTerm::Months(months)).unwrap();
        prop_assert!(emi.is_finite() && emi > 0.0, "payment {}", emi);
        prop_assert!(emi <= principal * (1.0 + rate / 1200.0) * (1.0 + 1e-9), "payment {}", emi);
    }

    #[test]
    fn construction_categories_sum_to_total(
        area in 100.0f64..20_000.0,
        quality in arb_quality(),
        location in arb_tier(),
    ) {
        let params = ConstructionParameters { area_sqft: area, quality, location };
        let estimate = estimate_construction(&params).unwrap();
        let sum: f64 = estimate.categories.iter().map(|c| c.amount).sum();
        prop_assert!((sum - estimate.grand_total).abs() <= estimate.grand_total * 1e-12);
        let items: f64 = estimate.line_items.iter().map(|l| l.cost).sum();
        prop_assert!((items - estimate.grand_total).abs() <= estimate.grand_total * 1e-12);
    }

    #[test]
    fn payback_defined_only_for_positive_income(
        investment in 100_000.0f64..100_000_000.0,
        occupancy in 0.0f64..=100.0,
    ) {
        let roi = calculate_roi(&RoiParameters {
            area_sqft: 1_000.0,
            investment,
            property_type: PropertyType::Apartment,
            quality: Quality::Standard,
            market: MarketCondition::Stable,
            occupancy_percent: occupancy,
            maintenance_percent: 10.0,
        }).unwrap();

        match roi.payback_period_years {
            Some(years) => {
                prop_assert!(roi.net_operating_income > 0.0);
                prop_assert!(years.is_finite() && years > 0.0);
            }
            None => {
                prop_assert!(roi.net_operating_income <= 0.0);
                let is_invalid = matches!(
                    payback_period(investment, roi.net_operating_income),
                    Err(CalculatorError::InvalidParameter { .. })
                );
                prop_assert!(is_invalid);
            }
        }
    }
}
