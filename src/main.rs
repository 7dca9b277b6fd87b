use anyhow::Context;
use property_scout::config::{Config, DataSource};
use property_scout::finance::{
    amortization_schedule, calculate_roi, estimate_construction, summarize, ConstructionParameters,
    LoanParameters, LoanTerm, LocationTier, MarketCondition, Quality, RoiParameters,
};
use property_scout::repository::{HttpRepository, InMemoryRepository, PropertyRepository};
use property_scout::unlock::{ContactUnlocker, FileStore, SimulatedPayment, UnlockOutcome};
use property_scout::{Category, FilterCriteria, Property, Recommender};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn print_listing(i: usize, property: &Property) {
    println!("{}. {} ({})", i + 1, property.title, property.price);
    if let Some(area) = &property.location.area {
        println!("   Area: {}, {}", area, property.location.city);
    }
    println!("   ID: {}", property.id);
    if property.verified {
        println!("   Verified");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    info!("🏠 Property Scout");
    info!("==========================================");

    let repository: Box<dyn PropertyRepository> = match &config.data_source {
        DataSource::Mock => Box::new(InMemoryRepository::with_sample_data(config.latency)),
        DataSource::Http { base_url } => Box::new(HttpRepository::new(base_url.clone())?),
    };
    info!("Using {} data source", repository.source_name());

    let properties = repository.get_properties(None).await?;
    info!("✅ Loaded {} properties", properties.len());

    let recommender = Recommender::new(config.best_deal_max_price, config.recommendation_limit);

    println!("\nBest deals");
    for (i, property) in recommender.best_deals(&properties).iter().enumerate() {
        print_listing(i, property);
    }

    println!("\nRecently verified");
    for (i, property) in recommender.recently_verified(&properties).iter().enumerate() {
        print_listing(i, property);
    }

    println!("\nIn {}", config.featured_area);
    for (i, property) in recommender
        .in_area(&properties, &config.featured_area)
        .iter()
        .enumerate()
    {
        print_listing(i, property);
    }

    let rentals = repository
        .get_properties(Some(&FilterCriteria::new().category(Category::Rent).verified()))
        .await?;
    info!("{} verified rentals", rentals.len());

    // Loan on the cheapest deal, 80% financed over 20 years
    if let Some(deal) = recommender.best_deals(&properties).first() {
        let loan = LoanParameters::new(deal.price as f64 * 0.8, 8.5, LoanTerm::Years(20))
            .with_income(120_000.0, 15_000.0);
        let summary = summarize(&loan)?;
        println!("\nLoan for {}", deal.title);
        println!("   EMI: {:.2}", summary.monthly_payment);
        println!("   Total interest: {:.2}", summary.total_interest);
        if let Some(affordability) = summary.affordability {
            println!(
                "   Affordable: {} (ceiling {:.2})",
                affordability.affordable, affordability.max_affordable_payment
            );
        }
        for row in amortization_schedule(&summary, 3) {
            println!(
                "   #{} interest {:.2} principal {:.2} balance {:.2}",
                row.period, row.interest, row.principal, row.balance
            );
        }

        let roi = calculate_roi(&RoiParameters {
            area_sqft: deal.features.area_sqft,
            investment: deal.price as f64,
            property_type: deal.property_type,
            quality: Quality::Standard,
            market: MarketCondition::Stable,
            occupancy_percent: 90.0,
            maintenance_percent: 10.0,
        })?;
        println!("   Cash-on-cash ROI: {:.2}%", roi.cash_on_cash_roi);
        println!("   Total ROI: {:.2}%", roi.total_roi);
        match roi.payback_period_years {
            Some(years) => println!("   Payback: {:.1} years", years),
            None => println!("   Payback: never at current rent"),
        }

        let construction = estimate_construction(&ConstructionParameters {
            area_sqft: deal.features.area_sqft,
            quality: Quality::Standard,
            location: LocationTier::Metro,
        })?;
        println!("   Rebuild estimate: {:.2}", construction.grand_total);
    }

    let store = FileStore::open(&config.unlock_store)
        .with_context(|| format!("opening {}", config.unlock_store.display()))?;
    let mut unlocker = ContactUnlocker::new(store, SimulatedPayment::default(), config.unlock_fee);
    for property in properties.iter().take(2) {
        match unlocker.unlock(&property.id) {
            Ok(UnlockOutcome::Free) => info!("🔓 {} unlocked for free", property.id),
            Ok(UnlockOutcome::Paid(receipt)) => {
                info!(
                    "🔓 {} unlocked for {} ({})",
                    property.id,
                    unlocker.fee(),
                    receipt.reference
                )
            }
            Ok(UnlockOutcome::AlreadyUnlocked) => info!("{} already unlocked", property.id),
            Err(e) => warn!("could not unlock {}: {}", property.id, e),
        }
    }

    let json = serde_json::to_string_pretty(&properties)?;
    tokio::fs::write(&config.output, json).await?;
    info!("💾 Saved all properties to {}", config.output.display());

    Ok(())
}
