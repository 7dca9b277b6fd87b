use std::cmp::Reverse;

use tracing::debug;

use crate::models::{Category, Property};

pub const DEFAULT_BEST_DEAL_MAX_PRICE: u64 = 5_000_000;
pub const DEFAULT_LIMIT: usize = 4;

/// Derives the ranked listing slices shown on the home and area pages.
///
/// Every derivation is filter, then stable sort, then a bounded slice, so equal
/// keys keep their source order and repeated calls give identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommender {
    /// Sale listings strictly below this price count as deals
    pub best_deal_max_price: u64,
    pub limit: usize,
}

impl Default for Recommender {
    fn default() -> Self {
        Self {
            best_deal_max_price: DEFAULT_BEST_DEAL_MAX_PRICE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Recommender {
    pub fn new(best_deal_max_price: u64, limit: usize) -> Self {
        Self {
            best_deal_max_price,
            limit,
        }
    }

    /// Cheapest sale listings under the deal threshold
    pub fn best_deals<'a>(&self, records: &'a [Property]) -> Vec<&'a Property> {
        let mut deals: Vec<&Property> = records
            .iter()
            .filter(|p| p.category == Category::Buy && p.price < self.best_deal_max_price)
            .collect();
        deals.sort_by_key(|p| p.price);
        deals.truncate(self.limit);

        debug!("best deals: {} of {} records", deals.len(), records.len());
        deals
    }

    /// Verified listings, newest first
    pub fn recently_verified<'a>(&self, records: &'a [Property]) -> Vec<&'a Property> {
        let mut verified: Vec<&Property> = records.iter().filter(|p| p.verified).collect();
        verified.sort_by_key(|p| Reverse(p.posted_at));
        verified.truncate(self.limit);

        debug!("recently verified: {} of {} records", verified.len(), records.len());
        verified
    }

    /// Listings in exactly the named area, in source order
    pub fn in_area<'a>(&self, records: &'a [Property], area: &str) -> Vec<&'a Property> {
        let found: Vec<&Property> = records
            .iter()
            .filter(|p| p.area_name() == Some(area))
            .take(self.limit)
            .collect();

        debug!("area {}: {} of {} records", area, found.len(), records.len());
        found
    }
}
