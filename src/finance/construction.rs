use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Quality;
use crate::error::CalculatorError;

/// Base cost per square foot for each line item.
pub const UNIT_COSTS: [(CostItem, f64); 7] = [
    (CostItem::Foundation, 180.0),
    (CostItem::Structure, 450.0),
    (CostItem::Finishes, 320.0),
    (CostItem::Electrical, 120.0),
    (CostItem::Plumbing, 110.0),
    (CostItem::Tiles, 140.0),
    (CostItem::Paint, 60.0),
];

/// Share of the grand total per category. Miscellaneous takes whatever the
/// other categories leave, so the shares always add back up to the total.
pub const CATEGORY_WEIGHTS: [(CostCategory, f64); 6] = [
    (CostCategory::Foundation, 0.15),
    (CostCategory::Structure, 0.35),
    (CostCategory::Finishes, 0.20),
    (CostCategory::Electrical, 0.10),
    (CostCategory::Plumbing, 0.08),
    (CostCategory::Miscellaneous, 0.12),
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CostItem {
    Foundation,
    Structure,
    Finishes,
    Electrical,
    Plumbing,
    Tiles,
    Paint,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CostCategory {
    Foundation,
    Structure,
    Finishes,
    Electrical,
    Plumbing,
    Miscellaneous,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LocationTier {
    Metro,
    Tier1,
    Tier2,
    Rural,
}

impl LocationTier {
    pub fn multiplier(self) -> f64 {
        match self {
            LocationTier::Metro => 1.25,
            LocationTier::Tier1 => 1.1,
            LocationTier::Tier2 => 1.0,
            LocationTier::Rural => 0.85,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConstructionParameters {
    pub area_sqft: f64,
    pub quality: Quality,
    pub location: LocationTier,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub item: CostItem,
    pub unit_cost: f64,
    pub cost: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CategoryShare {
    pub category: CostCategory,
    pub weight: f64,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConstructionEstimate {
    pub line_items: Vec<LineItem>,
    pub categories: Vec<CategoryShare>,
    pub grand_total: f64,
    pub cost_per_sqft: f64,
}

impl ConstructionEstimate {
    pub fn category_total(&self) -> f64 {
        self.categories.iter().map(|c| c.amount).sum()
    }
}

pub fn estimate_construction(
    params: &ConstructionParameters,
) -> Result<ConstructionEstimate, CalculatorError> {
    if !(params.area_sqft.is_finite() && params.area_sqft > 0.0) {
        return Err(CalculatorError::invalid(
            "area_sqft",
            format!("must be positive, got {}", params.area_sqft),
        ));
    }

    let scale = params.quality.multiplier() * params.location.multiplier();
    let line_items: Vec<LineItem> = UNIT_COSTS
        .iter()
        .map(|&(item, base)| {
            let unit_cost = base * scale;
            LineItem {
                item,
                unit_cost,
                cost: params.area_sqft * unit_cost,
            }
        })
        .collect();
    let grand_total: f64 = line_items.iter().map(|l| l.cost).sum();

    let mut categories = Vec::with_capacity(CATEGORY_WEIGHTS.len());
    let mut allocated = 0.0;
    for &(category, weight) in &CATEGORY_WEIGHTS {
        let amount = if category == CostCategory::Miscellaneous {
            grand_total - allocated
        } else {
            grand_total * weight
        };
        allocated += amount;
        categories.push(CategoryShare {
            category,
            weight,
            amount,
        });
    }

    debug!(
        "construction: area={} total={:.2}",
        params.area_sqft, grand_total
    );

    Ok(ConstructionEstimate {
        line_items,
        categories,
        grand_total,
        cost_per_sqft: grand_total / params.area_sqft,
    })
}
