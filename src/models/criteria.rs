use serde::{Deserialize, Serialize};

use super::{Category, PropertyType};

/// Search criteria for property listings.
/// Every field is optional; `None` means "no constraint".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the area or city
    pub location: Option<String>,
    pub category: Option<Category>,
    pub property_type: Option<PropertyType>,
    /// Minimum price, inclusive
    pub min_price: Option<u64>,
    /// Maximum price, inclusive
    pub max_price: Option<u64>,
    /// Minimum number of bedrooms
    pub min_bedrooms: Option<u32>,
    /// Minimum number of bathrooms
    pub min_bathrooms: Option<u32>,
    pub furnished: Option<bool>,
    pub verified: Option<bool>,
    pub for_bachelors: Option<bool>,
    pub for_families: Option<bool>,
    pub women_only: Option<bool>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn property_type(mut self, property_type: PropertyType) -> Self {
        self.property_type = Some(property_type);
        self
    }

    pub fn price_range(mut self, min: Option<u64>, max: Option<u64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn min_bedrooms(mut self, bedrooms: u32) -> Self {
        self.min_bedrooms = Some(bedrooms);
        self
    }

    pub fn min_bathrooms(mut self, bathrooms: u32) -> Self {
        self.min_bathrooms = Some(bathrooms);
        self
    }

    pub fn furnished(mut self) -> Self {
        self.furnished = Some(true);
        self
    }

    pub fn verified(mut self) -> Self {
        self.verified = Some(true);
        self
    }

    pub fn for_bachelors(mut self) -> Self {
        self.for_bachelors = Some(true);
        self
    }

    pub fn for_families(mut self) -> Self {
        self.for_families = Some(true);
        self
    }

    pub fn women_only(mut self) -> Self {
        self.women_only = Some(true);
        self
    }
}
