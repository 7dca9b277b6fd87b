use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod criteria;

pub use criteria::FilterCriteria;

/// Kind of building a listing describes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    Villa,
    Commercial,
    Room,
    Office,
}

/// Whether the listing is for sale or for rent.
/// Sale listings carry a total price, rent listings a per-month price.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Buy,
    Rent,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Available,
    Sold,
    Rented,
    Pending,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CrimeRate {
    Low,
    Medium,
    High,
}

/// Location information for a property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub address: String,
    pub city: String,
    pub area: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Physical features and amenities.
/// Amenity flags are optional: a listing that never stated one is not assumed to have it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Features {
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub area_sqft: f64,
    pub furnished: Option<bool>,
    pub parking: Option<bool>,
    pub pet_friendly: Option<bool>,
    pub bachelors_allowed: Option<bool>,
    pub family_friendly: Option<bool>,
    pub women_only: Option<bool>,
    #[serde(default)]
    pub additional: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NearbyPlace {
    pub name: String,
    pub kind: String,
    pub distance_km: f64,
}

/// Aggregate neighbourhood statistics attached to a listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AreaSnapshot {
    pub average_price: u64,
    pub nearby_places: Vec<NearbyPlace>,
    pub crime_rate: CrimeRate,
    /// 0..=100
    pub walkability_score: u8,
}

/// Core property data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Smallest currency unit
    pub price: u64,
    pub location: Location,
    pub features: Features,
    pub property_type: PropertyType,
    pub category: Category,
    pub status: ListingStatus,
    #[serde(default)]
    pub images: Vec<String>,
    pub verified: bool,
    pub premium: bool,
    pub developer_id: Option<String>,
    pub posted_at: DateTime<Utc>,
    pub area_snapshot: Option<AreaSnapshot>,
}

impl Property {
    /// Checks the record invariants that the type system does not already enforce.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("empty id".to_string());
        }
        if !(self.features.area_sqft.is_finite() && self.features.area_sqft > 0.0) {
            return Err(format!("area must be positive, got {}", self.features.area_sqft));
        }
        if let Some(snapshot) = &self.area_snapshot {
            if snapshot.walkability_score > 100 {
                return Err(format!(
                    "walkability score out of range: {}",
                    snapshot.walkability_score
                ));
            }
        }
        Ok(())
    }

    pub fn area_name(&self) -> Option<&str> {
        self.location.area.as_deref()
    }
}

/// Builder / developer behind one or more listings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Developer {
    pub id: String,
    pub name: String,
    pub city: String,
    pub established_year: u16,
    pub completed_projects: u32,
    pub verified: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Requested,
    Confirmed,
    Cancelled,
}

/// Request to visit a property
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub property_id: String,
    pub visitor_name: String,
    pub phone: String,
    pub scheduled_for: DateTime<Utc>,
    pub note: Option<String>,
}

/// A scheduled property visit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: String,
    pub property_id: String,
    pub visitor_name: String,
    pub phone: String,
    pub scheduled_for: DateTime<Utc>,
    pub note: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}
