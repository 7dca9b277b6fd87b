use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::{fixtures, retain_valid};
use super::traits::PropertyRepository;
use crate::error::RepositoryError;
use crate::models::{Booking, BookingRequest, BookingStatus, Developer, FilterCriteria, Property};
use crate::search::filter_properties;

/// Mock data source answering from memory after a fixed delay
pub struct InMemoryRepository {
    properties: Vec<Property>,
    developers: Vec<Developer>,
    bookings: RwLock<Vec<Booking>>,
    latency: Duration,
}

impl InMemoryRepository {
    /// Builds the repository, dropping records that break the listing invariants
    pub fn new(properties: Vec<Property>, developers: Vec<Developer>, latency: Duration) -> Self {
        let total = properties.len();
        let properties = retain_valid(properties);

        info!(
            "📋 Loaded {} of {} properties and {} developers",
            properties.len(),
            total,
            developers.len()
        );

        Self {
            properties,
            developers,
            bookings: RwLock::new(Vec::new()),
            latency,
        }
    }

    /// Repository seeded with the bundled sample listings
    pub fn with_sample_data(latency: Duration) -> Self {
        Self::new(fixtures::sample_properties(), fixtures::sample_developers(), latency)
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl PropertyRepository for InMemoryRepository {
    async fn get_properties(
        &self,
        criteria: Option<&FilterCriteria>,
    ) -> Result<Vec<Property>, RepositoryError> {
        self.simulate_latency().await;

        let found: Vec<Property> = match criteria {
            Some(criteria) if !criteria.is_empty() => filter_properties(&self.properties, criteria)
                .into_iter()
                .cloned()
                .collect(),
            _ => self.properties.clone(),
        };

        debug!("get_properties -> {} records", found.len());
        Ok(found)
    }

    async fn get_property_by_id(&self, id: &str) -> Result<Option<Property>, RepositoryError> {
        self.simulate_latency().await;
        Ok(self.properties.iter().find(|p| p.id == id).cloned())
    }

    async fn get_developers(&self) -> Result<Vec<Developer>, RepositoryError> {
        self.simulate_latency().await;
        Ok(self.developers.clone())
    }

    async fn book_visit(&self, request: BookingRequest) -> Result<Booking, RepositoryError> {
        self.simulate_latency().await;

        if !self.properties.iter().any(|p| p.id == request.property_id) {
            return Err(RepositoryError::UnknownProperty(request.property_id));
        }

        let mut bookings = self.bookings.write().await;
        let booking = Booking {
            id: format!("booking_{}", bookings.len() + 1),
            property_id: request.property_id,
            visitor_name: request.visitor_name,
            phone: request.phone,
            scheduled_for: request.scheduled_for,
            note: request.note,
            status: BookingStatus::Requested,
            created_at: Utc::now(),
        };
        bookings.push(booking.clone());

        info!("Booked visit {} for property {}", booking.id, booking.property_id);
        Ok(booking)
    }

    async fn bookings_for(&self, property_id: &str) -> Result<Vec<Booking>, RepositoryError> {
        self.simulate_latency().await;
        let bookings = self.bookings.read().await;
        Ok(bookings
            .iter()
            .filter(|b| b.property_id == property_id)
            .cloned()
            .collect())
    }

    fn source_name(&self) -> &'static str {
        "in-memory"
    }
}
