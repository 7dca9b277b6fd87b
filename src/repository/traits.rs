use crate::error::RepositoryError;
use crate::models::{Booking, BookingRequest, Developer, FilterCriteria, Property};
use async_trait::async_trait;

/// Common trait for all listing data sources.
/// The in-memory mock and the HTTP client are interchangeable behind it.
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// All listings, narrowed by `criteria` when given
    async fn get_properties(
        &self,
        criteria: Option<&FilterCriteria>,
    ) -> Result<Vec<Property>, RepositoryError>;

    async fn get_property_by_id(&self, id: &str) -> Result<Option<Property>, RepositoryError>;

    async fn get_developers(&self) -> Result<Vec<Developer>, RepositoryError>;

    /// Schedules a visit; the property must exist
    async fn book_visit(&self, request: BookingRequest) -> Result<Booking, RepositoryError>;

    async fn bookings_for(&self, property_id: &str) -> Result<Vec<Booking>, RepositoryError>;

    /// Get the name of the data source
    fn source_name(&self) -> &'static str;
}
