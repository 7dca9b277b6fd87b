use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::retain_valid;
use super::traits::PropertyRepository;
use crate::error::RepositoryError;
use crate::models::{Booking, BookingRequest, Developer, FilterCriteria, Property};
use crate::search::filter_properties;

/// JSON-over-HTTP listing source
pub struct HttpRepository {
    client: Client,
    base_url: Url,
}

impl HttpRepository {
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, RepositoryError> {
        let raw = base_url.as_ref();
        let base_url = Url::parse(raw)
            .map_err(|e| RepositoryError::InvalidBaseUrl(format!("{}: {}", raw, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(RepositoryError::InvalidBaseUrl(raw.to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("property-scout/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Appends `segments` to the base path, percent-encoding each one.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn fetch<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, RepositoryError> {
        let url = self.url(segments);
        debug!("Fetching URL: {}", url);

        let response = self.client.get(url.clone()).send().await?;
        if !response.status().is_success() {
            warn!("{} returned status: {}", url, response.status());
            return Err(RepositoryError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl PropertyRepository for HttpRepository {
    async fn get_properties(
        &self,
        criteria: Option<&FilterCriteria>,
    ) -> Result<Vec<Property>, RepositoryError> {
        let properties = retain_valid(self.fetch(&["properties"]).await?);

        let properties = match criteria {
            Some(criteria) => filter_properties(&properties, criteria)
                .into_iter()
                .cloned()
                .collect(),
            None => properties,
        };

        info!("Fetched {} properties from {}", properties.len(), self.base_url);
        Ok(properties)
    }

    async fn get_property_by_id(&self, id: &str) -> Result<Option<Property>, RepositoryError> {
        match self.fetch::<Property>(&["properties", id]).await {
            Ok(property) => Ok(retain_valid(vec![property]).pop()),
            Err(RepositoryError::Status(StatusCode::NOT_FOUND)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn get_developers(&self) -> Result<Vec<Developer>, RepositoryError> {
        self.fetch(&["developers"]).await
    }

    async fn book_visit(&self, request: BookingRequest) -> Result<Booking, RepositoryError> {
        let response = self
            .client
            .post(self.url(&["bookings"]))
            .json(&request)
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(RepositoryError::UnknownProperty(request.property_id)),
            status if status.is_success() => Ok(response.json().await?),
            status => {
                warn!("booking for {} rejected with status {}", request.property_id, status);
                Err(RepositoryError::Status(status))
            }
        }
    }

    async fn bookings_for(&self, property_id: &str) -> Result<Vec<Booking>, RepositoryError> {
        self.fetch(&["properties", property_id, "bookings"]).await
    }

    fn source_name(&self) -> &'static str {
        "http"
    }
}
