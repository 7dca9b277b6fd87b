//! Listing search, recommendations, loan and investment calculators, and the
//! contact-unlock workflow of a real-estate marketplace.

pub mod config;
pub mod error;
pub mod finance;
pub mod models;
pub mod repository;
pub mod search;
pub mod unlock;

pub use error::{CalculatorError, RepositoryError, StoreError, UnlockError};
pub use models::{Category, FilterCriteria, Property, PropertyType};
pub use repository::PropertyRepository;
pub use search::{filter_properties, Recommender};
