pub mod fixtures;
pub mod http;
pub mod memory;
pub mod traits;

pub use http::HttpRepository;
pub use memory::InMemoryRepository;
pub use traits::PropertyRepository;

use tracing::warn;

use crate::models::Property;

/// Drops records that break the listing invariants, logging each one.
fn retain_valid(properties: Vec<Property>) -> Vec<Property> {
    properties
        .into_iter()
        .filter(|p| match p.validate() {
            Ok(()) => true,
            Err(reason) => {
                warn!("skipping property {}: {}", p.id, reason);
                false
            }
        })
        .collect()
}
