pub mod filter;
pub mod recommend;

pub use filter::filter_properties;
pub use recommend::Recommender;
