//! Property listing data structures and loaders

mod data;
pub mod loader;

pub use data::{FinancingAssumptions, PropertyListing};
pub use loader::{load_default_listings, load_listings, DEFAULT_LISTINGS_PATH};
