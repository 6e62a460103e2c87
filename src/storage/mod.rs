//! Data services and their fixture data

pub mod mock_data_store;
pub mod seed;

pub use mock_data_store::MockDataStore;
pub use seed::seed_store;
