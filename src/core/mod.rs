//! Core module containing the data model and the data service contract

pub mod collection;
pub mod error;
pub mod model;
pub mod naming;
pub mod request;
pub mod service;
pub mod store;

pub use collection::Collection;
pub use error::{ApiError, ErrorResponse};
pub use model::{Customer, Order, OrderItem, Record};
pub use naming::map_collection_name;
pub use request::{ParsedRequestUrl, QueryMap, RequestInfo, RequestInfoUtilities};
pub use service::InMemoryDbService;
pub use store::Store;
