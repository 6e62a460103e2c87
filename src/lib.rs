//! # Mock API
//!
//! An in-memory web API that stands in for the backend of the customers and
//! orders demo while the front end is developed locally.
//!
//! ## Features
//!
//! - **Seed Data**: 4 customers and 10 orders, restored on every reset
//! - **Singular Routing**: `api/customer/1` and `api/customers/1` address the same record
//! - **Shared Id Counter**: generated ids never repeat, even across collections
//! - **Pass-Through Switch**: `commands/resetDb` with `{"active": false}` hands every
//!   request to a pass-through router
//! - **Query Filtering**: `?name=^t` filters with case-insensitive regexes
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mockapi::prelude::*;
//!
//! let app = ServerBuilder::new()
//!     .with_db_service(MockDataStore::new())
//!     .build()?;
//!
//! // GET  /api/customers          - all customers
//! // GET  /api/order/3            - one order
//! // POST /commands/resetDb       - reseed; {"clear": true, "active": true}
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ApiError, Collection, Customer, InMemoryDbService, Order, OrderItem, ParsedRequestUrl,
        Record, RequestInfo, RequestInfoUtilities, Store, map_collection_name,
    };

    // === Storage ===
    pub use crate::storage::{MockDataStore, seed_store};

    // === Config ===
    pub use crate::config::{BackendConfig, ServerConfig};

    // === Server ===
    pub use crate::server::{
        BackendResponse, DefaultUrlParser, InMemoryBackend, MockResponse, ServerBuilder,
        ServerHost,
    };

    // === External dependencies ===
    pub use anyhow::Result;
    pub use serde::{Deserialize, Serialize};
}
