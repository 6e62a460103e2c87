//! Server module for hosting the mock over HTTP
//!
//! - [`InMemoryBackend`] answers requests against the live store
//! - [`ServerHost`] pairs the backend with the pass-through router
//! - [`ServerBuilder`] assembles both into an axum `Router`

pub mod backend;
pub mod builder;
pub mod exposure;
pub mod host;
pub mod url_parser;

pub use backend::{BackendResponse, InMemoryBackend, MockResponse};
pub use builder::ServerBuilder;
pub use host::ServerHost;
pub use url_parser::DefaultUrlParser;
