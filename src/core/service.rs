//! Extension points the in-memory backend consults

use crate::core::collection::Collection;
use crate::core::request::{ParsedRequestUrl, RequestInfo, RequestInfoUtilities};
use crate::core::store::Store;

/// Data service plugged into the in-memory backend
///
/// The backend owns the live [`Store`]. It asks the service for a fresh one
/// at startup and on `commands/resetDb`, for ids of records created without
/// one, and for the routing of every request URL.
///
/// Only [`create_db`](Self::create_db) is required; the other hooks have
/// defaults that reproduce the backend's own behaviour.
pub trait InMemoryDbService: Send {
    /// Build the database
    ///
    /// `request` is `None` at startup and carries the reset command otherwise.
    fn create_db(&mut self, request: Option<&RequestInfo>) -> Store;

    /// Id for a record created without one
    ///
    /// Defaults to one more than the highest id in `collection`. `None` means
    /// no unused id is left.
    fn gen_id(&mut self, collection: &Collection, _collection_name: &str) -> Option<i64> {
        collection.max_id().checked_add(1)
    }

    /// Parse a request URL
    ///
    /// Defaults to the backend's parser. A `collection_name` of `None` in the
    /// result hands the request to pass-through.
    fn parse_request_url(&self, url: &str, utils: &dyn RequestInfoUtilities) -> ParsedRequestUrl {
        utils.parse_request_url(url)
    }
}
