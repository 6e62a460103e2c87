//! Data service for the customers/orders demo

use crate::core::naming::map_collection_name;
use crate::core::{
    Collection, InMemoryDbService, ParsedRequestUrl, RequestInfo, RequestInfoUtilities, Store,
};
use crate::storage::seed::seed_store;
use serde_json::Value;

/// Seeds the demo database and decides routing and id allocation
///
/// `max_id` is one counter for every collection, so generated ids never
/// repeat within a process even across collections. While `active` is false
/// every request is handed to pass-through.
#[derive(Debug, Clone)]
pub struct MockDataStore {
    active: bool,
    max_id: i64,
}

impl MockDataStore {
    /// Create an active store with the id counter at 0
    pub fn new() -> Self {
        Self {
            active: true,
            max_id: 0,
        }
    }

    /// True if the mock is intercepting requests
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Last id handed out (0 before the first)
    pub fn max_id(&self) -> i64 {
        self.max_id
    }
}

impl Default for MockDataStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDbService for MockDataStore {
    /// Reseed from the fixture data
    ///
    /// With a request, `{"clear": true}` empties every collection after the
    /// reseed and the truthiness of `active` switches interception on or off.
    fn create_db(&mut self, request: Option<&RequestInfo>) -> Store {
        let mut db = seed_store();

        if let Some(request) = request {
            let body = request.json_body();
            let flag = |name: &str| body.and_then(|b| b.get(name));

            if flag("clear").and_then(Value::as_bool) == Some(true) {
                db.clear_all();
            }
            self.active = flag("active").is_some_and(is_truthy);

            tracing::debug!(
                active = self.active,
                records = db.record_count(),
                "Mock database reset"
            );
        }

        db
    }

    fn gen_id(&mut self, collection: &Collection, collection_name: &str) -> Option<i64> {
        let Some(next) = collection.max_id().max(self.max_id).checked_add(1) else {
            tracing::warn!(collection = collection_name, "Id counter exhausted");
            return None;
        };
        self.max_id = next;
        tracing::debug!(collection = collection_name, id = next, "Generated id");
        Some(next)
    }

    fn parse_request_url(&self, url: &str, utils: &dyn RequestInfoUtilities) -> ParsedRequestUrl {
        let mut parsed = utils.parse_request_url(url);
        parsed.collection_name = if self.active {
            parsed.collection_name.as_deref().map(map_collection_name)
        } else {
            None
        };
        parsed
    }
}

/// JSON truthiness: `false`, `null`, `0` and `""` are false
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
