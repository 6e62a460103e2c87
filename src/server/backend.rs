//! In-memory backend for transport-agnostic request handling
//!
//! [`InMemoryBackend`] owns the live [`Store`] and the data service that
//! produced it. It answers a request described by method, URL and JSON body
//! with a [`BackendResponse`] and never touches HTTP types beyond status
//! codes, so the REST exposure stays a thin adapter.
//!
//! Handling order:
//! 1. `commands/...` URLs run backend commands (`resetDb`, `config`).
//! 2. The data service parses the URL. Unknown or suppressed collections go
//!    to pass-through when `passthru_unknown_url` is set, else 404.
//! 3. The verb runs against the collection.

use crate::config::BackendConfig;
use crate::core::{ApiError, Collection, InMemoryDbService, QueryMap, RequestInfo, Store};
use crate::server::url_parser::{COMMANDS_BASE, DefaultUrlParser};
use axum::http::{Method, StatusCode};
use regex::{Regex, RegexBuilder};
use serde_json::{Map, Value, json};
use std::sync::{Mutex, MutexGuard, RwLock};

/// What the backend decided to do with a request
#[derive(Debug, Clone, PartialEq)]
pub enum BackendResponse {
    /// The mock answers the request itself
    Mock(MockResponse),
    /// The request is not for the mock and should be forwarded
    PassThrough,
}

/// A response produced by the mock
#[derive(Debug, Clone, PartialEq)]
pub struct MockResponse {
    pub status: StatusCode,
    pub body: Option<Value>,
    /// `Location` header for created records
    pub location: Option<String>,
}

impl MockResponse {
    pub fn ok(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body: Some(body),
            location: None,
        }
    }

    pub fn created(body: Value, location: Option<String>) -> Self {
        Self {
            status: StatusCode::CREATED,
            body: Some(body),
            location,
        }
    }

    pub fn no_content() -> Self {
        Self {
            status: StatusCode::NO_CONTENT,
            body: None,
            location: None,
        }
    }

    fn encapsulated(mut self, wrap: bool) -> Self {
        if wrap {
            self.body = self.body.map(|data| json!({ "data": data }));
        }
        self
    }
}

struct BackendState {
    service: Box<dyn InMemoryDbService>,
    db: Store,
}

/// The in-memory web API
///
/// Requests are serialized through a single lock around the data service and
/// the store; the lock is never held across an await.
pub struct InMemoryBackend {
    config: RwLock<BackendConfig>,
    state: Mutex<BackendState>,
}

impl InMemoryBackend {
    /// Create a backend and build its initial database
    pub fn new(config: BackendConfig, service: impl InMemoryDbService + 'static) -> Self {
        Self::from_boxed(config, Box::new(service))
    }

    /// Create a backend from an already boxed data service
    pub fn from_boxed(config: BackendConfig, mut service: Box<dyn InMemoryDbService>) -> Self {
        let db = service.create_db(None);
        tracing::debug!(collections = ?db.names(), "In-memory database created");

        Self {
            config: RwLock::new(config),
            state: Mutex::new(BackendState { service, db }),
        }
    }

    /// Current configuration
    pub fn config(&self) -> Result<BackendConfig, ApiError> {
        self.config
            .read()
            .map(|config| config.clone())
            .map_err(|e| ApiError::Internal(format!("Failed to acquire config lock: {}", e)))
    }

    /// Copy of the live database
    pub fn snapshot(&self) -> Store {
        self.lock_state().db.clone()
    }

    /// Handle one request
    pub fn handle(
        &self,
        method: Method,
        url: &str,
        body: Option<Value>,
    ) -> Result<BackendResponse, ApiError> {
        let config = self.config()?;
        let parser = DefaultUrlParser::new(config.clone());

        let default_parse = parser.parse(url);
        if default_parse.api_base == COMMANDS_BASE {
            let request = RequestInfo::new(method, url, default_parse, body);
            return self.command(request, &config).map(BackendResponse::Mock);
        }

        let mut state = self.lock_state();
        let BackendState { service, db } = &mut *state;

        let parsed = service.parse_request_url(url, &parser);
        let request = RequestInfo::new(method, url, parsed, body);

        let Some(name) = request
            .collection_name
            .clone()
            .filter(|name| db.contains(name))
        else {
            if config.passthru_unknown_url {
                tracing::debug!(url, "Passing request through");
                return Ok(BackendResponse::PassThrough);
            }
            return Err(ApiError::CollectionNotFound {
                collection: request
                    .collection_name
                    .unwrap_or_else(|| "undefined".to_string()),
            });
        };

        let collection = db
            .get_mut(&name)
            .ok_or_else(|| ApiError::CollectionNotFound {
                collection: name.clone(),
            })?;

        tracing::debug!(
            method = %request.method,
            collection = %name,
            id = ?request.id,
            "Mock request"
        );

        let response = match request.method {
            Method::GET => get(collection, &name, &request, &config),
            Method::POST => post(service.as_mut(), collection, &name, &request, &config),
            Method::PUT => put(collection, &name, &request, &config),
            Method::DELETE => delete(collection, &name, &request, &config),
            _ => Err(ApiError::MethodNotAllowed {
                method: request.method.to_string(),
            }),
        }?;

        Ok(BackendResponse::Mock(response.encapsulated(config.data_encapsulation)))
    }

    fn command(
        &self,
        request: RequestInfo,
        config: &BackendConfig,
    ) -> Result<MockResponse, ApiError> {
        let command = request
            .collection_name
            .as_deref()
            .unwrap_or_default()
            .to_lowercase();

        match command.as_str() {
            "resetdb" => {
                let mut state = self.lock_state();
                let db = state.service.create_db(Some(&request));
                tracing::info!(records = db.record_count(), "Database reset");
                state.db = db;
                Ok(MockResponse::no_content())
            }
            "config" => match request.method {
                Method::GET => Ok(MockResponse::ok(
                    serde_json::to_value(config).map_err(|e| ApiError::Internal(e.to_string()))?,
                )),
                Method::POST | Method::PUT => {
                    let patch = request.body.unwrap_or(Value::Null);
                    let mut current = self.config.write().map_err(|e| {
                        ApiError::Internal(format!("Failed to acquire config lock: {}", e))
                    })?;
                    current
                        .merge_json(&patch)
                        .map_err(|e| ApiError::InvalidBody {
                            message: e.to_string(),
                        })?;
                    tracing::info!(config = ?*current, "Backend config updated");
                    Ok(MockResponse::no_content())
                }
                _ => Err(ApiError::MethodNotAllowed {
                    method: request.method.to_string(),
                }),
            },
            _ => Err(ApiError::UnknownCommand {
                command: request.collection_name.unwrap_or_default(),
            }),
        }
    }

    /// Lock the store, recovering it if a data service hook panicked
    fn lock_state(&self) -> MutexGuard<'_, BackendState> {
        self.state.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("Store lock poisoned by a panicking request; recovering");
            self.state.clear_poison();
            poisoned.into_inner()
        })
    }
}

fn get(
    collection: &Collection,
    name: &str,
    request: &RequestInfo,
    config: &BackendConfig,
) -> Result<MockResponse, ApiError> {
    match &request.id {
        Some(raw) => {
            let found = match parse_id(raw) {
                Some(id) => collection.find(id)?,
                None => None,
            };
            found.map(MockResponse::ok).ok_or_else(|| ApiError::RecordNotFound {
                collection: name.to_string(),
                id: raw.clone(),
            })
        }
        None => {
            let items = filter_by_query(
                collection.to_values()?,
                &request.query,
                config.case_sensitive_search,
            );
            Ok(MockResponse::ok(Value::Array(items)))
        }
    }
}

fn post(
    service: &mut dyn InMemoryDbService,
    collection: &mut Collection,
    name: &str,
    request: &RequestInfo,
    config: &BackendConfig,
) -> Result<MockResponse, ApiError> {
    let mut item = body_object(request)?;

    // Body id, else URL id, else a generated one
    let id = match body_id(&item)? {
        Some(id) => id,
        None => {
            let id = match request.id.as_deref() {
                Some(raw) => parse_id(raw).ok_or_else(|| ApiError::IdMismatch {
                    collection: name.to_string(),
                })?,
                None => {
                    service
                        .gen_id(collection, name)
                        .ok_or_else(|| ApiError::IdsExhausted {
                            collection: name.to_string(),
                        })?
                }
            };
            item.insert("id".to_string(), Value::from(id));
            id
        }
    };
    check_url_id(request, id, name)?;

    match collection.position(id) {
        None => {
            let stored = collection.push(Value::Object(item))?;
            let location = format!("{}{}", request.resource_url, id);
            Ok(MockResponse::created(stored, Some(location)))
        }
        Some(_) if config.post409 => Err(ApiError::AlreadyExists {
            collection: name.to_string(),
            id,
        }),
        Some(index) => {
            let stored = collection.replace(index, Value::Object(item))?;
            Ok(if config.post204 {
                MockResponse::no_content()
            } else {
                MockResponse::ok(stored)
            })
        }
    }
}

fn put(
    collection: &mut Collection,
    name: &str,
    request: &RequestInfo,
    config: &BackendConfig,
) -> Result<MockResponse, ApiError> {
    let item = body_object(request)?;
    let Some(id) = body_id(&item)? else {
        return Err(ApiError::MissingId {
            collection: name.to_string(),
        });
    };
    check_url_id(request, id, name)?;

    match collection.position(id) {
        Some(index) => {
            let stored = collection.replace(index, Value::Object(item))?;
            Ok(if config.put204 {
                MockResponse::no_content()
            } else {
                MockResponse::ok(stored)
            })
        }
        None if config.put404 => Err(ApiError::RecordNotFound {
            collection: name.to_string(),
            id: id.to_string(),
        }),
        None => {
            let stored = collection.push(Value::Object(item))?;
            Ok(MockResponse::created(stored, None))
        }
    }
}

fn delete(
    collection: &mut Collection,
    name: &str,
    request: &RequestInfo,
    config: &BackendConfig,
) -> Result<MockResponse, ApiError> {
    let Some(raw) = &request.id else {
        return Err(ApiError::MissingId {
            collection: name.to_string(),
        });
    };

    let removed = parse_id(raw).is_some_and(|id| collection.remove(id));
    if removed || !config.delete404 {
        Ok(MockResponse::no_content())
    } else {
        Err(ApiError::RecordNotFound {
            collection: name.to_string(),
            id: raw.clone(),
        })
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

fn body_object(request: &RequestInfo) -> Result<Map<String, Value>, ApiError> {
    request
        .json_body()
        .cloned()
        .ok_or_else(|| ApiError::InvalidBody {
            message: "expected a JSON object".to_string(),
        })
}

/// The body's id; `None` when absent or null
fn body_id(item: &Map<String, Value>) -> Result<Option<i64>, ApiError> {
    match item.get("id") {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_i64()
            .map(Some)
            .ok_or_else(|| ApiError::InvalidBody {
                message: format!("id must be an integer, got {}", value),
            }),
    }
}

fn check_url_id(request: &RequestInfo, id: i64, name: &str) -> Result<(), ApiError> {
    match request.id.as_deref() {
        Some(raw) if parse_id(raw) != Some(id) => Err(ApiError::IdMismatch {
            collection: name.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Keep the records whose fields match every query condition
///
/// Each condition is `field=pattern`; the pattern is a regex, or a literal
/// when it does not compile.
fn filter_by_query(items: Vec<Value>, query: &QueryMap, case_sensitive: bool) -> Vec<Value> {
    if query.is_empty() {
        return items;
    }

    let conditions: Vec<(&str, Option<Regex>)> = query
        .iter()
        .filter_map(|(field, values)| {
            values
                .first()
                .map(|pattern| (field.as_str(), compile_pattern(pattern, case_sensitive)))
        })
        .collect();

    items
        .into_iter()
        .filter(|item| {
            conditions.iter().all(|(field, pattern)| {
                match (item.get(*field), pattern) {
                    (Some(value), Some(pattern)) => pattern.is_match(&field_text(value)),
                    _ => false,
                }
            })
        })
        .collect()
}

fn compile_pattern(pattern: &str, case_sensitive: bool) -> Option<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(!case_sensitive)
        .build()
        .or_else(|_| {
            RegexBuilder::new(&regex::escape(pattern))
                .case_insensitive(!case_sensitive)
                .build()
        })
        .ok()
}

fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MockDataStore;

    fn backend() -> InMemoryBackend {
        InMemoryBackend::new(BackendConfig::default(), MockDataStore::new())
    }

    fn mock(response: BackendResponse) -> MockResponse {
        match response {
            BackendResponse::Mock(response) => response,
            BackendResponse::PassThrough => panic!("expected a mock response"),
        }
    }

    #[test]
    fn test_get_list() {
        let response = mock(backend().handle(Method::GET, "/api/customers", None).unwrap());

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body.unwrap().as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_get_by_id_through_singular_name() {
        let response = mock(backend().handle(Method::GET, "/api/customer/2", None).unwrap());
        assert_eq!(response.body.unwrap()["name"], "Michelle Thompson");
    }

    #[test]
    fn test_get_missing_record() {
        let err = backend()
            .handle(Method::GET, "/api/customers/99", None)
            .unwrap_err();
        assert!(matches!(err, ApiError::RecordNotFound { .. }));

        let err = backend()
            .handle(Method::GET, "/api/customers/abc", None)
            .unwrap_err();
        assert!(matches!(err, ApiError::RecordNotFound { .. }));
    }

    #[test]
    fn test_unknown_collection() {
        let err = backend().handle(Method::GET, "/api/widgets", None).unwrap_err();
        assert!(matches!(
            err,
            ApiError::CollectionNotFound { collection } if collection == "widgets"
        ));
    }

    #[test]
    fn test_unknown_collection_passes_through_when_configured() {
        let config = BackendConfig {
            passthru_unknown_url: true,
            ..Default::default()
        };
        let backend = InMemoryBackend::new(config, MockDataStore::new());

        let response = backend.handle(Method::GET, "/api/widgets", None).unwrap();
        assert_eq!(response, BackendResponse::PassThrough);
    }

    #[test]
    fn test_query_filter_is_case_insensitive_regex() {
        let backend = backend();

        let response = mock(
            backend
                .handle(Method::GET, "/api/customers?name=^t", None)
                .unwrap(),
        );
        let names: Vec<String> = response
            .body
            .unwrap()
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["Ted James", "Tina Adams"]);
    }

    #[test]
    fn test_query_filter_case_sensitive() {
        let config = BackendConfig {
            case_sensitive_search: true,
            ..Default::default()
        };
        let backend = InMemoryBackend::new(config, MockDataStore::new());

        let response = mock(
            backend
                .handle(Method::GET, "/api/customers?city=phoenix", None)
                .unwrap(),
        );
        assert!(response.body.unwrap().as_array().unwrap().is_empty());
    }

    #[test]
    fn test_query_filter_matches_numbers_and_literal_fallback() {
        let backend = backend();

        let response = mock(
            backend
                .handle(Method::GET, "/api/customers?orderTotal=^89", None)
                .unwrap(),
        );
        assert_eq!(response.body.unwrap().as_array().unwrap().len(), 1);

        let response = mock(
            backend
                .handle(Method::GET, "/api/customers?name=(", None)
                .unwrap(),
        );
        assert!(response.body.unwrap().as_array().unwrap().is_empty());
    }

    #[test]
    fn test_post_generates_id_from_shared_counter() {
        let backend = backend();

        let response = mock(
            backend
                .handle(
                    Method::POST,
                    "/api/customers",
                    Some(json!({"name": "New", "city": "Boston", "orderTotal": 1.5})),
                )
                .unwrap(),
        );
        assert_eq!(response.status, StatusCode::CREATED);
        assert_eq!(response.body.as_ref().unwrap()["id"], 5);
        assert_eq!(response.location.as_deref(), Some("api/customers/5"));

        // The counter is now past every customer id, so orders continue from 11
        let response = mock(
            backend
                .handle(Method::POST, "/api/orders", Some(json!({"customerId": 1})))
                .unwrap(),
        );
        assert_eq!(response.body.unwrap()["id"], 11);

        let response = mock(
            backend
                .handle(Method::POST, "/api/customers", Some(json!({"name": "Next"})))
                .unwrap(),
        );
        assert_eq!(response.body.unwrap()["id"], 12);
    }

    #[test]
    fn test_post_existing_id_updates() {
        let backend = backend();
        let response = mock(
            backend
                .handle(
                    Method::POST,
                    "/api/customers",
                    Some(json!({"id": 1, "name": "Ted J."})),
                )
                .unwrap(),
        );
        assert_eq!(response.status, StatusCode::NO_CONTENT);

        let db = backend.snapshot();
        assert_eq!(db.get("customers").unwrap().len(), 4);
        assert_eq!(
            db.get("customers").unwrap().find(1).unwrap().unwrap()["name"],
            "Ted J."
        );
    }

    #[test]
    fn test_post_existing_id_conflicts_with_post409() {
        let config = BackendConfig {
            post409: true,
            ..Default::default()
        };
        let backend = InMemoryBackend::new(config, MockDataStore::new());

        let err = backend
            .handle(Method::POST, "/api/customers", Some(json!({"id": 1})))
            .unwrap_err();
        assert!(matches!(err, ApiError::AlreadyExists { id: 1, .. }));
    }

    #[test]
    fn test_post_url_id_mismatch() {
        let err = backend()
            .handle(Method::POST, "/api/customers/3", Some(json!({"id": 4})))
            .unwrap_err();
        assert!(matches!(err, ApiError::IdMismatch { .. }));
    }

    #[test]
    fn test_post_takes_url_id_when_body_has_none() {
        let backend = backend();

        let response = mock(
            backend
                .handle(Method::POST, "/api/customers/9", Some(json!({"name": "x"})))
                .unwrap(),
        );
        assert_eq!(response.status, StatusCode::CREATED);
        assert_eq!(response.body.unwrap()["id"], 9);
        assert_eq!(response.location.as_deref(), Some("api/customers/9"));

        let response = mock(
            backend
                .handle(Method::POST, "/api/customers", Some(json!({"name": "y"})))
                .unwrap(),
        );
        assert_eq!(response.body.unwrap()["id"], 10);
    }

    #[test]
    fn test_post_bad_url_id_leaves_counter_alone() {
        let backend = backend();

        let err = backend
            .handle(Method::POST, "/api/customers/abc", Some(json!({"name": "x"})))
            .unwrap_err();
        assert!(matches!(err, ApiError::IdMismatch { .. }));

        let response = mock(
            backend
                .handle(Method::POST, "/api/customers", Some(json!({"name": "y"})))
                .unwrap(),
        );
        assert_eq!(response.body.unwrap()["id"], 5);
    }

    #[test]
    fn test_post_at_id_ceiling_keeps_serving() {
        let backend = backend();

        let response = mock(
            backend
                .handle(Method::POST, "/api/customers", Some(json!({"id": i64::MAX})))
                .unwrap(),
        );
        assert_eq!(response.status, StatusCode::CREATED);

        let err = backend
            .handle(Method::POST, "/api/customers", Some(json!({"name": "next"})))
            .unwrap_err();
        assert!(matches!(err, ApiError::IdsExhausted { .. }));

        let response = mock(backend.handle(Method::GET, "/api/customers", None).unwrap());
        assert_eq!(response.body.unwrap().as_array().unwrap().len(), 5);
    }

    struct PanickingIds;

    impl InMemoryDbService for PanickingIds {
        fn create_db(&mut self, _request: Option<&RequestInfo>) -> Store {
            crate::storage::seed_store()
        }

        fn gen_id(&mut self, _collection: &Collection, _collection_name: &str) -> Option<i64> {
            panic!("id source unavailable");
        }
    }

    #[test]
    fn test_store_recovers_after_panicking_hook() {
        let backend = InMemoryBackend::new(BackendConfig::default(), PanickingIds);

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            backend.handle(Method::POST, "/api/orders", Some(json!({"customerId": 1})))
        }));
        assert!(outcome.is_err());

        let response = mock(backend.handle(Method::GET, "/api/orders/1", None).unwrap());
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(backend.snapshot().record_count(), 14);
    }

    #[test]
    fn test_post_rejects_non_object_body() {
        let err = backend()
            .handle(Method::POST, "/api/customers", Some(json!([1, 2])))
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidBody { .. }));

        let err = backend()
            .handle(Method::POST, "/api/customers", Some(json!({"id": "x"})))
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidBody { .. }));
    }

    #[test]
    fn test_put_updates_and_creates() {
        let backend = backend();

        let response = mock(
            backend
                .handle(
                    Method::PUT,
                    "/api/customers/2",
                    Some(json!({"id": 2, "name": "M. Thompson"})),
                )
                .unwrap(),
        );
        assert_eq!(response.status, StatusCode::NO_CONTENT);

        let response = mock(
            backend
                .handle(Method::PUT, "/api/customers/40", Some(json!({"id": 40})))
                .unwrap(),
        );
        assert_eq!(response.status, StatusCode::CREATED);
        assert_eq!(backend.snapshot().get("customers").unwrap().len(), 5);
    }

    #[test]
    fn test_put_missing_id_and_put404() {
        let err = backend()
            .handle(Method::PUT, "/api/customers", Some(json!({"name": "x"})))
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingId { .. }));

        let config = BackendConfig {
            put404: true,
            put204: false,
            ..Default::default()
        };
        let backend = InMemoryBackend::new(config, MockDataStore::new());
        let err = backend
            .handle(Method::PUT, "/api/customers/40", Some(json!({"id": 40})))
            .unwrap_err();
        assert!(matches!(err, ApiError::RecordNotFound { .. }));

        let response = mock(
            backend
                .handle(Method::PUT, "/api/customers/1", Some(json!({"id": 1})))
                .unwrap(),
        );
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body.unwrap()["id"], 1);
    }

    #[test]
    fn test_delete() {
        let backend = backend();

        let response = mock(backend.handle(Method::DELETE, "/api/orders/3", None).unwrap());
        assert_eq!(response.status, StatusCode::NO_CONTENT);
        assert_eq!(backend.snapshot().get("orders").unwrap().len(), 9);

        // Missing records are not an error unless delete404 is set
        let response = mock(backend.handle(Method::DELETE, "/api/orders/3", None).unwrap());
        assert_eq!(response.status, StatusCode::NO_CONTENT);

        let err = backend.handle(Method::DELETE, "/api/orders", None).unwrap_err();
        assert!(matches!(err, ApiError::MissingId { .. }));
    }

    #[test]
    fn test_delete404() {
        let config = BackendConfig {
            delete404: true,
            ..Default::default()
        };
        let backend = InMemoryBackend::new(config, MockDataStore::new());
        let err = backend
            .handle(Method::DELETE, "/api/orders/77", None)
            .unwrap_err();
        assert!(matches!(err, ApiError::RecordNotFound { .. }));
    }

    #[test]
    fn test_unsupported_method() {
        let err = backend()
            .handle(Method::PATCH, "/api/customers/1", Some(json!({"id": 1})))
            .unwrap_err();
        assert!(matches!(err, ApiError::MethodNotAllowed { .. }));
    }

    #[test]
    fn test_reset_db_command_clears_and_deactivates() {
        let backend = backend();

        let response = mock(
            backend
                .handle(
                    Method::POST,
                    "/commands/resetDb",
                    Some(json!({"clear": true})),
                )
                .unwrap(),
        );
        assert_eq!(response.status, StatusCode::NO_CONTENT);
        assert_eq!(backend.snapshot().record_count(), 0);

        // active was absent from the body, so the mock no longer serves
        let err = backend.handle(Method::GET, "/api/customers", None).unwrap_err();
        assert!(matches!(
            err,
            ApiError::CollectionNotFound { collection } if collection == "undefined"
        ));

        backend
            .handle(
                Method::POST,
                "/commands/resetdb",
                Some(json!({"active": true})),
            )
            .unwrap();
        let response = mock(backend.handle(Method::GET, "/api/customers", None).unwrap());
        assert_eq!(response.body.unwrap().as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_config_command() {
        let backend = backend();

        let response = mock(backend.handle(Method::GET, "/commands/config", None).unwrap());
        assert_eq!(response.body.unwrap()["post204"], true);

        backend
            .handle(
                Method::POST,
                "/commands/config",
                Some(json!({"data_encapsulation": true})),
            )
            .unwrap();
        assert!(backend.config().unwrap().data_encapsulation);

        let response = mock(backend.handle(Method::GET, "/api/customers/1", None).unwrap());
        assert_eq!(response.body.unwrap()["data"]["name"], "Ted James");
    }

    #[test]
    fn test_unknown_command() {
        let err = backend()
            .handle(Method::POST, "/commands/explode", None)
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::UnknownCommand { command } if command == "explode"
        ));
    }
}
