//! Request descriptions exchanged between the backend and its data service

use axum::http::Method;
use serde_json::Value;
use std::collections::HashMap;

/// Query string parsed into `name -> values`
pub type QueryMap = HashMap<String, Vec<String>>;

/// Result of parsing a request URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRequestUrl {
    /// Api base with trailing slash (e.g. `api/`)
    pub api_base: String,
    /// Collection the request addresses; `None` means "not served by the mock"
    pub collection_name: Option<String>,
    /// Record id segment, unparsed
    pub id: Option<String>,
    /// Query parameters
    pub query: QueryMap,
    /// URL of the collection resource, used for `Location` headers
    pub resource_url: String,
}

/// Everything the backend knows about a request
#[derive(Debug, Clone, PartialEq)]
pub struct RequestInfo {
    pub method: Method,
    pub url: String,
    pub api_base: String,
    pub collection_name: Option<String>,
    pub id: Option<String>,
    pub query: QueryMap,
    pub resource_url: String,
    /// Request body, `None` when absent or not valid JSON
    pub body: Option<Value>,
}

impl RequestInfo {
    /// Combine a parsed URL with the method and body it arrived with
    pub fn new(method: Method, url: &str, parsed: ParsedRequestUrl, body: Option<Value>) -> Self {
        Self {
            method,
            url: url.to_string(),
            api_base: parsed.api_base,
            collection_name: parsed.collection_name,
            id: parsed.id,
            query: parsed.query,
            resource_url: parsed.resource_url,
            body,
        }
    }

    /// The body as a JSON object, if it is one
    pub fn json_body(&self) -> Option<&serde_json::Map<String, Value>> {
        self.body.as_ref().and_then(Value::as_object)
    }
}

/// Services the backend offers to a data service while parsing a request
pub trait RequestInfoUtilities {
    /// Parse a URL with the backend's default rules
    fn parse_request_url(&self, url: &str) -> ParsedRequestUrl;
}

/// Parse a query string (without the leading `?`) into a [`QueryMap`]
///
/// Names and values are percent-decoded and `+` stands for a space.
/// Malformed escapes are kept verbatim.
pub fn parse_query(query: &str) -> QueryMap {
    let mut map = QueryMap::new();
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        map.entry(decode(name)).or_default().push(decode(value));
    }
    map
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}
