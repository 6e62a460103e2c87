//! Configuration loading and management

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Behaviour switches for the in-memory backend
///
/// Every field has a default, so a YAML file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Fixed api base (e.g. `api/`); when unset the first path segment is the base
    pub api_base: Option<String>,

    /// Host the mock answers for; URLs for other hosts keep their origin in `resource_url`
    pub host: Option<String>,

    /// Path prefix stripped before parsing (e.g. `/app`)
    pub root_path: Option<String>,

    /// Query filters match case-sensitively
    pub case_sensitive_search: bool,

    /// Wrap successful bodies as `{ "data": ... }`
    pub data_encapsulation: bool,

    /// Simulated latency in milliseconds
    pub delay: u64,

    /// DELETE of a missing record answers 404 instead of 204
    pub delete404: bool,

    /// Requests for unknown collections go to the pass-through router
    pub passthru_unknown_url: bool,

    /// POST that updates an existing record answers 204 instead of 200
    pub post204: bool,

    /// POST onto an existing id answers 409
    pub post409: bool,

    /// PUT that updates an existing record answers 204 instead of 200
    pub put204: bool,

    /// PUT of a missing record answers 404 instead of creating it
    pub put404: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            host: None,
            root_path: None,
            case_sensitive_search: false,
            data_encapsulation: false,
            delay: 0,
            delete404: false,
            passthru_unknown_url: false,
            post204: true,
            post409: false,
            put204: true,
            put404: false,
        }
    }
}

impl BackendConfig {
    /// Shallow-merge the keys of a JSON object into this config
    ///
    /// Keys that are not config fields are ignored. Fails when a known key has
    /// a value of the wrong type, leaving `self` untouched.
    pub fn merge_json(&mut self, patch: &serde_json::Value) -> Result<()> {
        let Some(patch) = patch.as_object() else {
            return Ok(());
        };

        let mut current = serde_json::to_value(&*self)?;
        if let Some(fields) = current.as_object_mut() {
            for (key, value) in patch {
                if fields.contains_key(key) {
                    fields.insert(key.clone(), value.clone());
                }
            }
        }

        *self = serde_json::from_value(current)?;
        Ok(())
    }
}

/// Complete configuration of the mock server binary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind: String,

    /// Backend behaviour
    pub backend: BackendConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
            backend: BackendConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}
