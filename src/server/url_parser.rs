//! Default request URL parsing
//!
//! `[scheme://host][/root_path]/<api base>/<collection>[.ext]/<id>?<query>`
//!
//! When no api base is configured the first path segment is taken as the
//! base, so `/api/customers/1` and `/v2/customers/1` both address
//! `customers`. A leading `commands` segment always selects the command
//! namespace regardless of the configured base.

use crate::config::BackendConfig;
use crate::core::request::{ParsedRequestUrl, RequestInfoUtilities, parse_query};

/// Api base of the command namespace (`commands/resetDb`, `commands/config`)
pub const COMMANDS_BASE: &str = "commands/";

/// The backend's own URL parser
#[derive(Debug, Clone)]
pub struct DefaultUrlParser {
    config: BackendConfig,
}

impl DefaultUrlParser {
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }

    /// Parse a URL according to the configuration
    pub fn parse(&self, url: &str) -> ParsedRequestUrl {
        let location = Location::split(url);

        let foreign_host = match (&self.config.host, location.host) {
            (Some(expected), Some(actual)) => expected.as_str() != actual,
            _ => false,
        };

        let mut path = location.path;
        let mut url_root = String::new();
        if foreign_host {
            url_root = format!(
                "{}://{}/",
                location.scheme.unwrap_or("http"),
                location.host.unwrap_or_default()
            );
        } else if let Some(root) = self.config.root_path.as_deref() {
            path = strip_root(path, root);
        }

        let mut segments = path
            .trim_start_matches('/')
            .split('/')
            .map(|s| (!s.is_empty()).then(|| s.to_string()));

        let api_base = if is_commands(path) {
            segments.next();
            COMMANDS_BASE.to_string()
        } else {
            match self.config.api_base.as_deref().map(|b| b.trim().trim_matches('/')) {
                Some(base) => {
                    let skip = if base.is_empty() { 0 } else { base.split('/').count() };
                    for _ in 0..skip {
                        segments.next();
                    }
                    format!("{base}/")
                }
                None => format!("{}/", segments.next().flatten().unwrap_or_default()),
            }
        };

        let collection_name = segments
            .next()
            .flatten()
            .and_then(|name| name.split('.').next().map(str::to_string))
            .filter(|name| !name.is_empty());
        let id = segments.next().flatten();

        let resource_url = format!(
            "{url_root}{api_base}{}/",
            collection_name.as_deref().unwrap_or_default()
        );

        ParsedRequestUrl {
            api_base,
            collection_name,
            id,
            query: location.query.map(parse_query).unwrap_or_default(),
            resource_url,
        }
    }
}

impl RequestInfoUtilities for DefaultUrlParser {
    fn parse_request_url(&self, url: &str) -> ParsedRequestUrl {
        self.parse(url)
    }
}

/// Remove `root` from the front of `path` when it covers whole segments
fn strip_root<'a>(path: &'a str, root: &str) -> &'a str {
    let root = root.trim_matches('/');
    if root.is_empty() {
        return path;
    }
    match path.trim_start_matches('/').strip_prefix(root) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => path,
    }
}

/// True if the first segment of `path` is exactly `commands`
fn is_commands(path: &str) -> bool {
    path.trim_start_matches('/').split('/').next() == Some("commands")
}

/// A URL split into the parts the parser cares about
struct Location<'a> {
    scheme: Option<&'a str>,
    host: Option<&'a str>,
    path: &'a str,
    query: Option<&'a str>,
}

impl<'a> Location<'a> {
    fn split(url: &'a str) -> Self {
        let (rest, query) = match url.split_once('?') {
            Some((rest, query)) => (rest, Some(query)),
            None => (url, None),
        };
        let rest = rest.split('#').next().unwrap_or(rest);

        match rest.split_once("://") {
            Some((scheme, after)) => {
                let (host, path) = match after.find('/') {
                    Some(ix) => (&after[..ix], &after[ix..]),
                    None => (after, "/"),
                };
                Self {
                    scheme: Some(scheme),
                    host: Some(host),
                    path,
                    query,
                }
            }
            None => Self {
                scheme: None,
                host: None,
                path: rest,
                query,
            },
        }
    }
}
