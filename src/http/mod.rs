//! HTTP utility functions
//!
//! Query-string helpers, cookie generation, and thin request wrappers over
//! a shared [`reqwest::Client`]. The wrappers do exactly one attempt; there
//! is no retry or backoff logic here.

use std::collections::HashMap;
use std::sync::LazyLock;
use std::time::Duration;

use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Result, UtilsError};

pub mod download;

pub use download::download;

/// Shared HTTP client. Connection pooling makes one client cheaper than a
/// client per call.
static HTTP_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .user_agent(concat!("zaka-utils/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// A completed HTTP response: the raw bytes plus the JSON parse of them,
/// when the body is JSON at all.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Parsed JSON body, `None` when the body is not valid JSON.
    pub json: Option<Value>,
    /// Raw response bytes.
    pub bytes: Vec<u8>,
}

/// Extracts the query parameters of a URL as a key/value map.
///
/// Parsing goes through [`reqwest::Url`], so percent-encoded values come
/// back decoded. Values always stay strings, numeric-looking or not.
///
/// # Example
///
/// ```rust
/// use zaka_utils::http::parse_query_params;
///
/// let params = parse_query_params("https://example.com?name=John&age=30").unwrap();
/// assert_eq!(params.get("name").map(String::as_str), Some("John"));
/// assert_eq!(params.get("age").map(String::as_str), Some("30"));
/// ```
pub fn parse_query_params(url: &str) -> Result<HashMap<String, String>> {
    let parsed = Url::parse(url).map_err(|e| UtilsError::InvalidUrl(format!("{url}: {e}")))?;
    Ok(parsed
        .query_pairs()
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect())
}

/// Builds a `?k=v&...` query string from key/value pairs.
///
/// Values are written verbatim, with no percent-encoding. This is
/// asymmetric with [`parse_query_params`] (which decodes): callers that
/// need encoded values must encode them first.
///
/// # Example
///
/// ```rust
/// use zaka_utils::http::build_query_params;
///
/// assert_eq!(
///     build_query_params(&[("name", "John"), ("age", "30")]),
///     "?name=John&age=30"
/// );
/// ```
pub fn build_query_params(params: &[(&str, &str)]) -> String {
    let pairs: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect();
    format!("?{}", pairs.join("&"))
}

/// Builds a `Set-Cookie`-style string expiring `days` from now.
///
/// The expiry is an RFC-1123 UTC timestamp. Name and value are written
/// verbatim; callers using names or values with `;` or `=` must encode
/// them themselves.
///
/// # Example
///
/// ```rust
/// use zaka_utils::http::gen_cookie;
///
/// let cookie = gen_cookie("user", "John", 365);
/// assert!(cookie.starts_with("user=John;expires="));
/// assert!(cookie.ends_with(";path=/"));
/// ```
pub fn gen_cookie(name: &str, value: &str, days: i64) -> String {
    let expires = Utc::now() + chrono::Duration::days(days);
    format!(
        "{name}={value};expires={};path=/",
        expires.format("%a, %d %b %Y %H:%M:%S GMT")
    )
}

fn header_map(headers: &HashMap<String, String>) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| UtilsError::custom(format!("Invalid header name: {name}")))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|_| UtilsError::custom(format!("Invalid value for header {name}")))?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

/// Creates and sends an HTTP request, returning everything a caller could
/// need from the response.
///
/// The body, when given, is sent as JSON. A non-success status becomes
/// [`UtilsError::RequestFailed`]; a success response yields the raw bytes
/// plus their JSON parse when the body is JSON.
///
/// # Arguments
///
/// * `method` - HTTP method
/// * `url` - Target URL
/// * `body` - Optional JSON body
/// * `headers` - Headers to send with the request
pub async fn request(
    method: Method,
    url: &str,
    body: Option<&Value>,
    headers: &HashMap<String, String>,
) -> Result<HttpResponse> {
    debug!(%method, url, "dispatching HTTP request");
    let mut builder = HTTP_CLIENT
        .request(method, url)
        .headers(header_map(headers)?);
    if let Some(body) = body {
        builder = builder.json(body);
    }

    let response = builder.send().await?;
    let status = response.status();
    if !status.is_success() {
        warn!(status = status.as_u16(), url, "request failed");
        return Err(UtilsError::RequestFailed {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
        });
    }

    let bytes = response.bytes().await?.to_vec();
    let json = serde_json::from_slice(&bytes).ok();
    Ok(HttpResponse { json, bytes })
}

/// GETs a URL and parses the JSON response, bounded by a timeout.
///
/// Races the fetch-and-parse against `tokio::time::timeout`; elapsing
/// yields [`UtilsError::Timeout`]. One attempt, no retry. The HTTP status
/// is not checked: the JSON parse of the body is the contract, whatever
/// the status line said.
pub async fn timeout_request(
    url: &str,
    headers: &HashMap<String, String>,
    timeout_ms: u64,
) -> Result<Value> {
    let fetch = async {
        let response = HTTP_CLIENT
            .get(url)
            .headers(header_map(headers)?)
            .send()
            .await?;
        Ok::<Value, UtilsError>(response.json().await?)
    };

    match tokio::time::timeout(Duration::from_millis(timeout_ms), fetch).await {
        Ok(result) => result,
        Err(_) => {
            warn!(url, timeout_ms, "request timed out");
            Err(UtilsError::Timeout {
                url: url.to_string(),
                timeout_ms,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_params() {
        let params = parse_query_params("https://example.com?name=John&age=30")
            .unwrap_or_default();
        assert_eq!(params.get("name").map(String::as_str), Some("John"));
        assert_eq!(params.get("age").map(String::as_str), Some("30"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_parse_query_params_decodes() {
        let params =
            parse_query_params("https://example.com?q=two%20words").unwrap_or_default();
        assert_eq!(params.get("q").map(String::as_str), Some("two words"));
    }

    #[test]
    fn test_parse_query_params_empty_and_invalid() {
        assert!(parse_query_params("https://example.com")
            .unwrap_or_default()
            .is_empty());
        assert!(matches!(
            parse_query_params("not a url"),
            Err(UtilsError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_build_query_params() {
        assert_eq!(
            build_query_params(&[("name", "John"), ("age", "30")]),
            "?name=John&age=30"
        );
        assert_eq!(build_query_params(&[]), "?");
        // values go out verbatim
        assert_eq!(build_query_params(&[("q", "two words")]), "?q=two words");
    }

    #[test]
    fn test_gen_cookie() {
        let cookie = gen_cookie("user", "John", 365);
        assert!(cookie.starts_with("user=John;expires="));
        assert!(cookie.ends_with(";path=/"));
        assert!(cookie.contains("GMT"));
    }

    #[test]
    fn test_header_map_rejects_bad_names() {
        let mut headers = HashMap::new();
        headers.insert("not a header\n".to_string(), "x".to_string());
        assert!(header_map(&headers).is_err());

        let mut headers = HashMap::new();
        headers.insert("X-Fine".to_string(), "yes".to_string());
        assert!(header_map(&headers).is_ok());
    }

    #[tokio::test]
    async fn test_request_rejects_bad_headers_before_sending() {
        let mut headers = HashMap::new();
        headers.insert("bad header".to_string(), "x".to_string());
        let result = request(Method::GET, "https://example.com", None, &headers).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_request_invalid_url_is_network_error() {
        let result = request(Method::GET, "not-a-url", None, &HashMap::new()).await;
        match result {
            Err(err) => assert!(err.is_network_error() || matches!(err, UtilsError::Custom(_))),
            Ok(_) => panic!("relative URL must not resolve"),
        }
    }
}
