//! Synchronous client for the **World Bank Indicators API (v2)**.
//!
//! Only the `country/{code}/indicator/{code}` endpoint is used. Each call issues exactly
//! one request for a single page of 60 rows (enough for the full annual
//! history of the indicators this crate reads) and returns a year-sorted
//! [`IndicatorSeries`].
//!
//! ### Notes
//! - No retries and no pagination: a failed call is simply unavailable.
//! - Every failure (transport, HTTP status, JSON decoding, envelope shape) is an
//!   `Err(FetchError)`. Callers treat any `Err` as "data unavailable"; the variants exist
//!   for diagnostics only.
//!
//! Typical usage:
//! ```no_run
//! # use wbi_econ::{Client, Indicator};
//! let client = Client::default();
//! match client.fetch_series("IN", Indicator::Gdp.code()) {
//!     Ok(series) => println!("{} years", series.len()),
//!     Err(e) => eprintln!("unavailable: {e}"),
//! }
//! ```

use crate::models::{Entry, IndicatorSeries, Meta};
use log::{debug, warn};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.worldbank.org/v2";
/// Fixed page size; one page covers the full annual history of both indicators.
pub const PER_PAGE: u32 = 60;

/// Why a fetch produced no data.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("request failed with HTTP {0}")]
    Status(StatusCode),
    #[error("decode json: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unexpected response shape: {0}")]
    Shape(&'static str),
    #[error("world bank api error: {0}")]
    Api(String),
    #[error("invalid year in response: {0:?}")]
    InvalidYear(String),
}

/// Outcome of one fetch: a series, or the unavailable signal.
pub type Fetched = Result<IndicatorSeries, FetchError>;

/// Client settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

// Allow -, _, . unescaped in codes (common for indicator ids)
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

fn enc(code: &str) -> String {
    percent_encoding::utf8_percent_encode(code.trim(), SAFE).to_string()
}

impl Client {
    pub fn new(config: ClientConfig) -> Self {
        let http = HttpClient::builder()
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("wbi_econ/", env!("CARGO_PKG_VERSION"))) // set user agent
            .build()
            .expect("reqwest client build");
        Self { config, http }
    }

    /// Request URL for one country/indicator pair.
    pub fn series_url(&self, country_code: &str, indicator_code: &str) -> String {
        format!(
            "{}/country/{}/indicator/{}?format=json&per_page={}",
            self.config.base_url.trim_end_matches('/'),
            enc(country_code),
            enc(indicator_code),
            PER_PAGE
        )
    }

    /// Fetch one indicator for one country.
    ///
    /// ### Arguments
    /// - `country_code`: ISO2 code from the country table (e.g., `"IN"`); not validated.
    /// - `indicator_code`: e.g., `"NY.GDP.MKTP.CD"`.
    ///
    /// ### Errors
    /// Any failure at all. See [`FetchError`].
    pub fn fetch_series(&self, country_code: &str, indicator_code: &str) -> Fetched {
        let url = self.series_url(country_code, indicator_code);
        let result = self.get_body(&url).and_then(|body| parse_envelope(&body));
        match &result {
            Ok(series) => debug!("GET {} -> {} observations", url, series.len()),
            Err(e) => warn!("GET {} unavailable: {}", url, e),
        }
        result
    }

    fn get_body(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {}", url);
        let resp = self.http.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        Ok(resp.text()?)
    }
}

/// Decode a response body and normalize it into an [`IndicatorSeries`].
///
/// The API returns `[Meta, [Entry, ...]]`, or an object with a `message` key in
/// position 0 on error. A `null` second element means "no rows" and yields an
/// empty series.
pub fn parse_envelope(body: &str) -> Fetched {
    let v: Value = serde_json::from_str(body)?;

    let arr = v
        .as_array()
        .ok_or(FetchError::Shape("not a top-level array"))?;
    let head = arr.first().ok_or(FetchError::Shape("empty array"))?;

    // If first element has "message", surface API error.
    if let Some(msg) = head.get("message") {
        return Err(FetchError::Api(msg.to_string()));
    }
    let records = arr
        .get(1)
        .ok_or(FetchError::Shape("missing record array"))?;

    if let Ok(meta) = serde_json::from_value::<Meta>(head.clone()) {
        debug!(
            "page {}/{}, per_page={}, total={}",
            meta.page, meta.pages, meta.per_page, meta.total
        );
    }

    let entries: Vec<Entry> = match records {
        Value::Null => Vec::new(),
        Value::Array(_) => serde_json::from_value(records.clone())?,
        _ => return Err(FetchError::Shape("record element is not an array")),
    };

    IndicatorSeries::from_entries(entries).map_err(FetchError::InvalidYear)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_uses_fixed_page_size_and_encodes_codes() {
        let c = Client::new(ClientConfig {
            base_url: "http://localhost:9/v2/".into(),
        });
        assert_eq!(
            c.series_url(" IN ", "NY.GDP.MKTP.CD"),
            "http://localhost:9/v2/country/IN/indicator/NY.GDP.MKTP.CD?format=json&per_page=60"
        );
        assert_eq!(
            c.series_url("A B", "X"),
            "http://localhost:9/v2/country/A%20B/indicator/X?format=json&per_page=60"
        );
    }

    #[test]
    fn api_message_is_an_error() {
        let body = r#"[{"message":[{"id":"120","key":"Invalid value","value":"The provided parameter value is not valid"}]}]"#;
        assert!(matches!(parse_envelope(body), Err(FetchError::Api(_))));
    }

    #[test]
    fn null_records_mean_empty_series() {
        let body = r#"[{"page":0,"pages":0,"per_page":"60","total":0}, null]"#;
        assert!(parse_envelope(body).unwrap().is_empty());
    }

    #[test]
    fn object_records_are_rejected() {
        let body = r#"[{"page":1,"pages":1,"per_page":60,"total":1}, {"date":"2020"}]"#;
        assert!(matches!(parse_envelope(body), Err(FetchError::Shape(_))));
    }
}
