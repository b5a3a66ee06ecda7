//! City Autocomplete Client
//!
//! Wraps the GeoDB Cities prefix-search endpoint.

use serde::Deserialize;

use crate::config::AppConfig;
use crate::error::SuggestionFetchError;

use super::truncate_body;

/// Suggestion cap requested from the remote service
const SUGGESTION_LIMIT: u32 = 10;

#[derive(Debug, Clone)]
pub struct GeoSuggestionClient {
    http: reqwest::Client,
    base_url: String,
    host: String,
    api_key: String,
}

impl GeoSuggestionClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            host: rapidapi_host(&config.geo_base_url).to_string(),
            base_url: config.geo_base_url.clone(),
            api_key: config.geo_api_key.clone(),
        }
    }

    /// Fetch up to [`SUGGESTION_LIMIT`] city names starting with `prefix`,
    /// in the relevance order the service returns them.
    ///
    /// An empty or whitespace-only prefix yields an empty list without
    /// touching the network.
    pub async fn suggest(&self, prefix: &str) -> Result<Vec<String>, SuggestionFetchError> {
        let Some(prefix) = normalized_prefix(prefix) else {
            return Ok(Vec::new());
        };

        let url = format!("{}/v1/geo/cities", self.base_url);
        let limit = SUGGESTION_LIMIT.to_string();

        let res = self
            .http
            .get(&url)
            .query(&[("namePrefix", prefix), ("limit", limit.as_str())])
            .header("X-RapidAPI-Key", self.api_key.as_str())
            .header("X-RapidAPI-Host", self.host.as_str())
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(SuggestionFetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: GeoCitiesResponse = serde_json::from_str(&body)?;
        Ok(parsed.data.into_iter().map(|city| city.name).collect())
    }
}

/// `None` when the prefix is empty after trimming, which short-circuits the
/// lookup before a request is built.
fn normalized_prefix(prefix: &str) -> Option<&str> {
    let trimmed = prefix.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Host portion of the configured base URL, sent as `X-RapidAPI-Host`.
/// RapidAPI rejects requests that carry only the key header.
fn rapidapi_host(base_url: &str) -> &str {
    let host = base_url
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    host.split('/').next().unwrap_or(host)
}

#[derive(Debug, Deserialize)]
struct GeoCity {
    name: String,
}

#[derive(Debug, Deserialize)]
struct GeoCitiesResponse {
    #[serde(default)]
    data: Vec<GeoCity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_prefix_short_circuits() {
        assert_eq!(normalized_prefix(""), None);
        assert_eq!(normalized_prefix("   "), None);
        assert_eq!(normalized_prefix(" Lon "), Some("Lon"));
    }

    #[test]
    fn city_names_keep_remote_order() {
        let body = r#"{
            "data": [
                {"name": "London", "countryCode": "GB"},
                {"name": "Londrina", "countryCode": "BR"},
                {"name": "Long Beach", "countryCode": "US"}
            ]
        }"#;
        let parsed: GeoCitiesResponse = serde_json::from_str(body).unwrap();
        let names: Vec<String> = parsed.data.into_iter().map(|c| c.name).collect();
        assert_eq!(names, ["London", "Londrina", "Long Beach"]);
    }

    #[test]
    fn host_header_derives_from_base_url() {
        assert_eq!(
            rapidapi_host("https://wft-geo-db.p.rapidapi.com"),
            "wft-geo-db.p.rapidapi.com"
        );
        assert_eq!(
            rapidapi_host("https://wft-geo-db.p.rapidapi.com/v1"),
            "wft-geo-db.p.rapidapi.com"
        );
        assert_eq!(rapidapi_host("http://localhost:8080/geo"), "localhost:8080");
    }

    #[test]
    fn missing_data_array_is_empty() {
        let parsed: GeoCitiesResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.data.is_empty());
    }
}
