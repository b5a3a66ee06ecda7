//! Remote API Clients
//!
//! Thin wrappers over the two public REST services: city-name autocomplete
//! and current weather. Each client owns its endpoint, credential and HTTP
//! handle; payload normalization happens here so components only ever see
//! display-ready data.

mod geo;
mod weather;

pub use geo::GeoSuggestionClient;
pub use weather::WeatherClient;

/// Cap on remote body text echoed into error messages
fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        let cut: String = body.chars().take(MAX).collect();
        format!("{cut}...")
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::truncate_body;

    #[test]
    fn short_bodies_pass_through() {
        assert_eq!(truncate_body("not found"), "not found");
    }

    #[test]
    fn long_bodies_are_truncated() {
        let body = "x".repeat(500);
        let truncated = truncate_body(&body);
        assert_eq!(truncated.len(), 203);
        assert!(truncated.ends_with("..."));
    }
}
