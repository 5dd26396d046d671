//! Geocoding client for the GraphHopper geocoding API.
//!
//! The `Geocode` trait is the seam between the resolver and the network;
//! the live implementation uses `ureq` with a fixed 8-second timeout and
//! never retries on its own.

use super::types::{join_display, LocationError, Place};
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://graphhopper.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

/// One outbound geocoding request.
#[derive(Debug, Clone)]
pub struct GeocodeRequest {
    pub query: String,
    pub limit: usize,
    /// Optional "prefer results near this point" bias, (lat, lon).
    pub bias: Option<(f64, f64)>,
}

/// A raw hit from the geocoding API. Every field is optional; the upstream
/// payload is untyped JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeHit {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub point: Option<GeocodePoint>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodePoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeocodeHit {
    /// Convert a raw hit into a `Place`, joining the non-empty display-name
    /// components in venue, city, state, country order.
    pub fn to_place(&self) -> Place {
        Place {
            name: join_display(&[
                self.name.as_deref(),
                self.city.as_deref(),
                self.state.as_deref(),
                self.country.as_deref(),
            ]),
            lat: self.point.as_ref().map(|p| p.lat),
            lon: self.point.as_ref().map(|p| p.lng),
            city: self.city.clone(),
            district: self.county.clone(),
            state: self.state.clone(),
            country: self.country.clone(),
            is_fallback: false,
            kind: None,
        }
    }
}

/// The geocoding seam. Implemented by the live GraphHopper client and by
/// scripted stubs in tests.
pub trait Geocode {
    fn geocode(&self, req: &GeocodeRequest) -> Result<Vec<GeocodeHit>, LocationError>;
}

// ─── Live client ─────────────────────────────────────────────────

pub struct GraphHopperClient {
    base_url: String,
    api_key: String,
    agent: ureq::Agent,
}

impl GraphHopperClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            agent: ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build(),
        }
    }

    fn request_url(&self, req: &GeocodeRequest) -> String {
        let point_param = match req.bias {
            Some((lat, lon)) => format!("&point={},{}", lat, lon),
            None => String::new(),
        };
        format!(
            "{}/api/1/geocode?q={}&locale=en&limit={}&key={}{}",
            self.base_url,
            urlencod(&req.query),
            req.limit,
            urlencod(&self.api_key),
            point_param,
        )
    }
}

impl Geocode for GraphHopperClient {
    fn geocode(&self, req: &GeocodeRequest) -> Result<Vec<GeocodeHit>, LocationError> {
        let url = self.request_url(req);

        let response = self
            .agent
            .get(&url)
            .set("User-Agent", "SaarthiLocate/0.3 (ride-booking-backend)")
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => {
                    LocationError::Upstream(format!("geocoding service returned HTTP {}", code))
                }
                ureq::Error::Transport(t) => LocationError::Upstream(t.to_string()),
            })?;

        let payload: serde_json::Value = response
            .into_json()
            .map_err(|e| LocationError::MalformedResponse(e.to_string()))?;

        parse_hits(payload)
    }
}

/// Extract the hit array from an upstream payload. A payload without a
/// `hits` array is malformed, even if it parsed as JSON.
pub fn parse_hits(payload: serde_json::Value) -> Result<Vec<GeocodeHit>, LocationError> {
    let hits = payload
        .get("hits")
        .cloned()
        .ok_or_else(|| LocationError::MalformedResponse("missing 'hits' array".into()))?;
    serde_json::from_value(hits).map_err(|e| LocationError::MalformedResponse(e.to_string()))
}

// ─── URL encoding (minimal, no extra dep) ───────────────────────

/// Percent-encode one %XX escape per UTF-8 byte, so multi-byte scripts
/// (Devanagari, Gujarati) survive the trip to the geocoder.
fn urlencod(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'-' | b'_' | b'.' | b'~' => out.push(b as char),
            _ if b.is_ascii_alphanumeric() => out.push(b as char),
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_hits_ok() {
        let payload = json!({
            "hits": [
                {
                    "name": "Bhuj",
                    "city": "Bhuj",
                    "state": "Gujarat",
                    "country": "India",
                    "point": {"lat": 23.2419, "lng": 69.6669}
                },
                {"name": "Bhuj Airport"}
            ]
        });
        let hits = parse_hits(payload).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].country.as_deref(), Some("India"));
        assert_eq!(hits[1].point.as_ref().map(|p| p.lat), None);
    }

    #[test]
    fn test_parse_hits_missing_array() {
        let err = parse_hits(json!({"message": "bad key"})).unwrap_err();
        assert!(matches!(err, LocationError::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_hits_empty_array() {
        let hits = parse_hits(json!({"hits": []})).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_request_url_shape() {
        let client = GraphHopperClient::with_base_url("https://gh.example", "k3y");
        let url = client.request_url(&GeocodeRequest {
            query: "Bhuj, India".into(),
            limit: 8,
            bias: None,
        });
        assert_eq!(
            url,
            "https://gh.example/api/1/geocode?q=Bhuj%2C%20India&locale=en&limit=8&key=k3y"
        );
    }

    #[test]
    fn test_request_url_with_bias() {
        let client = GraphHopperClient::with_base_url("https://gh.example", "k3y");
        let url = client.request_url(&GeocodeRequest {
            query: "Bhuj".into(),
            limit: 8,
            bias: Some((22.2587, 71.1924)),
        });
        assert!(url.ends_with("&point=22.2587,71.1924"));
    }

    #[test]
    fn test_hit_to_place_joins_name() {
        let hit: GeocodeHit = serde_json::from_value(json!({
            "name": "Mandvi",
            "city": "Mandvi",
            "county": "Kachchh",
            "state": "Gujarat",
            "country": "India",
            "point": {"lat": 22.8331, "lng": 69.3551}
        }))
        .unwrap();
        let place = hit.to_place();
        assert_eq!(place.name, "Mandvi, Gujarat, India");
        assert_eq!(place.district.as_deref(), Some("Kachchh"));
        assert_eq!(place.lat, Some(22.8331));
        assert!(!place.is_fallback);
    }

    #[test]
    fn test_hit_to_place_degrades_missing_parts() {
        let hit: GeocodeHit = serde_json::from_value(json!({
            "name": "Somewhere",
            "country": "India"
        }))
        .unwrap();
        let place = hit.to_place();
        assert_eq!(place.name, "Somewhere, India");
        assert!(place.lat.is_none());
    }

    #[test]
    fn test_urlencod() {
        assert_eq!(urlencod("new delhi"), "new%20delhi");
        assert_eq!(urlencod("a&b=c"), "a%26b%3Dc");
        assert_eq!(urlencod("plain-text_1.0~"), "plain-text_1.0~");
    }

    #[test]
    fn test_urlencod_multibyte_scripts() {
        // One %XX escape per UTF-8 byte, not per codepoint.
        assert_eq!(
            urlencod("दिल्ली"),
            "%E0%A4%A6%E0%A4%BF%E0%A4%B2%E0%A5%8D%E0%A4%B2%E0%A5%80"
        );
        assert_eq!(urlencod("ભુજ"), "%E0%AA%AD%E0%AB%81%E0%AA%9C");
        // Every escape is exactly two hex digits.
        let encoded = urlencod("भुज airport");
        for (i, _) in encoded.match_indices('%') {
            assert!(encoded[i + 1..i + 3]
                .chars()
                .all(|c| c.is_ascii_hexdigit()));
        }
    }
}
