//! Location resolver — orchestrates the gazetteer, geocoder, and filters.
//!
//! Search flow:    gazetteer (airport rides) | local list (local rides)
//!                 → geocode "{q}, India" → country filter
//!                 → geocode q with center bias → country filter
//!                 → airport fallback on upstream failure
//! Validate flow:  gazetteer airport → geocode "{q}, India" → first
//!                 target-country hit → error

use super::filter;
use super::gazetteer;
use super::geocoder::{Geocode, GeocodeRequest, GraphHopperClient};
use super::types::{LocationError, Place, RideType, SearchOutcome};

/// Fixed qualifier appended to the first geocoding attempt.
const COUNTRY_QUALIFIER: &str = ", India";

/// Center bias for the second attempt: geographic center of Gujarat.
const CENTER_BIAS: (f64, f64) = (22.2587, 71.1924);

const SEARCH_LIMIT: usize = 8;

/// Validate asks for more candidates than it needs; only the first
/// target-country hit is used, but a deeper list improves the odds of
/// finding one.
const VALIDATE_LIMIT: usize = 10;

/// The location resolver. Stateless per request: the gazetteer tables are
/// compile-time constants and the geocoder client is read-only, so one
/// resolver is safely shared by any number of concurrent callers.
pub struct LocationResolver {
    geocoder: Box<dyn Geocode + Send + Sync>,
    offline: bool,
}

impl LocationResolver {
    /// Resolver backed by the live GraphHopper client.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_geocoder(Box::new(GraphHopperClient::new(api_key)))
    }

    /// Resolver with an injected geocoder (for testing).
    pub fn with_geocoder(geocoder: Box<dyn Geocode + Send + Sync>) -> Self {
        Self {
            geocoder,
            offline: false,
        }
    }

    /// Offline mode: skip all network calls. Searches degrade to the
    /// gazetteer exactly as if the geocoder were unreachable.
    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    // ─── Search ──────────────────────────────────────────────────

    /// Free-text search returning ranked candidate places. Always produces
    /// a success-shaped outcome; upstream failure degrades to fallback or
    /// empty content with a warning/error string.
    pub fn search(&self, query: &str, ride_type: RideType) -> SearchOutcome {
        let query = query.trim();
        if query.is_empty() {
            return SearchOutcome::empty();
        }

        // Airport rides get an offline candidate up front; it is injected
        // later only if the live results lack an exact match.
        let fallback = if ride_type == RideType::Airport {
            gazetteer::airport_fallback(query)
        } else {
            None
        };

        // Local rides never touch the network.
        if ride_type == RideType::Local {
            let places = gazetteer::local_places(query);
            return SearchOutcome {
                matched: !places.is_empty(),
                places,
                warning: None,
                error: None,
            };
        }

        let lived = if self.offline {
            Err(LocationError::Upstream("offline mode".into()))
        } else {
            self.geocode_in_country(query)
        };

        match lived {
            Ok(mut places) => {
                if ride_type != RideType::Airport {
                    places.retain(|p| !filter::is_airport_or_terminal(p));
                }
                if let Some(fb) = fallback {
                    if !filter::has_exact_match(query, &places) {
                        places.insert(0, fb);
                    }
                }
                let matched = filter::has_exact_match(query, &places);
                SearchOutcome {
                    places,
                    matched,
                    warning: None,
                    error: None,
                }
            }
            Err(e) => match fallback {
                // The offline gazetteer is the designated degrade path for
                // upstream failure on airport rides.
                Some(fb) => SearchOutcome {
                    places: vec![fb],
                    matched: true,
                    warning: Some(
                        "Live location search is unavailable; showing offline airport data."
                            .to_string(),
                    ),
                    error: None,
                },
                None => SearchOutcome {
                    places: Vec::new(),
                    matched: false,
                    warning: None,
                    error: Some(e.user_message()),
                },
            },
        }
    }

    /// Two-step geocoding pipeline: first the query with the country
    /// qualifier appended, then (only if nothing survives the country
    /// filter) the unmodified query with a center bias instead.
    fn geocode_in_country(&self, query: &str) -> Result<Vec<Place>, LocationError> {
        let first = self.geocoder.geocode(&GeocodeRequest {
            query: format!("{}{}", query, COUNTRY_QUALIFIER),
            limit: SEARCH_LIMIT,
            bias: None,
        })?;
        let places: Vec<Place> = first
            .iter()
            .map(|h| h.to_place())
            .filter(filter::is_target_country)
            .collect();
        if !places.is_empty() {
            return Ok(places);
        }

        let second = self.geocoder.geocode(&GeocodeRequest {
            query: query.to_string(),
            limit: SEARCH_LIMIT,
            bias: Some(CENTER_BIAS),
        })?;
        Ok(second
            .iter()
            .map(|h| h.to_place())
            .filter(filter::is_target_country)
            .collect())
    }

    // ─── Validate ────────────────────────────────────────────────

    /// Resolve one authoritative place for a booking leg.
    ///
    /// Failure reasons stay distinguishable: empty input, zero hits, hits
    /// outside the target country, and upstream unavailability each map to
    /// their own `LocationError` variant.
    pub fn validate(&self, text: &str) -> Result<Place, LocationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(LocationError::EmptyInput);
        }

        // A known airport is authoritative; no network call.
        if let Some(place) = gazetteer::airport_fallback(text) {
            return Ok(place);
        }

        if self.offline {
            return Err(LocationError::Upstream("offline mode".into()));
        }

        let hits = self.geocoder.geocode(&GeocodeRequest {
            query: format!("{}{}", text, COUNTRY_QUALIFIER),
            limit: VALIDATE_LIMIT,
            bias: None,
        })?;

        if hits.is_empty() {
            return Err(LocationError::NotFound(text.to_string()));
        }

        hits.iter()
            .map(|h| h.to_place())
            .find(filter::is_target_country)
            .ok_or_else(|| LocationError::OutsideServiceArea(text.to_string()))
    }
}
