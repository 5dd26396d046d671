//! Core types for the location subsystem.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which booking flow a search request comes from.
///
/// Unknown strings fall back to `Standard`, the outstation/one-way path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RideType {
    Airport,
    Local,
    Standard,
}

impl RideType {
    pub fn from_param(param: Option<&str>) -> Self {
        match param.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("airport") => Self::Airport,
            Some("local") => Self::Local,
            _ => Self::Standard,
        }
    }
}

impl fmt::Display for RideType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Airport => write!(f, "airport"),
            Self::Local => write!(f, "local"),
            Self::Standard => write!(f, "standard"),
        }
    }
}

/// A resolved or candidate location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    /// Display name: non-empty components joined with ", ".
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// True only when this place came from the offline gazetteer.
    #[serde(
        default,
        rename = "isFallback",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub is_fallback: bool,
    /// Optional tag, e.g. "airport" or "local".
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Place {
    /// The segment of the display name before the first comma.
    pub fn primary_name(&self) -> &str {
        self.name.split(',').next().unwrap_or("").trim()
    }
}

/// Join non-empty display-name components with ", ", skipping a component
/// that repeats its predecessor (e.g. venue name equal to the city).
pub fn join_display(parts: &[Option<&str>]) -> String {
    let mut out: Vec<&str> = Vec::new();
    for part in parts.iter().flatten() {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if out.last().is_some_and(|prev| prev.eq_ignore_ascii_case(part)) {
            continue;
        }
        out.push(part);
    }
    out.join(", ")
}

/// The outcome of one search request.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub places: Vec<Place>,
    /// True iff some place's pre-comma name segment equals the query.
    #[serde(rename = "match")]
    pub matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchOutcome {
    pub fn empty() -> Self {
        Self {
            places: Vec::new(),
            matched: false,
            warning: None,
            error: None,
        }
    }
}

/// Location resolution errors.
///
/// All variants are recovered at the HTTP boundary and reported through a
/// body-level flag; they never become transport error statuses.
#[derive(Debug)]
pub enum LocationError {
    /// Empty or whitespace-only input.
    EmptyInput,
    /// Geocoder unreachable, timed out, or returned non-2xx.
    Upstream(String),
    /// Geocoder responded but the payload had no usable hit array.
    MalformedResponse(String),
    /// Geocoder returned zero hits for the query.
    NotFound(String),
    /// Hits existed but none matched the target country.
    OutsideServiceArea(String),
}

impl LocationError {
    /// The exact user-facing message for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyInput => "Location text is required",
            Self::Upstream(_) | Self::MalformedResponse(_) => {
                "Location service temporarily unavailable"
            }
            Self::NotFound(_) => "Location not found",
            Self::OutsideServiceArea(_) => "Only Indian locations are supported",
        }
        .to_string()
    }
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "No location text provided"),
            Self::Upstream(msg) => write!(f, "Geocoding service error: {}", msg),
            Self::MalformedResponse(msg) => write!(f, "Invalid geocoding response: {}", msg),
            Self::NotFound(q) => write!(f, "Location not found: '{}'", q),
            Self::OutsideServiceArea(q) => write!(f, "No serviceable location for '{}'", q),
        }
    }
}

impl std::error::Error for LocationError {}
