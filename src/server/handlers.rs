use axum::extract::{Json as JsonBody, Query, State};
use axum::response::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::location::types::Place;
use crate::location::RideType;

use super::state::AppState;

// ─── GET /api/search ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    #[serde(rename = "rideType")]
    pub ride_type: Option<String>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub places: Vec<Place>,
    #[serde(rename = "match")]
    pub matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Always answers HTTP 200: upstream failure degrades to fallback or empty
/// content signaled in-body, never a transport error status.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let start = Instant::now();

    let query = params.q.as_deref().unwrap_or("").trim().to_string();
    let ride_type = RideType::from_param(params.ride_type.as_deref());

    let outcome = state.resolver.search(&query, ride_type);

    let elapsed = start.elapsed();
    eprintln!(
        "[{}] GET /api/search?q={}&rideType={} -> {} places, match={} ({:.1}ms)",
        Utc::now().format("%H:%M:%S"),
        query,
        ride_type,
        outcome.places.len(),
        outcome.matched,
        elapsed.as_secs_f64() * 1000.0,
    );

    Json(SearchResponse {
        success: true,
        places: outcome.places,
        matched: outcome.matched,
        warning: outcome.warning,
        error: outcome.error,
    })
}

// ─── POST /api/validate ──────────────────────────────────────────

#[derive(Deserialize)]
pub struct ValidateBody {
    pub text: Option<String>,
}

#[derive(Serialize)]
pub struct AddressParts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

#[derive(Serialize)]
pub struct ValidateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(rename = "formattedName", skip_serializing_if = "Option::is_none")]
    pub formatted_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressParts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub async fn validate(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<ValidateBody>,
) -> Json<ValidateResponse> {
    let start = Instant::now();

    let text = body.text.as_deref().unwrap_or("").trim().to_string();
    let result = state.resolver.validate(&text);

    let elapsed = start.elapsed();
    let response = match result {
        Ok(place) => {
            eprintln!(
                "[{}] POST /api/validate text={} -> {} ({:.1}ms)",
                Utc::now().format("%H:%M:%S"),
                text,
                place.name,
                elapsed.as_secs_f64() * 1000.0,
            );
            ValidateResponse {
                success: true,
                lat: place.lat,
                lon: place.lon,
                formatted_name: Some(place.name.clone()),
                address: Some(AddressParts {
                    city: place.city,
                    state: place.state,
                    country: place.country,
                }),
                message: None,
            }
        }
        Err(e) => {
            eprintln!(
                "[{}] POST /api/validate text={} -> rejected: {} ({:.1}ms)",
                Utc::now().format("%H:%M:%S"),
                text,
                e,
                elapsed.as_secs_f64() * 1000.0,
            );
            ValidateResponse {
                success: false,
                lat: None,
                lon: None,
                formatted_name: None,
                address: None,
                message: Some(e.user_message()),
            }
        }
    };

    Json(response)
}
