//! Pure place predicates: target-country check, airport/terminal name
//! detection, and the exact-match signal for search responses.

use super::types::Place;

const ACCEPTED_COUNTRIES: &[&str] = &["india", "bharat", "in"];

/// Indian states and union territories, lowercase. Used when an upstream
/// hit omits the country but carries a recognizable state.
const INDIAN_STATES: &[&str] = &[
    "andhra pradesh",
    "arunachal pradesh",
    "assam",
    "bihar",
    "chhattisgarh",
    "goa",
    "gujarat",
    "haryana",
    "himachal pradesh",
    "jharkhand",
    "karnataka",
    "kerala",
    "madhya pradesh",
    "maharashtra",
    "manipur",
    "meghalaya",
    "mizoram",
    "nagaland",
    "odisha",
    "punjab",
    "rajasthan",
    "sikkim",
    "tamil nadu",
    "telangana",
    "tripura",
    "uttar pradesh",
    "uttarakhand",
    "west bengal",
    "delhi",
    "jammu and kashmir",
    "ladakh",
    "puducherry",
    "chandigarh",
    "andaman and nicobar islands",
    "dadra and nagar haveli and daman and diu",
    "lakshadweep",
];

/// True when the place is in the target country, either by country name or,
/// failing that, by a recognized Indian state.
pub fn is_target_country(place: &Place) -> bool {
    if let Some(country) = &place.country {
        let c = country.trim().to_lowercase();
        if ACCEPTED_COUNTRIES.contains(&c.as_str()) {
            return true;
        }
    }
    if let Some(state) = &place.state {
        let s = state.trim().to_lowercase();
        return INDIAN_STATES.contains(&s.as_str());
    }
    false
}

/// True when the place name looks like an airport or terminal facility.
pub fn is_airport_or_terminal(place: &Place) -> bool {
    let name = place.name.to_lowercase();
    name.contains("airport") || name.contains("terminal")
}

/// True when some result's pre-comma name segment equals the trimmed query,
/// case-insensitively. Callers use this to distinguish a high-confidence
/// hit from mere suggestions.
pub fn has_exact_match(query: &str, places: &[Place]) -> bool {
    let q = query.trim();
    if q.is_empty() {
        return false;
    }
    places
        .iter()
        .any(|p| p.primary_name().eq_ignore_ascii_case(q))
}
