//! Offline gazetteer: airport table and regional local-places list.
//!
//! The airport table serves as the degrade path when the live geocoder is
//! unreachable, and as the authoritative source for well-known airport
//! queries. Matching is deliberately recall-biased: a short query like
//! "mundra" should still find "mundra airport".

use super::types::{join_display, Place};

// ─── Airport table ──────────────────────────────────────────────

struct AirportRecord {
    /// Lowercase canonical phrase the record is keyed by.
    key: &'static str,
    name: &'static str,
    city: &'static str,
    state: &'static str,
    lat: f64,
    lon: f64,
}

const AIRPORTS: &[AirportRecord] = &[
    AirportRecord {
        key: "ahmedabad airport",
        name: "Sardar Vallabhbhai Patel International Airport",
        city: "Ahmedabad", state: "Gujarat",
        lat: 23.0772, lon: 72.6347,
    },
    AirportRecord {
        key: "bhuj airport",
        name: "Bhuj Airport",
        city: "Bhuj", state: "Gujarat",
        lat: 23.2878, lon: 69.6702,
    },
    AirportRecord {
        key: "mundra airport",
        name: "Mundra Airport",
        city: "Mundra", state: "Gujarat",
        lat: 22.8312, lon: 69.6531,
    },
    AirportRecord {
        key: "kandla airport",
        name: "Kandla Airport",
        city: "Gandhidham", state: "Gujarat",
        lat: 23.1127, lon: 70.1003,
    },
    AirportRecord {
        key: "rajkot airport",
        name: "Rajkot International Airport",
        city: "Rajkot", state: "Gujarat",
        lat: 22.3092, lon: 70.7795,
    },
    AirportRecord {
        key: "surat airport",
        name: "Surat International Airport",
        city: "Surat", state: "Gujarat",
        lat: 21.1141, lon: 72.7418,
    },
    AirportRecord {
        key: "vadodara airport",
        name: "Vadodara Airport",
        city: "Vadodara", state: "Gujarat",
        lat: 22.3362, lon: 73.2263,
    },
    AirportRecord {
        key: "jamnagar airport",
        name: "Jamnagar Airport",
        city: "Jamnagar", state: "Gujarat",
        lat: 22.4655, lon: 70.0126,
    },
    AirportRecord {
        key: "porbandar airport",
        name: "Porbandar Airport",
        city: "Porbandar", state: "Gujarat",
        lat: 21.6487, lon: 69.6572,
    },
    AirportRecord {
        key: "bhavnagar airport",
        name: "Bhavnagar Airport",
        city: "Bhavnagar", state: "Gujarat",
        lat: 21.7522, lon: 72.1852,
    },
    AirportRecord {
        key: "keshod airport",
        name: "Keshod Airport",
        city: "Keshod", state: "Gujarat",
        lat: 21.3171, lon: 70.2704,
    },
    AirportRecord {
        key: "mumbai airport",
        name: "Chhatrapati Shivaji Maharaj International Airport",
        city: "Mumbai", state: "Maharashtra",
        lat: 19.0896, lon: 72.8656,
    },
    AirportRecord {
        key: "delhi airport",
        name: "Indira Gandhi International Airport",
        city: "New Delhi", state: "Delhi",
        lat: 28.5562, lon: 77.1000,
    },
    AirportRecord {
        key: "udaipur airport",
        name: "Maharana Pratap Airport",
        city: "Udaipur", state: "Rajasthan",
        lat: 24.6177, lon: 73.8961,
    },
];

// ─── Local places (Kutch region) ────────────────────────────────

const LOCAL_PLACES: &[&str] = &[
    "Bhuj Railway Station",
    "Bhuj Bus Stand",
    "Swaminarayan Temple Bhuj",
    "Aina Mahal",
    "Prag Mahal",
    "Hamirsar Lake",
    "Bhujodi",
    "Mandvi Beach",
    "Vijay Vilas Palace",
    "Mundra Port",
    "Gandhidham Railway Station",
    "White Rann Dhordo",
    "Kala Dungar",
    "Mata no Madh",
    "Narayan Sarovar",
    "Koteshwar Temple",
    "Anjar",
    "Nakhatrana",
];

fn airport_to_place(record: &AirportRecord) -> Place {
    Place {
        name: join_display(&[
            Some(record.name),
            Some(record.city),
            Some(record.state),
            Some("India"),
        ]),
        lat: Some(record.lat),
        lon: Some(record.lon),
        city: Some(record.city.to_string()),
        district: None,
        state: Some(record.state.to_string()),
        country: Some("India".to_string()),
        is_fallback: true,
        kind: Some("airport".to_string()),
    }
}

/// Look up a known airport by free text.
///
/// Exact key match wins first. Otherwise a partial pass succeeds when the
/// key contains the query, the query contains the key, or the query
/// contains the key's first word ("mundra" matches "mundra airport").
/// The partial pass returns the first match in table order.
pub fn airport_fallback(query: &str) -> Option<Place> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return None;
    }

    for record in AIRPORTS {
        if record.key == q {
            return Some(airport_to_place(record));
        }
    }

    for record in AIRPORTS {
        let first_word = record.key.split_whitespace().next().unwrap_or(record.key);
        if record.key.contains(&q) || q.contains(record.key) || q.contains(first_word) {
            return Some(airport_to_place(record));
        }
    }

    None
}

/// Case-insensitive substring match over the fixed regional list.
/// Local places carry no coordinates; matching is by name only.
pub fn local_places(query: &str) -> Vec<Place> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return Vec::new();
    }

    LOCAL_PLACES
        .iter()
        .filter(|name| name.to_lowercase().contains(&q))
        .map(|name| Place {
            name: join_display(&[Some(name), Some("Kutch"), Some("Gujarat"), Some("India")]),
            lat: None,
            lon: None,
            city: None,
            district: Some("Kutch".to_string()),
            state: Some("Gujarat".to_string()),
            country: Some("India".to_string()),
            is_fallback: true,
            kind: Some("local".to_string()),
        })
        .collect()
}
