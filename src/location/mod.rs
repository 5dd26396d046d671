//! Location resolution subsystem for Saarthi Locate.
//!
//! Provides free-text place search and single-text validation, combining a
//! live geocoder, a country/state filter, and an offline airport gazetteer
//! used as the fallback when the geocoder is unreachable.

pub mod filter;
pub mod gazetteer;
pub mod geocoder;
pub mod resolver;
pub mod types;

pub use geocoder::{Geocode, GeocodeHit, GeocodeRequest, GraphHopperClient};
pub use resolver::LocationResolver;
pub use types::{LocationError, Place, RideType, SearchOutcome};
