//! Saarthi Locate — location search and validation for a ride-booking
//! platform.
//!
//! The crate resolves free-text pickup/drop queries against the GraphHopper
//! geocoding API, restricted to Indian locations, with an offline airport
//! gazetteer as the degrade path and a fixed local-places list for
//! in-city rides.

pub mod location;
pub mod server;
