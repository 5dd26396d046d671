use crate::location::LocationResolver;

/// Shared server state. The resolver is read-only (gazetteer tables are
/// constants, the geocoder client holds no mutable state), so no lock is
/// needed across concurrent requests.
pub struct AppState {
    pub resolver: LocationResolver,
}
