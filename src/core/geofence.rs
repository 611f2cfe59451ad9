//! Site check-in: is the engineer standing within 500 m of the project?

use std::future::Future;

use thiserror::Error;
use tracing::warn;

use crate::models::Coordinates;

pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const CHECK_IN_RADIUS_KM: f64 = 0.5;

/// Great-circle distance in kilometres (haversine).
pub fn distance_km(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckInOutcome {
    Accepted { distance_km: f64 },
    Rejected { distance_km: f64 },
    LocationUnavailable { reason: String },
}

impl CheckInOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, CheckInOutcome::Accepted { .. })
    }

    pub fn message(&self) -> String {
        match self {
            CheckInOutcome::Accepted { distance_km } => format!(
                "Check-in successful! You are {}m from the site.",
                (distance_km * 1000.0).round()
            ),
            CheckInOutcome::Rejected { distance_km } => format!(
                "Check-in failed. You are {distance_km:.2}km away from the site. Please be within 500m to check in."
            ),
            CheckInOutcome::LocationUnavailable { reason } => {
                format!("Could not get location: {reason}")
            }
        }
    }
}

pub fn check_in(position: Coordinates, site: Coordinates) -> CheckInOutcome {
    let distance_km = distance_km(position, site);
    if distance_km <= CHECK_IN_RADIUS_KM {
        CheckInOutcome::Accepted { distance_km }
    } else {
        CheckInOutcome::Rejected { distance_km }
    }
}

#[derive(Debug, Clone, Error)]
pub enum LocationError {
    #[error("location services are not available on this device")]
    Unavailable,
    #[error("{0}")]
    Provider(String),
}

/// Source of a single position reading.
pub trait GeolocationProvider {
    fn current_position(&self) -> impl Future<Output = Result<Coordinates, LocationError>> + Send;
}

/// Always reports the same position (CLI flags, tests).
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Coordinates);

impl GeolocationProvider for FixedLocation {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        Ok(self.0)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

impl GeolocationProvider for NoLocation {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        Err(LocationError::Unavailable)
    }
}

/// Either of the above, picked at startup.
#[derive(Debug, Clone, Copy)]
pub enum LocationSource {
    Fixed(FixedLocation),
    Unavailable(NoLocation),
}

impl LocationSource {
    pub fn from_flags(lat: Option<f64>, lng: Option<f64>) -> Self {
        match (lat, lng) {
            (Some(lat), Some(lng)) => LocationSource::Fixed(FixedLocation(Coordinates::new(lat, lng))),
            _ => LocationSource::Unavailable(NoLocation),
        }
    }
}

impl GeolocationProvider for LocationSource {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        match self {
            LocationSource::Fixed(fixed) => fixed.current_position().await,
            LocationSource::Unavailable(none) => none.current_position().await,
        }
    }
}

/// One reading, one verdict. A provider failure is an outcome, not an error.
pub async fn verify_location<P: GeolocationProvider>(provider: &P, site: Coordinates) -> CheckInOutcome {
    match provider.current_position().await {
        Ok(position) => check_in(position, site),
        Err(err) => {
            warn!("geolocation failed: {err}");
            CheckInOutcome::LocationUnavailable {
                reason: err.to_string(),
            }
        }
    }
}
