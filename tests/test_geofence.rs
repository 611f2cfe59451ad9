//! Integration tests for site check-in distance and verdicts.

mod common;

use safeclue::core::geofence::{
    self, CheckInOutcome, FixedLocation, LocationSource, NoLocation, distance_km,
};

use common::*;

/// One degree of latitude on a 6371 km sphere.
const KM_PER_DEGREE: f64 = 111.194_926_644_558_73;

#[test]
fn test_same_point_is_accepted() {
    let outcome = geofence::check_in(SKYLINE_SITE, SKYLINE_SITE);

    assert_eq!(outcome, CheckInOutcome::Accepted { distance_km: 0.0 });
    assert_eq!(outcome.message(), "Check-in successful! You are 0m from the site.");
}

#[test]
fn test_distance_along_a_meridian() {
    let north = Coordinates::new(SKYLINE_SITE.lat + 1.0, SKYLINE_SITE.lng);

    let distance = distance_km(SKYLINE_SITE, north);

    assert!((distance - KM_PER_DEGREE).abs() < 1e-6, "got {distance}");
    assert!((distance - distance_km(north, SKYLINE_SITE)).abs() < 1e-9);
}

#[test]
fn test_inside_radius_is_accepted() {
    // ~0.33 km north
    let near = Coordinates::new(SKYLINE_SITE.lat + 0.003, SKYLINE_SITE.lng);

    let outcome = geofence::check_in(near, SKYLINE_SITE);

    assert!(outcome.is_accepted());
    assert_eq!(outcome.message(), "Check-in successful! You are 334m from the site.");
}

#[test]
fn test_outside_radius_is_rejected_with_distance() {
    // ~0.56 km north
    let far = Coordinates::new(SKYLINE_SITE.lat + 0.005, SKYLINE_SITE.lng);

    let outcome = geofence::check_in(far, SKYLINE_SITE);

    assert!(matches!(outcome, CheckInOutcome::Rejected { distance_km } if distance_km > 0.5));
    assert_eq!(
        outcome.message(),
        "Check-in failed. You are 0.56km away from the site. Please be within 500m to check in."
    );
}

#[tokio::test]
async fn test_verify_with_fixed_location() {
    let provider = FixedLocation(Coordinates::new(SKYLINE_SITE.lat + 0.001, SKYLINE_SITE.lng));

    let outcome = geofence::verify_location(&provider, SKYLINE_SITE).await;

    assert!(outcome.is_accepted());
}

#[tokio::test]
async fn test_verify_without_location() {
    let outcome = geofence::verify_location(&NoLocation, SKYLINE_SITE).await;

    assert!(matches!(outcome, CheckInOutcome::LocationUnavailable { .. }));
    assert_eq!(
        outcome.message(),
        "Could not get location: location services are not available on this device"
    );
}

#[tokio::test]
async fn test_location_source_from_flags() {
    let fixed = LocationSource::from_flags(Some(25.9415), Some(-80.1221));
    let missing = LocationSource::from_flags(Some(25.9415), None);

    let ocean_breeze = Coordinates::new(25.9415, -80.1221);
    assert!(geofence::verify_location(&fixed, ocean_breeze).await.is_accepted());
    assert!(matches!(
        geofence::verify_location(&missing, ocean_breeze).await,
        CheckInOutcome::LocationUnavailable { .. }
    ));
}
