//! Distance-decay proximity against the default San Jose landmarks.

use eih_core::{
    DistanceDecayScorer, INFRASTRUCTURE_CAP_KM, LandmarkSet, Location, SERVICE_CAP_KM,
    infrastructure_score, service_proximity,
};
use rstest::rstest;

#[rstest]
#[case::downtown(37.3382, -121.8863)]
#[case::diridon(37.3297, -121.9018)]
#[case::valley_medical(37.3166, -121.9277)]
#[case::eastridge(37.3254, -121.8157)]
fn service_landmarks_score_one(#[case] latitude: f64, #[case] longitude: f64) {
    assert_eq!(service_proximity(Location::new(latitude, longitude)), 1.0);
}

#[rstest]
#[case::north(37.4034, -121.8863)]
#[case::south(37.2788, -121.8863)]
#[case::east(37.3382, -121.8163)]
#[case::west(37.3382, -121.9563)]
fn infrastructure_hubs_score_one(#[case] latitude: f64, #[case] longitude: f64) {
    assert_eq!(infrastructure_score(Location::new(latitude, longitude)), 1.0);
}

#[rstest]
fn distant_locations_score_zero() {
    let remote = Location::new(36.0, -120.0);
    assert_eq!(service_proximity(remote), 0.0);
    assert_eq!(infrastructure_score(remote), 0.0);
}

#[rstest]
fn infrastructure_decays_more_slowly_than_services() {
    let origin = Location::new(0.0, 0.0);
    let landmarks = LandmarkSet::new().with_landmark("origin", origin);
    let services =
        DistanceDecayScorer::new(landmarks.clone(), SERVICE_CAP_KM).expect("valid service cap");
    let infrastructure = DistanceDecayScorer::new(landmarks, INFRASTRUCTURE_CAP_KM)
        .expect("valid infrastructure cap");
    // Roughly 3.3 km north of the origin.
    let north = Location::new(0.03, 0.0);
    assert!(infrastructure.score(north) > services.score(north));
}

#[rstest]
fn nearest_landmark_wins() {
    let landmarks = LandmarkSet::new()
        .with_landmark("near", Location::new(0.0, 0.0))
        .with_landmark("far", Location::new(1.0, 1.0));
    let (landmark, distance) = landmarks
        .nearest(Location::new(0.001, 0.0))
        .expect("non-empty landmark set");
    assert_eq!(landmark.name, "near");
    assert!(distance < 0.2);
}
