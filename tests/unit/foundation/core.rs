use super::*;
use nalgebra::Vector3;

#[test]
fn translation_moves_points() {
    let t = translation(10.0, -2.5);
    let p = t * Vector3::new(1.0, 1.0, 1.0);
    assert_eq!(p, Vector3::new(11.0, -1.5, 1.0));
}

#[test]
fn affine_lift_matches_kurbo_application() {
    let a = Affine::new([1.0, 0.25, 0.5, 2.0, -3.0, 7.0]);
    let m = affine_to_homography(a);
    let q = a * Point::new(4.0, -1.0);
    let v = m * Vector3::new(4.0, -1.0, 1.0);
    assert!((q.x - v[0]).abs() < 1e-12);
    assert!((q.y - v[1]).abs() < 1e-12);
    assert_eq!(v[2], 1.0);
}

#[test]
fn identity_affine_lifts_to_identity() {
    assert_eq!(affine_to_homography(Affine::IDENTITY), Homography::identity());
}
