use super::*;
use crate::foundation::core::Point;

fn drift(x_init: f64, y_init: f64, x_final: f64, y_final: f64) -> DriftParams {
    DriftParams {
        x_init,
        y_init,
        x_final,
        y_final,
    }
}

#[test]
fn flat_mosaic_uses_identity() {
    let a = correction_transform(&drift(50.0, 10.0, 350.0, 16.0), false).unwrap();
    assert_eq!(a, Affine::IDENTITY);
}

#[test]
fn wrap_around_aligns_last_reference_with_first() {
    let d = drift(50.0, 10.0, 350.0, 16.0);
    let a = correction_transform(&d, true).unwrap();

    let start = a * Point::new(d.x_init, d.y_init);
    assert!((start.x - 0.0).abs() < 1e-9);
    assert!((start.y - d.y_init).abs() < 1e-9);

    let end = a * Point::new(d.x_final, d.y_final);
    assert!((end.x - 300.0).abs() < 1e-9);
    assert!((end.y - d.y_init).abs() < 1e-9);
}

#[test]
fn shear_is_linear_across_the_width() {
    let d = drift(20.0, 0.0, 220.0, -8.0);
    let a = correction_transform(&d, true).unwrap();
    // Halfway along the span the correction is half the drift.
    let mid = a * Point::new(120.0, 0.0);
    assert!((mid.y - 4.0).abs() < 1e-9);
    // No horizontal scaling or rotation.
    let [sx, _, kx, sy, _, _] = a.as_coeffs();
    assert_eq!((sx, kx, sy), (1.0, 0.0, 1.0));
}

#[test]
fn coincident_reference_points_are_unsupported() {
    let err = correction_transform(&drift(5.0, 1.0, 5.0, 3.0), true).unwrap_err();
    assert!(matches!(err, MosaicError::UnsupportedMode(_)));
}

#[test]
fn right_to_left_sequence_is_unsupported() {
    let err = correction_transform(&drift(350.0, 10.0, 50.0, 16.0), true).unwrap_err();
    assert!(matches!(err, MosaicError::UnsupportedMode(_)));
    assert!(err.to_string().contains("left-to-right"), "{err}");
    // Flat mosaics do not care about direction.
    assert_eq!(
        correction_transform(&drift(350.0, 10.0, 50.0, 16.0), false).unwrap(),
        Affine::IDENTITY
    );
}
