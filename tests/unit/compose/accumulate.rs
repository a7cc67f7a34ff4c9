use super::*;
use crate::foundation::core::translation;

fn checker(w: usize, h: usize, channels: usize) -> SourceImage {
    let mut data = Vec::with_capacity(w * h * channels);
    for y in 0..h {
        for x in 0..w {
            for c in 0..channels {
                data.push(((x * 31 + y * 17 + c * 7) % 256) as u8);
            }
        }
    }
    SourceImage::new("checker", w, h, channels, data, Homography::identity()).unwrap()
}

#[test]
fn hat_weight_ramps_and_plateaus() {
    assert_eq!(hat_weight(0, 100, 20.0), 0.0);
    assert_eq!(hat_weight(10, 100, 20.0), 0.5);
    assert_eq!(hat_weight(20, 100, 20.0), 1.0);
    assert_eq!(hat_weight(50, 100, 20.0), 1.0);
    assert_eq!(hat_weight(95, 100, 20.0), 0.25);
}

#[test]
fn hat_weight_mirrors_around_canvas_center() {
    for (w, b) in [(100usize, 20.0), (7, 3.0), (10, 50.0)] {
        for x in 0..=w {
            assert_eq!(hat_weight(x, w, b), hat_weight(w - x, w, b), "w={w} b={b} x={x}");
        }
    }
}

#[test]
fn narrow_canvas_never_reaches_full_weight() {
    // Canvas narrower than two blend widths peaks below 1.
    let peak = (0..=10).map(|x| hat_weight(x, 10, 50.0)).fold(0.0, f64::max);
    assert_eq!(peak, 0.1);
}

#[test]
fn identity_image_accumulates_hat_weighted_colors() {
    let img = checker(5, 4, 3);
    let mut acc = AccumulationBuffer::new(4, 3, 3);
    accumulate_blend(&img, &mut acc, &Homography::identity(), 2.0).unwrap();

    for y in 0..3 {
        for x in 0..4 {
            let w = hat_weight(x, 4, 2.0);
            let px = acc.pixel(x, y);
            assert_eq!(px[3], w);
            for c in 0..3 {
                let expected = f64::from(img.pixel(x, y)[c]) / 255.0 * w;
                assert!((px[c] - expected).abs() < 1e-12);
            }
        }
    }
}

#[test]
fn sampling_margin_skips_last_row_and_column() {
    let img = checker(3, 3, 1);
    let mut acc = AccumulationBuffer::new(4, 4, 1);
    accumulate_blend(&img, &mut acc, &Homography::identity(), 1.0).unwrap();
    // x = 1 is inside [0, 2); x = 2 hits the strict `>= W-1` margin.
    assert!(acc.weight(1, 1) > 0.0);
    assert_eq!(acc.weight(2, 1), 0.0);
    assert_eq!(acc.weight(1, 2), 0.0);
}

#[test]
fn images_off_canvas_contribute_nothing() {
    let img = checker(4, 4, 3);
    let mut acc = AccumulationBuffer::new(6, 6, 3);
    accumulate_blend(&img, &mut acc, &translation(100.0, 0.0), 3.0).unwrap();
    assert!(acc.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn repeated_calls_add_up() {
    let img = checker(6, 6, 3);
    let mut once = AccumulationBuffer::new(5, 5, 3);
    accumulate_blend(&img, &mut once, &Homography::identity(), 2.0).unwrap();
    let mut twice = AccumulationBuffer::new(5, 5, 3);
    for _ in 0..2 {
        accumulate_blend(&img, &mut twice, &Homography::identity(), 2.0).unwrap();
    }
    for (a, b) in once.as_slice().iter().zip(twice.as_slice()) {
        assert!((2.0 * a - b).abs() < 1e-12);
    }
}

#[test]
fn singular_transform_is_rejected() {
    let img = checker(4, 4, 3);
    let mut acc = AccumulationBuffer::new(4, 4, 3);
    let err = accumulate_blend(&img, &mut acc, &Homography::zeros(), 2.0).unwrap_err();
    assert!(matches!(err, MosaicError::TransformNotInvertible(_)));
}

#[test]
fn invalid_blend_width_and_channel_mismatch_are_rejected() {
    let img = checker(4, 4, 3);
    let mut acc = AccumulationBuffer::new(4, 4, 3);
    for bw in [0.0, -1.0, f64::NAN] {
        let err = accumulate_blend(&img, &mut acc, &Homography::identity(), bw).unwrap_err();
        assert!(matches!(err, MosaicError::Validation(_)));
    }

    let mut gray_acc = AccumulationBuffer::new(4, 4, 1);
    let err = accumulate_blend(&img, &mut gray_acc, &Homography::identity(), 2.0).unwrap_err();
    assert!(matches!(err, MosaicError::DimensionMismatch(_)));
}

#[test]
fn row_parallel_accumulation_matches_sequential() {
    let img = checker(12, 9, 3);
    let m = Homography::new(0.95, 0.05, 1.5, -0.03, 1.02, 0.75, 0.0005, 0.0, 1.0);
    let mut seq = AccumulationBuffer::new(14, 11, 3);
    let mut par = AccumulationBuffer::new(14, 11, 3);
    accumulate_blend(&img, &mut seq, &m, 4.0).unwrap();
    accumulate_blend_par(&img, &mut par, &m, 4.0).unwrap();
    assert_eq!(seq, par);
}
