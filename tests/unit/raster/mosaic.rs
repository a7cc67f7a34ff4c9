use super::*;

#[test]
fn without_last_channel_strips_alpha() {
    let m = Mosaic {
        width: 2,
        height: 1,
        channels: 4,
        data: vec![1, 2, 3, 255, 4, 5, 6, 255],
    };
    let rgb = m.without_last_channel().unwrap();
    assert_eq!(rgb.channels, 3);
    assert_eq!(rgb.data, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn without_last_channel_rejects_single_channel() {
    assert!(Mosaic::new(1, 1, 1).without_last_channel().is_err());
}

#[test]
fn to_dynamic_maps_channel_counts() {
    let rgba = Mosaic {
        width: 1,
        height: 1,
        channels: 4,
        data: vec![10, 20, 30, 255],
    };
    let img = rgba.to_dynamic().unwrap();
    assert_eq!(img.color(), image::ColorType::Rgba8);
    assert_eq!(img.to_rgba8().into_raw(), vec![10, 20, 30, 255]);

    let gray = Mosaic::new(3, 2, 1);
    assert_eq!(gray.to_dynamic().unwrap().color(), image::ColorType::L8);
}

#[test]
fn to_dynamic_rejects_unsupported_layouts() {
    assert!(Mosaic::new(1, 1, 5).to_dynamic().is_err());
    let broken = Mosaic {
        width: 2,
        height: 2,
        channels: 3,
        data: vec![0; 3],
    };
    assert!(broken.to_dynamic().is_err());
}
