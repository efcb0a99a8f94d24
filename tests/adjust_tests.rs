use rust_photo_album::adjust::{self, ToneParams};
use rust_photo_album::pixel::PixelBuffer;

fn buffer(width: u32, height: u32, samples: &[u8]) -> PixelBuffer {
    PixelBuffer::from_raw(width, height, samples.to_vec()).unwrap()
}

#[test]
fn neutral_parameters_are_identity() {
    let buf = buffer(2, 1, &[10, 20, 30, 200, 100, 0]);
    assert_eq!(adjust::brightness(&buf, 0), buf);
    assert_eq!(adjust::saturation(&buf, 0), buf);
    assert_eq!(adjust::contrast(&buf, 0), buf);
    assert_eq!(adjust::adjust(&buf, ToneParams::default()), buf);
}

#[test]
fn brightness_adds_and_clamps() {
    let buf = buffer(1, 1, &[250, 5, 128]);
    assert_eq!(adjust::brightness(&buf, 50).samples(), &[255, 55, 178]);
}

#[test]
fn brightness_holds_range_at_extremes() {
    let buf = buffer(1, 1, &[0, 128, 255]);
    assert_eq!(adjust::brightness(&buf, 100).samples(), &[100, 228, 255]);
    assert_eq!(adjust::brightness(&buf, -100).samples(), &[0, 28, 155]);
}

#[test]
fn full_desaturation_equalizes_channels() {
    let buf = buffer(2, 1, &[200, 40, 90, 12, 240, 3]);
    for px in adjust::saturation(&buf, -100).samples().chunks_exact(3) {
        assert_eq!(px[0], px[1]);
        assert_eq!(px[1], px[2]);
    }
}

#[test]
fn double_saturation_pushes_away_from_gray() {
    // gray = 0.3*200 + 0.59*100 + 0.11*50 = 124.5
    let buf = buffer(1, 1, &[200, 100, 50]);
    assert_eq!(adjust::saturation(&buf, 100).samples(), &[255, 76, 0]);
}

#[test]
fn zero_contrast_collapses_to_mid_gray() {
    let buf = buffer(1, 1, &[100, 100, 100]);
    assert_eq!(adjust::contrast(&buf, -100).samples(), &[128, 128, 128]);
}

#[test]
fn contrast_is_monotonic_around_the_pivot() {
    let buf = buffer(1, 1, &[200, 60, 128]);
    let mut prev: Option<Vec<u8>> = None;
    for value in (-100..=100).step_by(10) {
        let out = adjust::contrast(&buf, value).samples().to_vec();
        assert_eq!(out[2], 128, "the pivot sample never moves");
        if let Some(prev) = &prev {
            assert!(out[0] >= prev[0], "samples above 128 never decrease");
            assert!(out[1] <= prev[1], "samples below 128 never increase");
        }
        prev = Some(out);
    }
}

#[test]
fn stages_compose_in_brightness_saturation_contrast_order() {
    let buf = buffer(2, 1, &[10, 20, 30, 240, 7, 99]);
    let params = ToneParams {
        brightness: 30,
        saturation: -60,
        contrast: 45,
    };
    let staged = adjust::contrast(&adjust::saturation(&adjust::brightness(&buf, 30), -60), 45);
    assert_eq!(adjust::adjust(&buf, params), staged);
}

#[test]
fn out_of_range_parameters_are_clamped() {
    let buf = buffer(1, 1, &[100, 150, 200]);
    assert_eq!(adjust::brightness(&buf, 400), adjust::brightness(&buf, 100));
    assert_eq!(adjust::contrast(&buf, -400), adjust::contrast(&buf, -100));
    assert_eq!(adjust::saturation(&buf, 999), adjust::saturation(&buf, 100));
}
