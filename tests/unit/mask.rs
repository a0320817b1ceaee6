use super::*;

fn buffer(width: u32, height: u32, data: &[u8]) -> MaskBuffer {
    MaskBuffer::from_raw(width, height, data.to_vec()).unwrap()
}

#[test]
fn zeros_remap_to_background_and_others_pass_through() {
    let input = buffer(2, 2, &[0, 10, 255, 0]);
    let out = input.normalize();
    assert_eq!(out.data(), &[255, 10, 255, 255]);
}

#[test]
fn all_zero_grid_becomes_all_background() {
    let input = buffer(3, 3, &[0; 9]);
    let out = input.normalize();
    assert_eq!(out.data(), &[255; 9]);
    assert_eq!((out.width(), out.height()), (3, 3));
}

#[test]
fn grid_without_zeros_is_unchanged() {
    let input = buffer(2, 2, &[1, 2, 3, 4]);
    assert_eq!(input.normalize().data(), &[1, 2, 3, 4]);
}

#[test]
fn normalize_is_idempotent() {
    let input = buffer(3, 2, &[0, 1, 128, 254, 255, 0]);
    let once = input.normalize();
    let twice = once.normalize();
    assert_eq!(once, twice);
}

#[test]
fn normalize_preserves_dimensions_including_degenerate_grids() {
    for (w, h) in [(0u32, 0u32), (0, 4), (4, 0), (5, 3)] {
        let input = buffer(w, h, &vec![0; (w * h) as usize]);
        let out = input.normalize();
        assert_eq!((out.width(), out.height()), (w, h));
        assert_eq!(out.data().len(), (w * h) as usize);
    }
}

#[test]
fn input_is_never_mutated() {
    let input = buffer(2, 2, &[0, 10, 255, 0]);
    let before = input.clone();
    let _ = input.normalize();
    assert_eq!(input, before);
}

#[test]
fn from_raw_rejects_length_mismatch() {
    let err = MaskBuffer::from_raw(2, 2, vec![0; 3]).unwrap_err();
    assert!(matches!(err, crate::error::CloudError::Validation(_)));
}

#[test]
fn get_respects_bounds() {
    let input = buffer(2, 2, &[1, 2, 3, 4]);
    assert_eq!(input.get(1, 1), Some(4));
    assert_eq!(input.get(2, 0), None);
    assert_eq!(input.get(0, 2), None);
}

#[test]
fn gray_image_round_trip_preserves_pixels() {
    let input = buffer(3, 2, &[0, 50, 100, 150, 200, 255]);
    let img = input.to_gray_image();
    assert_eq!(MaskBuffer::from_gray_image(&img), input);
}

#[test]
fn contour_marks_shape_edges_only() {
    // 8x8 all-background grid with a 4x4 foreground square in the middle.
    let mut data = vec![BACKGROUND; 64];
    for y in 2..6u32 {
        for x in 2..6u32 {
            data[(y * 8 + x) as usize] = 10;
        }
    }
    let mask = buffer(8, 8, &data);
    let edge = mask.contour(1);

    // Shape boundary pixels are on the edge; the shape core is not.
    assert_ne!(edge.get_pixel(2, 2).0[0], 0);
    assert_eq!(edge.get_pixel(4, 4).0[0], 0);
    // A corner more than one pixel from the shape is untouched.
    assert_eq!(edge.get_pixel(0, 0).0[0], 0);
}

#[test]
fn contour_width_zero_is_empty() {
    let mask = buffer(4, 4, &[10; 16]);
    let edge = mask.contour(0);
    assert!(edge.pixels().all(|p| p.0[0] == 0));
}
