use super::*;

fn raster_with(h: u32, w: u32, ink: &[(usize, usize)]) -> RgbFrame {
    let mut f = RgbFrame::black(w, h);
    for &(r, c) in ink {
        f.set_pixel(r, c, [255, 255, 255]);
    }
    f
}

fn dilated_of(z: &Zones) -> Mask {
    Mask::from_fn(z.word.height(), z.word.width(), |r, c| {
        z.word[(r, c)] || z.contour[(r, c)]
    })
}

#[test]
fn odd_or_zero_edge_width_is_invalid_parameter() {
    let glyph = raster_with(8, 8, &[(4, 4)]);
    for edge in [0, 1, 3, 7] {
        let err = extract(&glyph, edge).unwrap_err();
        assert!(matches!(err, CamoError::InvalidParameter(_)), "edge={edge}");
    }
}

#[test]
fn all_black_raster_is_empty_mask() {
    let glyph = RgbFrame::black(12, 9);
    let err = extract(&glyph, 4).unwrap_err();
    assert!(matches!(err, CamoError::EmptyMask(_)));
}

#[test]
fn single_pixel_grows_by_half_edge_width() {
    let glyph = raster_with(11, 11, &[(5, 5)]);
    let z = extract(&glyph, 4).unwrap();
    assert_eq!(z.word.count_true(), 1);
    assert_eq!(z.contour.count_true(), 24);
    assert_eq!(
        z.bbox,
        BoundingBox {
            x_min: 3,
            x_max: 7,
            y_min: 3,
            y_max: 7,
        }
    );
}

#[test]
fn word_and_contour_are_disjoint_and_word_is_inside_dilation() {
    let ink = [(2, 2), (2, 3), (3, 3), (7, 9), (8, 9), (9, 1)];
    let glyph = raster_with(12, 14, &ink);
    for edge in [2, 4, 6] {
        let z = extract(&glyph, edge).unwrap();
        let dilated = dilated_of(&z);
        for r in 0..12 {
            for c in 0..14 {
                assert!(!(z.word[(r, c)] && z.contour[(r, c)]));
                if z.word[(r, c)] {
                    assert!(dilated[(r, c)]);
                }
            }
        }
    }
}

#[test]
fn bbox_is_minimal_enclosure_of_dilated_mask() {
    let glyph = raster_with(20, 30, &[(6, 10), (9, 17), (12, 12)]);
    let z = extract(&glyph, 2).unwrap();
    let dilated = dilated_of(&z);
    let b = z.bbox;

    for r in 0..20 {
        for c in 0..30 {
            if dilated[(r, c)] {
                assert!(b.contains(r, c));
            }
        }
    }
    assert!((b.y_min..=b.y_max).any(|c| dilated[(b.x_min, c)]));
    assert!((b.y_min..=b.y_max).any(|c| dilated[(b.x_max, c)]));
    assert!((b.x_min..=b.x_max).any(|r| dilated[(r, b.y_min)]));
    assert!((b.x_min..=b.x_max).any(|r| dilated[(r, b.y_max)]));
    assert_eq!(b.x_min, 5);
    assert_eq!(b.x_max, 13);
    assert_eq!(b.y_min, 9);
    assert_eq!(b.y_max, 18);
}

#[test]
fn dilation_clamps_at_canvas_edges() {
    let glyph = raster_with(6, 6, &[(0, 0)]);
    let z = extract(&glyph, 4).unwrap();
    assert_eq!(
        z.bbox,
        BoundingBox {
            x_min: 0,
            x_max: 2,
            y_min: 0,
            y_max: 2,
        }
    );
    assert_eq!(z.contour.count_true(), 8);
}

#[test]
fn threshold_uses_channel_mean() {
    let mut glyph = RgbFrame::black(3, 1);
    glyph.set_pixel(0, 0, [127, 127, 127]);
    glyph.set_pixel(0, 1, [255, 0, 128]);
    glyph.set_pixel(0, 2, [128, 127, 126]);
    let z = extract(&glyph, 2).unwrap();
    assert!(!z.word[(0, 0)]);
    assert!(z.word[(0, 1)]);
    assert!(!z.word[(0, 2)]);
}

#[test]
fn dilation_takes_per_channel_maximum_before_thresholding() {
    // Neither pixel is ink on its own, but the channel-wise max of the pair is.
    let mut glyph = RgbFrame::black(4, 1);
    glyph.set_pixel(0, 1, [255, 0, 0]);
    glyph.set_pixel(0, 2, [0, 255, 0]);
    let z = extract(&glyph, 2).unwrap();
    assert_eq!(z.word.count_true(), 0);
    assert_eq!(z.contour.count_true(), 2);
    assert_eq!((z.bbox.y_min, z.bbox.y_max), (1, 2));
}

#[test]
fn bounding_box_of_empty_mask_is_none() {
    assert!(bounding_box(&Mask::filled(3, 3, false)).is_none());
}
