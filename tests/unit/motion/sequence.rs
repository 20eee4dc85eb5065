use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bounds(low_x: i64, high_x: i64, low_y: i64, high_y: i64) -> ShiftBounds {
    ShiftBounds {
        low_x,
        high_x,
        low_y,
        high_y,
    }
}

#[test]
fn every_prefix_sum_stays_in_bounds() {
    let cases = [
        (bounds(-10, 40, -3, 200), 3),
        (bounds(-1, 1, -1, 1), 5),
        (bounds(0, 2, -50, 1), 10),
        (bounds(-100, 100, -100, 100), 1),
    ];
    for seed in 0..8u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        for &(b, sf) in &cases {
            let shifts = generate(b, 200, sf, &mut rng).unwrap();
            assert_eq!(shifts.len(), 200);
            for cum in cumulative(&shifts) {
                assert!(b.contains(cum), "cum {cum:?} escaped {b:?}");
            }
        }
    }
}

#[test]
fn per_step_magnitude_respects_smoothness() {
    let mut rng = StdRng::seed_from_u64(11);
    let shifts = generate(bounds(-500, 500, -500, 500), 300, 4, &mut rng).unwrap();
    for v in shifts {
        assert!((-4..4).contains(&v.dx));
        assert!((-4..4).contains(&v.dy));
    }
}

#[test]
fn tight_bounds_force_zero_shifts() {
    let mut rng = StdRng::seed_from_u64(3);
    let shifts = generate(bounds(0, 1, 0, 1), 20, 10, &mut rng).unwrap();
    assert!(shifts.iter().all(|&v| v == ShiftVector::ZERO));
}

#[test]
fn zero_count_yields_empty_sequence() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(generate(bounds(-5, 5, -5, 5), 0, 2, &mut rng).unwrap().is_empty());
}

#[test]
fn non_positive_smoothness_is_invalid_range() {
    let mut rng = StdRng::seed_from_u64(0);
    for sf in [0, -3] {
        let err = generate(bounds(-5, 5, -5, 5), 4, sf, &mut rng).unwrap_err();
        assert!(matches!(err, CamoError::InvalidRange(_)));
    }
}

#[test]
fn inverted_or_degenerate_bounds_are_invalid_range() {
    let mut rng = StdRng::seed_from_u64(0);
    let err = generate(bounds(3, 1, -5, 5), 1, 5, &mut rng).unwrap_err();
    assert!(matches!(err, CamoError::InvalidRange(_)));

    let err = generate(bounds(-5, 5, 0, 0), 1, 5, &mut rng).unwrap_err();
    assert!(matches!(err, CamoError::InvalidRange(_)));
}

#[test]
fn for_canvas_keeps_box_on_canvas() {
    let bbox = BoundingBox {
        x_min: 5,
        x_max: 12,
        y_min: 20,
        y_max: 70,
    };
    let (h, w) = (30usize, 100usize);
    let b = ShiftBounds::for_canvas(bbox, h, w);
    assert_eq!(b, bounds(-5, 18, -20, 30));

    let mut rng = StdRng::seed_from_u64(21);
    let shifts = generate(b, 500, 6, &mut rng).unwrap();
    for cum in cumulative(&shifts) {
        let top = bbox.x_min as i64 + cum.dx;
        let bottom = bbox.x_max as i64 + cum.dx;
        let left = bbox.y_min as i64 + cum.dy;
        let right = bbox.y_max as i64 + cum.dy;
        assert!(top >= 0 && bottom < h as i64);
        assert!(left >= 0 && right < w as i64);
    }
}

#[test]
fn same_seed_same_walk() {
    let b = bounds(-20, 20, -20, 20);
    let a = generate(b, 50, 3, &mut StdRng::seed_from_u64(8)).unwrap();
    let c = generate(b, 50, 3, &mut StdRng::seed_from_u64(8)).unwrap();
    assert_eq!(a, c);
}
