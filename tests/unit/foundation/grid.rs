use super::*;

fn numbered(h: usize, w: usize) -> Grid<u32> {
    Grid::from_fn(h, w, |r, c| (r * w + c) as u32)
}

#[test]
fn from_vec_rejects_wrong_length() {
    assert!(Grid::from_vec(2, 3, vec![0u8; 6]).is_ok());
    assert!(matches!(
        Grid::from_vec(2, 3, vec![0u8; 5]),
        Err(CamoError::InvalidParameter(_))
    ));
}

#[test]
fn shift_zero_is_identity() {
    let g = numbered(4, 5);
    assert_eq!(g.shift(ShiftVector::ZERO), g);
}

#[test]
fn shift_moves_rows_then_wraps() {
    let g = numbered(3, 4);
    let s = g.shift(ShiftVector::new(1, 0));
    // Last row wraps to the top.
    assert_eq!(s[(0, 0)], g[(2, 0)]);
    assert_eq!(s[(1, 3)], g[(0, 3)]);
    assert_eq!(s[(2, 1)], g[(1, 1)]);
}

#[test]
fn shift_moves_cols_then_wraps() {
    let g = numbered(2, 5);
    let s = g.shift(ShiftVector::new(0, 2));
    assert_eq!(s[(0, 2)], g[(0, 0)]);
    assert_eq!(s[(0, 0)], g[(0, 3)]);
    assert_eq!(s[(1, 1)], g[(1, 4)]);
}

#[test]
fn shift_accepts_negative_and_oversized_offsets() {
    let g = numbered(3, 4);
    assert_eq!(g.shift(ShiftVector::new(-1, -1)), g.shift(ShiftVector::new(2, 3)));
    assert_eq!(g.shift(ShiftVector::new(3, 8)), g);
    assert_eq!(g.shift(ShiftVector::new(-7, 9)), g.shift(ShiftVector::new(2, 1)));
}

#[test]
fn shift_composes_additively() {
    let g = numbered(5, 7);
    let vs = [
        ShiftVector::new(1, 2),
        ShiftVector::new(-3, 4),
        ShiftVector::new(6, -9),
        ShiftVector::new(0, 0),
        ShiftVector::new(-11, 13),
    ];
    for &a in &vs {
        for &b in &vs {
            assert_eq!(g.shift(a).shift(b), g.shift(a + b), "a={a:?} b={b:?}");
        }
    }
}

#[test]
fn shift_preserves_mask_population() {
    let m = Grid::from_fn(6, 6, |r, c| (r + c) % 3 == 0);
    let s = m.shift(ShiftVector::new(4, -5));
    assert_eq!(s.count_true(), m.count_true());
}

#[test]
fn checked_get_handles_out_of_bounds() {
    let g = numbered(2, 2);
    assert_eq!(g.get(1, 1), Some(&3));
    assert_eq!(g.get(2, 0), None);
    assert_eq!(g.get(0, 2), None);
}

#[test]
fn empty_grid_shift_is_noop() {
    let g: Grid<u8> = Grid::filled(0, 0, 0);
    assert!(g.is_empty());
    assert_eq!(g.shift(ShiftVector::new(3, 3)), g);
}
