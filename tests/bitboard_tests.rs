use tictactoe::{BitBoard, BitBoardError};

type Grid = BitBoard<u16, 3>;

#[test]
fn test_get_set_clear() {
    let mut bb = Grid::new();
    assert_eq!(bb.count_ones(), 0);

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());
    assert!(!bb.get(1, 2).unwrap());
    assert_eq!(bb.count_ones(), 1);

    bb.clear(1, 1).unwrap();
    assert!(!bb.get(1, 1).unwrap());
    assert_eq!(bb, Grid::new());
}

#[test]
fn test_out_of_bounds() {
    let mut bb = Grid::new();
    assert_eq!(
        bb.set(3, 0),
        Err(BitBoardError::IndexOutOfBounds { row: 3, col: 0 })
    );
    assert!(bb.get(0, 3).is_err());
    assert!(bb.clear(5, 5).is_err());
    assert_eq!(bb.count_ones(), 0);
}

#[test]
fn test_not_stays_within_grid() {
    let full = !Grid::new();
    assert_eq!(full.count_ones(), 9);
    assert_eq!(full, Grid::from_raw(u16::MAX));
    assert_eq!((!full).count_ones(), 0);
}

#[test]
fn test_iter_set_bits_row_major() {
    let bb = Grid::from_raw(0b1_0000_1010);
    let cells: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(cells, vec![(0, 1), (1, 0), (2, 2)]);

    let mut iter = bb.iter_set_bits();
    assert_eq!(iter.len(), 3);
    iter.next();
    assert_eq!(iter.len(), 2);
}

#[test]
fn test_contains_and_union() {
    let row = Grid::from_raw(0b111);
    let mut marks = Grid::from_raw(0b1_0000_0011);
    assert!(!marks.contains(row));
    marks.set(0, 2).unwrap();
    assert!(marks.contains(row));
    assert_eq!(row | Grid::from_raw(0b1_0000_0000), Grid::from_raw(0b1_0000_0111));
}

#[test]
fn test_clear_all() {
    let mut bb = Grid::from_raw(0b1_1010_0101);
    bb.clear_all();
    assert_eq!(bb.iter_set_bits().count(), 0);
}
