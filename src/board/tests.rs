use super::*;

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::X.opponent(), Mark::O);
    assert_eq!(Mark::O.opponent(), Mark::X);
    assert_eq!(Mark::Empty.opponent(), Mark::Empty);
}

#[test]
fn test_mark_letter() {
    assert_eq!(Mark::X.letter(), 'X');
    assert_eq!(Mark::O.letter(), 'O');
    assert_eq!(Mark::Empty.letter(), ' ');
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(1, 2);
    assert_eq!(pos.row, 1);
    assert_eq!(pos.col, 2);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(1, 1); // Center
    assert_eq!(pos.to_index(), 4);

    let pos2 = Pos::from_index(4);
    assert_eq!(pos2.row, 1);
    assert_eq!(pos2.col, 1);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(2, 2));
    assert!(Pos::is_valid(1, 1));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(3, 0));
    assert!(!Pos::is_valid(0, 3));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 3);
    assert_eq!(TOTAL_CELLS, 9);
}

#[test]
fn test_pos_corner_indices() {
    // Top-left
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    // Top-right
    assert_eq!(Pos::new(0, 2).to_index(), 2);
    // Bottom-left
    assert_eq!(Pos::new(2, 0).to_index(), 6);
    // Bottom-right
    assert_eq!(Pos::new(2, 2).to_index(), 8);
}

#[test]
fn test_pos_display_coords() {
    // Index 5 is row 1, col 2; shown 1-indexed as (column, row)
    assert_eq!(Pos::from_index(5).to_display(), (3, 2));
    assert_eq!(Pos::new(0, 0).to_display(), (1, 1));
}

#[test]
fn test_bitboard_set_get_clear() {
    let mut bits = Bitboard::new();
    let pos = Pos::new(1, 1);
    assert!(!bits.get(pos));

    bits.set(pos);
    assert!(bits.get(pos));
    assert_eq!(bits.count(), 1);

    bits.clear(pos);
    assert!(!bits.get(pos));
    assert!(bits.is_empty());
}

#[test]
fn test_bitboard_covers() {
    let mut bits = Bitboard::new();
    bits.set(Pos::from_index(0));
    bits.set(Pos::from_index(1));
    bits.set(Pos::from_index(2));
    assert!(bits.covers(0b111));
    assert!(!bits.covers(0b1111));
}

#[test]
fn test_bitboard_from_bits_masks_high_bits() {
    let bits = Bitboard::from_bits(0xFFFF);
    assert_eq!(bits.bits(), bitboard::CELL_MASK);
    assert_eq!(bits.count(), 9);
}

#[test]
fn test_board_place_and_get() {
    let mut board = Board::new();
    let center = Pos::new(1, 1);
    assert!(board.is_empty(center));

    board.place_mark(center, Mark::X);
    assert_eq!(board.get(center), Mark::X);
    assert!(!board.is_empty(center));
    assert_eq!(board.mark_count(), 1);

    board.place_mark(Pos::new(0, 0), Mark::O);
    assert_eq!(board.get(Pos::new(0, 0)), Mark::O);
    assert_eq!(board.mark_count(), 2);
}

#[test]
fn test_board_place_empty_is_noop() {
    let mut board = Board::new();
    board.place_mark(Pos::new(0, 0), Mark::Empty);
    assert!(board.is_board_empty());
}

#[test]
fn test_board_full() {
    let mut board = Board::new();
    assert!(!board.is_full());

    for idx in 0..TOTAL_CELLS {
        let mark = if idx % 2 == 0 { Mark::X } else { Mark::O };
        board.place_mark(Pos::from_index(idx), mark);
    }
    assert!(board.is_full());
    assert_eq!(board.mark_count(), 9);
}

#[test]
fn test_overlapping_bits_read_as_x() {
    // Malformed pattern: both players on cell 0. X bitboard wins reads.
    let board = Board::from_bits(0b1, 0b1);
    assert_eq!(board.get(Pos::from_index(0)), Mark::X);
    assert!(!board.is_empty(Pos::from_index(0)));
}
