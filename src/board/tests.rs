use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_stone_display() {
    assert_eq!(Stone::Black.to_string(), "Black");
    assert_eq!(Stone::White.to_string(), "White");
    assert_eq!(Stone::default(), Stone::Empty);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(7, 3);
    assert_eq!(pos.x, 7);
    assert_eq!(pos.y, 3);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center
    assert_eq!(pos.to_index(15), 7 * 15 + 7);
    assert_eq!(pos.to_index(15), 112);

    let pos2 = Pos::from_index(112, 15);
    assert_eq!(pos2, Pos::new(7, 7));
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0, 15));
    assert!(Pos::is_valid(14, 14, 15));
    assert!(!Pos::is_valid(-1, 0, 15));
    assert!(!Pos::is_valid(0, -1, 15));
    assert!(!Pos::is_valid(15, 0, 15));
    assert!(!Pos::is_valid(0, 15, 15));
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(2, 2);
    assert_eq!(pos.offset(1, 0, 3, 15), Some(Pos::new(5, 2)));
    assert_eq!(pos.offset(1, -1, 2, 15), Some(Pos::new(4, 0)));
    assert_eq!(pos.offset(-1, -1, 3, 15), None);
    assert_eq!(pos.offset(0, 1, 13, 15), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(DEFAULT_BOARD_SIZE, 15);
    assert_eq!(MIN_BOARD_SIZE, 5);
    assert_eq!(Board::default().size(), DEFAULT_BOARD_SIZE);
}

#[test]
fn test_pos_corner_indices() {
    // Top-left
    assert_eq!(Pos::new(0, 0).to_index(15), 0);
    // Top-right
    assert_eq!(Pos::new(14, 0).to_index(15), 14);
    // Bottom-left
    assert_eq!(Pos::new(0, 14).to_index(15), 210);
    // Bottom-right
    assert_eq!(Pos::new(14, 14).to_index(15), 224);
}
