//! Tests for arrow directions and their displacement vectors

#[cfg(test)]
mod tests {
    use arrowboard::spatial::Direction;

    // Tests displacement vectors use a y-down coordinate system
    // Verified by swapping the Up and Down offsets
    #[test]
    fn test_offsets_are_y_down_unit_steps() {
        assert_eq!(Direction::Up.offset(), [0, -1]);
        assert_eq!(Direction::Down.offset(), [0, 1]);
        assert_eq!(Direction::Left.offset(), [-1, 0]);
        assert_eq!(Direction::Right.offset(), [1, 0]);
    }

    // Tests index mapping follows enumeration order and wraps
    #[test]
    fn test_from_index_follows_enumeration_order() {
        for (index, direction) in Direction::ALL.iter().enumerate() {
            assert_eq!(Direction::from_index(index), *direction);
        }
        assert_eq!(Direction::from_index(6), Direction::Left);
    }

    // Tests axis classification used by the orthogonal collision pass
    // Verified by making is_perpendicular_to compare directions for equality
    #[test]
    fn test_perpendicular_pairs() {
        assert!(Direction::Up.is_perpendicular_to(Direction::Left));
        assert!(Direction::Right.is_perpendicular_to(Direction::Down));
        assert!(!Direction::Up.is_perpendicular_to(Direction::Down));
        assert!(!Direction::Left.is_perpendicular_to(Direction::Left));
    }

    #[test]
    fn test_opposite_cancels_offset() {
        for direction in Direction::ALL {
            let [dx, dy] = direction.offset();
            let [ox, oy] = direction.opposite().offset();
            assert_eq!([dx + ox, dy + oy], [0, 0]);
        }
    }

    #[test]
    fn test_glyphs_and_names() {
        let glyphs: String = Direction::ALL.iter().map(|d| d.glyph()).collect();
        assert_eq!(glyphs, "^v<>");
        assert_eq!(Direction::Left.to_string(), "left");
    }
}
