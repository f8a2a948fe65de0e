use std::ops::Range;

/// The window `cursor..cursor + size`, clamped to `len`.
///
/// Returns `None` when `cursor` lies past the end; a cursor equal to `len`
/// yields an empty window.
pub fn slice_window(len: usize, cursor: usize, size: usize) -> Option<Range<usize>> {
    if cursor > len {
        return None;
    }
    Some(cursor..cursor.saturating_add(size).min(len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_window() {
        assert_eq!(slice_window(20, 0, 6), Some(0..6));
        assert_eq!(slice_window(20, 6, 6), Some(6..12));
    }

    #[test]
    fn test_tail_window_is_shorter() {
        assert_eq!(slice_window(20, 18, 6), Some(18..20));
    }

    #[test]
    fn test_cursor_at_end_is_empty() {
        assert_eq!(slice_window(20, 20, 6), Some(20..20));
    }

    #[test]
    fn test_cursor_past_end() {
        assert_eq!(slice_window(20, 21, 6), None);
    }

    #[test]
    fn test_huge_size_saturates() {
        assert_eq!(slice_window(5, 2, usize::MAX), Some(2..5));
    }
}
