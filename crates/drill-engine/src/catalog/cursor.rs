/// A forward-only cursor over a non-empty, ordered list of levels.
///
/// The cursor always points at a level; [`LevelCursor::advance`] refuses to move
/// past the last one, which is how a catalog-driven session detects its end.
///
/// ```
/// use drill_engine::catalog::LevelCursor;
///
/// let mut cursor = LevelCursor::new(vec!["a", "b"]).unwrap();
/// assert_eq!((cursor.position(), *cursor.current()), (1, "a"));
/// assert!(cursor.advance());
/// assert!(cursor.is_last());
/// assert!(!cursor.advance());
/// assert_eq!(*cursor.current(), "b");
/// ```
#[derive(Debug, Clone)]
pub struct LevelCursor<T> {
    levels: Vec<T>,
    index: usize,
}

impl<T> LevelCursor<T> {
    /// Returns `None` for an empty level list.
    #[must_use]
    pub fn new(levels: Vec<T>) -> Option<Self> {
        if levels.is_empty() {
            return None;
        }
        Some(Self { levels, index: 0 })
    }

    #[must_use]
    pub fn current(&self) -> &T {
        &self.levels[self.index]
    }

    /// 1-based position of the current level.
    #[must_use]
    pub fn position(&self) -> usize {
        self.index + 1
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always `false`: a cursor is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.levels.len()
    }

    /// Moves to the next level. Returns `false` (and stays put) on the last level.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_has_no_cursor() {
        assert!(LevelCursor::<u32>::new(vec![]).is_none());
    }

    #[test]
    fn test_single_level_is_immediately_last() {
        let mut cursor = LevelCursor::new(vec![7]).unwrap();
        assert!(cursor.is_last());
        assert!(!cursor.advance());
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.len(), 1);
    }

    #[test]
    fn test_walks_every_level_in_order() {
        let mut cursor = LevelCursor::new(vec![1, 2, 3]).unwrap();
        let mut seen = vec![*cursor.current()];
        while cursor.advance() {
            seen.push(*cursor.current());
        }
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(cursor.position(), 3);
    }
}
