//! Key/lock families.
//!
//! Each family pairs a display color with a lock-matching predicate. The two
//! configurations are `static` and shared by reference by every key and lock
//! tile of that family.

use crate::grid::Grid;
use crate::tile::Tile;
use crate::types::{Rgb, BLUE_KEY_COLOR, YELLOW_KEY_COLOR};

/// Which lock predicate a key clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockMatcher {
    Lock1,
    Lock2,
}

impl LockMatcher {
    #[inline]
    pub fn check(self, tile: &Tile) -> bool {
        match self {
            LockMatcher::Lock1 => tile.is_lock1(),
            LockMatcher::Lock2 => tile.is_lock2(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash)]
pub struct KeyConfig {
    color: Rgb,
    first: bool,
    matcher: LockMatcher,
}

impl KeyConfig {
    pub const fn new(color: Rgb, first: bool, matcher: LockMatcher) -> Self {
        Self {
            color,
            first,
            matcher,
        }
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// `true` for the family-1 (yellow) configuration.
    pub fn is_first(&self) -> bool {
        self.first
    }

    pub fn matcher(&self) -> LockMatcher {
        self.matcher
    }

    /// Replace every lock of this family with air. Returns how many were removed.
    pub fn remove_locks(&self, grid: &mut Grid) -> usize {
        let matcher = self.matcher;
        grid.remove_matching(|tile| matcher.check(tile))
    }
}

pub static YELLOW_KEY: KeyConfig = KeyConfig::new(YELLOW_KEY_COLOR, true, LockMatcher::Lock1);

pub static BLUE_KEY: KeyConfig = KeyConfig::new(BLUE_KEY_COLOR, false, LockMatcher::Lock2);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_are_distinct() {
        assert!(YELLOW_KEY.is_first());
        assert!(!BLUE_KEY.is_first());
        assert_ne!(YELLOW_KEY.color(), BLUE_KEY.color());
        assert_eq!(YELLOW_KEY.matcher(), LockMatcher::Lock1);
        assert_eq!(BLUE_KEY.matcher(), LockMatcher::Lock2);
    }

    #[test]
    fn matcher_only_accepts_its_own_locks() {
        let lock1 = Tile::Lock(&YELLOW_KEY);
        let lock2 = Tile::Lock(&BLUE_KEY);
        let key1 = Tile::Key(&YELLOW_KEY);

        assert!(LockMatcher::Lock1.check(&lock1));
        assert!(!LockMatcher::Lock1.check(&lock2));
        assert!(!LockMatcher::Lock1.check(&key1));
        assert!(LockMatcher::Lock2.check(&lock2));
        assert!(!LockMatcher::Lock2.check(&lock1));
        assert!(!LockMatcher::Lock2.check(&Tile::Air));
    }
}
