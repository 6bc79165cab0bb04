//! A fixed-size set of digits, stored as a 9-bit mask.
//!
//! The solver deals with sets of digits constantly: one per cell in the
//! candidate tracker, one per house when checking a grid for duplicates.
//! A bitmask keeps the copy-per-branch discipline of the search cheap and
//! cannot confuse digits with anything else.

use super::Digit;
use std::fmt;

/// A set of the digits 1 to 9.
///
/// Iteration yields digits in ascending order.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct DigitSet(u16);

impl DigitSet {
    /// The empty set.
    pub const NONE: DigitSet = DigitSet(0);
    /// The set containing all nine digits.
    pub const ALL: DigitSet = DigitSet(0o777);

    /// Returns whether `digit` is in the set.
    pub fn contains(self, digit: Digit) -> bool {
        self.0 & (1 << digit.as_index()) != 0
    }

    /// Adds `digit` to the set.
    pub fn insert(&mut self, digit: Digit) {
        self.0 |= 1 << digit.as_index();
    }

    /// Removes `digit` from the set.
    pub fn remove(&mut self, digit: Digit) {
        self.0 &= !(1 << digit.as_index());
    }

    /// Returns the number of digits in the set.
    pub fn len(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Returns whether the set contains no digits.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns an iterator over the contained digits, lowest first.
    pub fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the digits contained in a [`DigitSet`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Digit::from_index(idx))
    }
}

impl fmt::Display for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.iter() {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_remove_contains() {
        let mut set = DigitSet::NONE;
        set.insert(Digit::new(4));
        set.insert(Digit::new(9));
        assert!(set.contains(Digit::new(4)));
        assert!(!set.contains(Digit::new(5)));
        assert_eq!(set.len(), 2);

        set.remove(Digit::new(4));
        assert!(!set.contains(Digit::new(4)));
        // removing an absent digit changes nothing
        set.remove(Digit::new(4));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn iterates_ascending() {
        let mut set = DigitSet::NONE;
        for &digit in &[7, 1, 3] {
            set.insert(Digit::new(digit));
        }
        let digits: Vec<u8> = set.iter().map(Digit::get).collect();
        assert_eq!(digits, [1, 3, 7]);
    }

    #[test]
    fn all_and_none() {
        assert_eq!(DigitSet::ALL.len(), 9);
        assert!(DigitSet::NONE.is_empty());
        assert_eq!(format!("{}", DigitSet::ALL), "123456789");
    }
}
