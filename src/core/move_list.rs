//! Contains the `MoveList` structure, akin to a `Vec<SQ>` but faster for our purposes.
//!
//! A [`MoveList`] stores its moves inline on the stack. It can hold one move per square,
//! which is more than any position can produce, as a legal move must land on an empty
//! square.
//!
//! [`MoveList`]: struct.MoveList.html

use super::sq::{SQ, NO_SQ};
use super::SQ_CNT;

use std::iter::{FromIterator, FusedIterator};
use std::ops::{Deref, Index};
use std::slice;

const MAX_MOVES: usize = SQ_CNT;

/// This is the list of possible moves for a current position. Think of it alike a faster
/// version of `Vec<SQ>`, as all the data is stored in the Stack rather than the Heap.
#[derive(Copy, Clone)]
pub struct MoveList {
    inner: [SQ; MAX_MOVES],
    len: usize,
}

impl Default for MoveList {
    #[inline]
    fn default() -> Self {
        MoveList {
            inner: [NO_SQ; MAX_MOVES],
            len: 0,
        }
    }
}

impl MoveList {
    /// Adds a `SQ` to the end of the list.
    ///
    /// # Safety
    ///
    /// If pushing to the list when at capacity, does nothing.
    #[inline(always)]
    pub fn push(&mut self, sq: SQ) {
        if self.len < MAX_MOVES {
            self.inner[self.len] = sq;
            self.len += 1;
        }
    }

    /// Returns true if empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use othello::MoveList;
    ///
    /// let list = MoveList::default();
    /// assert!(list.is_empty());
    /// ```
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of moves inside the list.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns if the list contains `sq`.
    #[inline]
    pub fn contains(&self, sq: SQ) -> bool {
        self.iter().any(|m| *m == sq)
    }

    /// Creates a `Vec<SQ>` from this `MoveList`.
    pub fn vec(&self) -> Vec<SQ> {
        self.iter().cloned().collect()
    }

    /// Returns the moves sorted by linear square index.
    pub fn sorted(&self) -> Vec<SQ> {
        let mut vec = self.vec();
        vec.sort();
        vec
    }

    /// Returns an iterator over the moves.
    #[inline]
    pub fn iter(&self) -> slice::Iter<SQ> {
        self.deref().iter()
    }
}

impl Deref for MoveList {
    type Target = [SQ];

    #[inline]
    fn deref(&self) -> &[SQ] {
        &self.inner[..self.len]
    }
}

impl Index<usize> for MoveList {
    type Output = SQ;

    #[inline]
    fn index(&self, index: usize) -> &SQ {
        &(**self)[index]
    }
}

impl FromIterator<SQ> for MoveList {
    fn from_iter<T: IntoIterator<Item = SQ>>(iter: T) -> Self {
        let mut list = MoveList::default();
        for sq in iter {
            list.push(sq);
        }
        list
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a SQ;
    type IntoIter = slice::Iter<'a, SQ>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = SQ;
    type IntoIter = MoveIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        MoveIter {
            list: self,
            idx: 0,
        }
    }
}

/// An owning iterator over the moves of a `MoveList`.
pub struct MoveIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveIter {
    type Item = SQ;

    #[inline]
    fn next(&mut self) -> Option<SQ> {
        if self.idx >= self.list.len {
            None
        } else {
            self.idx += 1;
            Some(self.list.inner[self.idx - 1])
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveIter {}

impl FusedIterator for MoveIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_iterate() {
        let mut list = MoveList::default();
        list.push(SQ(26));
        list.push(SQ(19));
        assert_eq!(list.len(), 2);
        assert!(list.contains(SQ(19)));
        assert!(!list.contains(SQ(20)));
        assert_eq!(list[0], SQ(26));
        assert_eq!(list.sorted(), vec![SQ(19), SQ(26)]);

        let owned: Vec<SQ> = list.into_iter().collect();
        assert_eq!(owned, vec![SQ(26), SQ(19)]);
    }

    #[test]
    fn push_past_capacity_is_ignored() {
        let mut list = MoveList::default();
        for i in 0..(MAX_MOVES + 5) {
            list.push(SQ((i % SQ_CNT) as u8));
        }
        assert_eq!(list.len(), MAX_MOVES);
    }
}
