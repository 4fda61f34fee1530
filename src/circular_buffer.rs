use crate::error::Error;
use std::fmt;
use std::iter::FusedIterator;
use std::slice;

/// Fixed-capacity circular buffer that overwrites its oldest element once full.
///
/// All `N` slots live inline and are default-constructed up front, so inserting,
/// extracting and clearing never allocate. Live elements occupy the run of
/// `count` slots starting at `head` (mod `N`); `tail` is the next write position.
///
/// The ring is neither `Clone` nor `Copy`; it is meant to be embedded in a
/// long-lived owner and mutated in place.
///
/// ```compile_fail
/// use ringstage::BoundedRing;
///
/// let rb: BoundedRing<i32, 3> = BoundedRing::new();
/// let copy: BoundedRing<i32, 3> = rb.clone();
/// ```
///
/// A zero capacity is rejected when the ring is built:
///
/// ```compile_fail
/// use ringstage::BoundedRing;
///
/// let rb: BoundedRing<i32, 0> = BoundedRing::new();
/// assert!(rb.empty());
/// ```
///
/// ```
/// use ringstage::BoundedRing;
///
/// let mut rb: BoundedRing<i32, 3> = BoundedRing::new();
/// rb.extend([1, 2, 3, 4]);
/// assert!(rb.full());
/// assert_eq!(rb.extract_move(), Ok(2));
/// ```
pub struct BoundedRing<T, const N: usize> {
    storage: [T; N],
    head: usize,
    tail: usize,
    count: usize,
}

impl<T: Default, const N: usize> BoundedRing<T, N> {
    pub fn new() -> Self {
        let () = Self::CAPACITY_CHECK;
        Self {
            storage: std::array::from_fn(|_| T::default()),
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    /// Move the oldest element out of the ring.
    ///
    /// The vacated slot is reset to `T::default()` right away, so whatever the
    /// element owned travels with the returned value and nothing is left behind.
    pub fn extract_move(&mut self) -> Result<T, Error> {
        if self.empty() {
            return Err(Error::Underflow);
        }
        let value = std::mem::take(&mut self.storage[self.head]);
        self.commit_extract();
        Ok(value)
    }

    /// Drop every element and reset the cursors.
    ///
    /// Slots that are not live (residue of `extract_copy`) are reset as well.
    pub fn clear(&mut self) {
        for slot in self.storage.iter_mut() {
            *slot = T::default();
        }
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }
}

impl<T: Default, const N: usize> Default for BoundedRing<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> BoundedRing<T, N> {
    const CAPACITY_CHECK: () = assert!(N > 0, "BoundedRing capacity must be non-zero");

    /// Take ownership of `value` and store it at the tail, evicting the oldest
    /// element when the ring is full.
    pub fn insert_move(&mut self, value: T) {
        // Assignment drops whatever the slot held, including an evicted element.
        self.storage[self.tail] = value;
        self.commit_insert();
    }

    pub fn front(&self) -> Option<&T> {
        if self.empty() {
            return None;
        }
        Some(&self.storage[self.head])
    }

    pub fn empty(&self) -> bool {
        self.count == 0
    }

    pub fn full(&self) -> bool {
        self.count == N
    }

    pub fn size(&self) -> usize {
        self.count
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Live elements as two slices, oldest first.
    pub fn as_slices(&self) -> (&[T], &[T]) {
        if self.head + self.count <= N {
            (&self.storage[self.head..self.head + self.count], &[])
        } else {
            let wrapped = self.head + self.count - N;
            (&self.storage[self.head..], &self.storage[..wrapped])
        }
    }

    /// Iterate over live elements from oldest to newest.
    pub fn iter(&self) -> Iter<'_, T> {
        let (first, second) = self.as_slices();
        Iter {
            first: first.iter(),
            second: second.iter(),
        }
    }

    fn advance(index: usize) -> usize {
        (index + 1) % N
    }

    fn commit_insert(&mut self) {
        self.tail = Self::advance(self.tail);
        if self.count == N {
            // Full: the slot just written held the oldest element.
            self.head = Self::advance(self.head);
        } else {
            self.count += 1;
        }
    }

    fn commit_extract(&mut self) {
        self.head = Self::advance(self.head);
        self.count -= 1;
    }
}

impl<T: Clone, const N: usize> BoundedRing<T, N> {
    /// Store a copy of `value` at the tail; the caller keeps the original.
    pub fn insert_copy(&mut self, value: &T) {
        // clone_from lets types like Vec reuse the slot's existing allocation.
        self.storage[self.tail].clone_from(value);
        self.commit_insert();
    }

    /// Copy the oldest element out. The slot keeps its value until overwritten.
    pub fn extract_copy(&mut self) -> Result<T, Error> {
        if self.empty() {
            return Err(Error::Underflow);
        }
        let value = self.storage[self.head].clone();
        self.commit_extract();
        Ok(value)
    }
}

impl<T, const N: usize> Extend<T> for BoundedRing<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert_move(value);
        }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a BoundedRing<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for BoundedRing<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Borrowing iterator over the live window of a [`BoundedRing`].
#[derive(Clone)]
pub struct Iter<'a, T> {
    first: slice::Iter<'a, T>,
    second: slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.first.next().or_else(|| self.second.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.first.len() + self.second.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.second.next_back().or_else(|| self.first.next_back())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
