use crate::error::Error;
use std::ops::{Index, IndexMut};
use std::slice;

/// Append-only vector with a hard upper bound of `MAX` elements.
///
/// Unlike [`BoundedRing`](crate::BoundedRing) it never evicts: appending past
/// `MAX` fails with [`Error::Overflow`]. The backing storage is reserved once at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitedVector<T, const MAX: usize> {
    items: Vec<T>,
}

impl<T, const MAX: usize> LimitedVector<T, MAX> {
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(MAX),
        }
    }

    /// Build from a sequence, failing if it holds more than `MAX` elements.
    ///
    /// The length is checked against the iterator's `size_hint` before anything
    /// is pulled, so exact-size sources (ranges, arrays, `Vec`) are rejected up
    /// front. Sources that under-report their length are consumed until the
    /// `MAX + 1`-th element shows up; use `TryFrom<Vec<T>>` or `TryFrom<[T; K]>`
    /// when nothing may be taken from a too-long sequence.
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Error> {
        let iter = iter.into_iter();
        if iter.size_hint().0 > MAX {
            return Err(Error::Overflow { capacity: MAX });
        }
        let mut out = Self::new();
        for value in iter {
            out.append(value)?;
        }
        Ok(out)
    }

    pub fn append(&mut self, value: T) -> Result<(), Error> {
        self.ensure_room()?;
        self.items.push(value);
        Ok(())
    }

    /// Construct the element only when there is room for it.
    pub fn append_with<F: FnOnce() -> T>(&mut self, make: F) -> Result<(), Error> {
        self.ensure_room()?;
        self.items.push(make());
        Ok(())
    }

    pub fn remove_last(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn at(&self, index: usize) -> Result<&T, Error> {
        let len = self.items.len();
        self.items.get(index).ok_or(Error::OutOfRange { index, len })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    pub fn front(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.items.first_mut()
    }

    pub fn back(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub const fn capacity(&self) -> usize {
        MAX
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn ensure_room(&self) -> Result<(), Error> {
        if self.is_full() {
            return Err(Error::Overflow { capacity: MAX });
        }
        Ok(())
    }
}

impl<T: Clone, const MAX: usize> LimitedVector<T, MAX> {
    pub fn append_copy(&mut self, value: &T) -> Result<(), Error> {
        self.append_with(|| value.clone())
    }
}

impl<T, const MAX: usize> Default for LimitedVector<T, MAX> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const MAX: usize> TryFrom<Vec<T>> for LimitedVector<T, MAX> {
    type Error = Error;

    fn try_from(mut items: Vec<T>) -> Result<Self, Self::Error> {
        if items.len() > MAX {
            return Err(Error::Overflow { capacity: MAX });
        }
        items.reserve_exact(MAX - items.len());
        Ok(Self { items })
    }
}

impl<T, const K: usize, const MAX: usize> TryFrom<[T; K]> for LimitedVector<T, MAX> {
    type Error = Error;

    fn try_from(items: [T; K]) -> Result<Self, Self::Error> {
        if K > MAX {
            return Err(Error::Overflow { capacity: MAX });
        }
        let mut out = Self::new();
        out.items.extend(items);
        Ok(out)
    }
}

impl<T, const MAX: usize> Index<usize> for LimitedVector<T, MAX> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T, const MAX: usize> IndexMut<usize> for LimitedVector<T, MAX> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<'a, T, const MAX: usize> IntoIterator for &'a LimitedVector<T, MAX> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const MAX: usize> IntoIterator for &'a mut LimitedVector<T, MAX> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, const MAX: usize> IntoIterator for LimitedVector<T, MAX> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
