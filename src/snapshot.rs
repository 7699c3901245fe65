//! Snapshot: an immutable point-in-time view of a sequence.
//!
//! A snapshot is a second kernel whose slices alias the originator's
//! storage segments. Creating one copies only the slice list — O(number of
//! slices), independent of element count. Neither side ever observes the
//! other's writes: every mutation path privatizes shared storage before
//! touching it.

use crate::cursor::Cursor;
use crate::error::Result;
use crate::iter::Iter;
use crate::kernel::SliceKernel;
use crate::seq::Sequence;
use crate::storage::{StorageFactory, StorageId, VecFactory};

/// An immutable view of a [`Sequence`] frozen at the moment of capture.
///
/// # Example
///
/// ```
/// use snapseq::Sequence;
///
/// let mut seq: Sequence<u64> = (0..100).collect();
/// let snap = seq.snapshot();
///
/// seq.clear();
///
/// assert!(seq.is_empty());
/// assert_eq!(snap.len(), 100);
/// assert_eq!(snap[42], 42);
/// ```
pub struct Snapshot<T, F: StorageFactory<T> = VecFactory<T>> {
    kernel: SliceKernel<T, F>,
}

impl<T: Clone, F: StorageFactory<T>> Snapshot<T, F> {
    pub(crate) fn from_kernel(kernel: SliceKernel<T, F>) -> Self {
        Self { kernel }
    }

    /// Returns the number of elements in the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.kernel.len()
    }

    /// Returns `true` if the view holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.kernel.get(index)
    }

    /// Iterates the elements front to back.
    pub fn iter(&self) -> Iter<'_, T, F::Storage> {
        Iter::new(&self.kernel.slices, self.len())
    }

    /// Returns a cursor addressing `index` within this view.
    #[inline]
    pub fn cursor(&self, index: usize) -> Cursor {
        Cursor::new(self.kernel.id(), index)
    }

    /// A cursor at the first element.
    #[inline]
    pub fn begin(&self) -> Cursor {
        self.cursor(0)
    }

    /// A cursor one past the last element.
    #[inline]
    pub fn end(&self) -> Cursor {
        self.cursor(self.len())
    }

    /// Dereferences `cursor`, refreshing its position cache.
    ///
    /// # Errors
    ///
    /// As [`Sequence::get_at`].
    pub fn get_at(&self, cursor: &mut Cursor) -> Result<&T> {
        self.kernel.deref_cursor(cursor)
    }

    /// Identifiers of the storage segments backing this view, in slice
    /// order. Intended for zero-copy export machinery that wants to track
    /// which segments it has already seen.
    pub fn storage_ids(&self) -> Vec<StorageId> {
        self.kernel.storage_ids()
    }

    /// Verifies the kernel invariants. Diagnostic; `true` in any reachable
    /// state.
    #[inline]
    pub fn integrity_check(&self) -> bool {
        self.kernel.integrity_check()
    }
}

impl<T: Clone, F: StorageFactory<T> + Clone> Snapshot<T, F> {
    /// Re-constitutes a mutable sequence from this view.
    ///
    /// The new sequence starts out sharing every storage segment with the
    /// snapshot and diverges through copy-on-write on its first writes; the
    /// snapshot itself stays frozen.
    pub fn to_sequence(&self) -> Sequence<T, F> {
        Sequence::from_kernel(self.kernel.share())
    }
}

/// O(number of slices): snapshots of snapshots share storage too.
impl<T: Clone, F: StorageFactory<T> + Clone> Clone for Snapshot<T, F> {
    fn clone(&self) -> Self {
        Self {
            kernel: self.kernel.share(),
        }
    }
}

impl<T: Clone, F: StorageFactory<T>> std::ops::Index<usize> for Snapshot<T, F> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.get(index).expect("index out of bounds")
    }
}

impl<'a, T: Clone, F: StorageFactory<T>> IntoIterator for &'a Snapshot<T, F> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, F::Storage>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone + PartialEq, F: StorageFactory<T>> PartialEq for Snapshot<T, F> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Clone + std::fmt::Debug, F: StorageFactory<T>> std::fmt::Debug for Snapshot<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
