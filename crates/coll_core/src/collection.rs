use crate::error::CollectionResult;

/// Common surface of the library's collections.
///
/// Read-only implementors return an unsupported-operation error from `add`,
/// `remove` and `clear` and leave their contents untouched.
pub trait Collection {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, item: &Self::Item) -> bool;

    fn is_read_only(&self) -> bool;

    fn add(&mut self, item: Self::Item) -> CollectionResult<()>;

    /// Returns whether an item was removed.
    fn remove(&mut self, item: &Self::Item) -> CollectionResult<bool>;

    fn clear(&mut self) -> CollectionResult<()>;

    /// Clones every item into `dest`, starting at `dest[index]`.
    fn copy_to(&self, dest: &mut [Self::Item], index: usize) -> CollectionResult<()>
    where
        Self::Item: Clone;
}
