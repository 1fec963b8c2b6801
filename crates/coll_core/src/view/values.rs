use std::fmt;
use std::iter::FusedIterator;

use crate::collection::Collection;
use crate::error::CollectionResult;
use crate::errors;
use crate::store::MapStore;

/// The values of a [`MapStore`], without copying them.
///
/// Every call forwards to the store: `len` is the store's count, `contains`
/// is the store's own value lookup (a linear scan for stores without a value
/// index), and each `iter` call starts a new pass over the store's current
/// pairs in the store's order.
pub struct ValueView<'a, S> {
    store: &'a S,
}

impl<S> Clone for ValueView<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for ValueView<'_, S> {}

impl<'a, S: MapStore> ValueView<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn contains(&self, value: &S::Value) -> bool {
        self.store.contains_value(value)
    }

    pub fn iter(&self) -> Values<'a, S> {
        Values {
            inner: self.store.iter(),
        }
    }
}

impl<S: MapStore> Collection for ValueView<'_, S> {
    type Item = S::Value;

    fn len(&self) -> usize {
        self.store.len()
    }

    fn contains(&self, item: &S::Value) -> bool {
        self.store.contains_value(item)
    }

    fn is_read_only(&self) -> bool {
        true
    }

    fn add(&mut self, _item: S::Value) -> CollectionResult<()> {
        Err(errors::read_only_collection())
    }

    fn remove(&mut self, _item: &S::Value) -> CollectionResult<bool> {
        Err(errors::read_only_collection())
    }

    fn clear(&mut self) -> CollectionResult<()> {
        Err(errors::read_only_collection())
    }

    fn copy_to(&self, dest: &mut [S::Value], index: usize) -> CollectionResult<()>
    where
        S::Value: Clone,
    {
        errors::check_copy_target(dest.len(), index, self.store.len())?;
        for (slot, value) in dest[index..].iter_mut().zip(self.iter()) {
            slot.clone_from(value);
        }
        Ok(())
    }
}

impl<S> fmt::Debug for ValueView<'_, S>
where
    S: MapStore,
    S::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, S: MapStore> IntoIterator for ValueView<'a, S> {
    type Item = &'a S::Value;
    type IntoIter = Values<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, S: MapStore> IntoIterator for &ValueView<'a, S> {
    type Item = &'a S::Value;
    type IntoIter = Values<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One pass over a [`ValueView`]; steps the store's own pair iterator.
pub struct Values<'a, S: MapStore + 'a> {
    inner: S::Iter<'a>,
}

impl<'a, S: MapStore + 'a> Iterator for Values<'a, S> {
    type Item = &'a S::Value;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, S> DoubleEndedIterator for Values<'a, S>
where
    S: MapStore + 'a,
    S::Iter<'a>: DoubleEndedIterator,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<'a, S> ExactSizeIterator for Values<'a, S>
where
    S: MapStore + 'a,
    S::Iter<'a>: ExactSizeIterator,
{
}

impl<'a, S> FusedIterator for Values<'a, S>
where
    S: MapStore + 'a,
    S::Iter<'a>: FusedIterator,
{
}

impl<'a, S> Clone for Values<'a, S>
where
    S: MapStore + 'a,
    S::Iter<'a>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}
