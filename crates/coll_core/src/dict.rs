//! Insertion-ordered dictionary used as the reference backing store.
//!
//! `ver` is bumped by every structural change (new key, removal, clear) so
//! that live views can detect modification between iteration steps.
//! Overwriting the value of an existing key is not structural.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;

use ahash::RandomState;
use indexmap::{Equivalent, IndexMap};

use crate::collection::Collection;
use crate::error::CollectionResult;
use crate::errors;
use crate::store::MapStore;
use crate::view::{LiveValueView, ValueView};

/// Deterministic hasher state, so iteration order never depends on seeds.
pub fn fast_hasher() -> RandomState {
    RandomState::with_seeds(0, 0, 0, 0)
}

pub struct Dict<K, V, S = RandomState> {
    map: IndexMap<K, V, S>,
    ver: u64,
}

impl<K, V> Dict<K, V> {
    pub fn new() -> Self {
        Self::with_hasher(fast_hasher())
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            map: IndexMap::with_capacity_and_hasher(cap, fast_hasher()),
            ver: 0,
        }
    }
}

impl<K, V> Default for Dict<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> Dict<K, V, S> {
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            map: IndexMap::with_hasher(hasher),
            ver: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Structural modification counter.
    pub fn version(&self) -> u64 {
        self.ver
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, K, V> {
        self.map.iter()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, K, V> {
        self.map.keys()
    }

    /// Entry at insertion position `index`.
    pub fn get_index(&self, index: usize) -> Option<(&K, &V)> {
        self.map.get_index(index)
    }

    pub fn clear(&mut self) {
        if !self.map.is_empty() {
            self.map.clear();
            self.ver += 1;
        }
    }

    /// Read-only view of the current values. Holds no data of its own.
    pub fn values(&self) -> ValueView<'_, Self>
    where
        V: PartialEq,
    {
        ValueView::new(self)
    }
}

impl<K, V, S> Dict<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Adds a new entry; an existing key is rejected and the dict is unchanged.
    pub fn add(&mut self, key: K, value: V) -> CollectionResult<()> {
        if self.map.contains_key(&key) {
            return Err(errors::key_duplicate());
        }
        self.map.insert(key, value);
        self.ver += 1;
        Ok(())
    }

    /// Inserts or overwrites, returning the previous value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let (_, old) = self.map.insert_full(key, value);
        if old.is_none() {
            self.ver += 1;
        }
        old
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.map.get(key)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.map.get_mut(key)
    }

    /// Like `get`, but a missing key is a missing-key error.
    pub fn get_or_err<Q>(&self, key: &Q) -> CollectionResult<&V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.map.get(key).ok_or_else(errors::key_not_found)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.map.contains_key(key)
    }

    /// Removes `key`, keeping the order of the remaining entries.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let old = self.map.shift_remove(key);
        if old.is_some() {
            self.ver += 1;
        }
        old
    }

    pub fn try_remove<Q>(&mut self, key: &Q) -> CollectionResult<V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.remove(key).ok_or_else(errors::key_not_found)
    }
}

impl<K: Hash + Eq, V> Dict<K, V> {
    /// Builds a dict from pairs, failing on the first repeated key.
    pub fn try_from_pairs(pairs: impl IntoIterator<Item = (K, V)>) -> CollectionResult<Self> {
        let pairs = pairs.into_iter();
        let mut dict = Self::with_capacity(pairs.size_hint().0);
        for (k, v) in pairs {
            dict.add(k, v)?;
        }
        Ok(dict)
    }
}

impl<K, V: PartialEq, S> Dict<K, V, S> {
    /// Linear scan over the current entries.
    pub fn contains_value(&self, value: &V) -> bool {
        self.map.values().any(|v| v == value)
    }
}

impl<K, V: PartialEq, S> MapStore for Dict<K, V, S> {
    type Key = K;
    type Value = V;
    type Iter<'a>
        = indexmap::map::Iter<'a, K, V>
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.map.len()
    }

    fn contains_value(&self, value: &V) -> bool {
        Dict::contains_value(self, value)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.map.iter()
    }
}

impl<K, V, S> Collection for Dict<K, V, S>
where
    K: Hash + Eq + Clone,
    V: PartialEq + Clone,
    S: BuildHasher,
{
    type Item = (K, V);

    fn len(&self) -> usize {
        self.map.len()
    }

    fn contains(&self, item: &(K, V)) -> bool {
        self.map.get(&item.0).is_some_and(|v| *v == item.1)
    }

    fn is_read_only(&self) -> bool {
        false
    }

    fn add(&mut self, item: (K, V)) -> CollectionResult<()> {
        Dict::add(self, item.0, item.1)
    }

    /// Removes the entry only when both key and value match.
    fn remove(&mut self, item: &(K, V)) -> CollectionResult<bool> {
        if !self.contains(item) {
            return Ok(false);
        }
        Ok(Dict::remove(self, &item.0).is_some())
    }

    fn clear(&mut self) -> CollectionResult<()> {
        Dict::clear(self);
        Ok(())
    }

    fn copy_to(&self, dest: &mut [(K, V)], index: usize) -> CollectionResult<()> {
        errors::check_copy_target(dest.len(), index, self.map.len())?;
        for (slot, (k, v)) in dest[index..].iter_mut().zip(self.map.iter()) {
            *slot = (k.clone(), v.clone());
        }
        Ok(())
    }
}

impl<K: Clone, V: Clone, S: Clone> Clone for Dict<K, V, S> {
    fn clone(&self) -> Self {
        Self {
            map: self.map.clone(),
            ver: self.ver,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for Dict<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.map.iter()).finish()
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for Dict<K, V> {
    /// Later pairs overwrite earlier ones with the same key.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Self::new();
        dict.extend(iter);
        dict
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> Extend<(K, V)> for Dict<K, V, S> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a Dict<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

/// Shared handle to a [`Dict`] for callers that keep a view across
/// mutations. Cloning the handle shares the same dict.
pub struct SharedDict<K, V, S = RandomState> {
    inner: Rc<RefCell<Dict<K, V, S>>>,
}

impl<K, V, S> Clone for SharedDict<K, V, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<K, V> Default for SharedDict<K, V> {
    fn default() -> Self {
        Self::new(Dict::new())
    }
}

impl<K, V, S> SharedDict<K, V, S> {
    pub fn new(dict: Dict<K, V, S>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(dict)),
        }
    }

    /// Panics if the dict is currently borrowed mutably, like `RefCell::borrow`.
    pub fn borrow(&self) -> Ref<'_, Dict<K, V, S>> {
        self.inner.borrow()
    }

    /// Panics if the dict is currently borrowed, like `RefCell::borrow_mut`.
    pub fn borrow_mut(&self) -> RefMut<'_, Dict<K, V, S>> {
        self.inner.borrow_mut()
    }

    /// Non-owning live view; it stops working once every handle is dropped.
    pub fn values(&self) -> LiveValueView<K, V, S> {
        LiveValueView::new(Rc::downgrade(&self.inner))
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for SharedDict<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_borrow() {
            Ok(dict) => f.debug_tuple("SharedDict").field(&*dict).finish(),
            Err(_) => f.write_str("SharedDict(<borrowed>)"),
        }
    }
}
