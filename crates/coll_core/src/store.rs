//! The mapping-store contract consumed by views.

use std::collections::BTreeMap;
use std::hash::BuildHasher;

use indexmap::IndexMap;

/// A key/value store a view can project.
///
/// `iter` must yield pairs in an order that is stable for an unmodified
/// store; `contains_value` uses the store's own notion of value equality.
pub trait MapStore {
    type Key;
    type Value;
    type Iter<'a>: Iterator<Item = (&'a Self::Key, &'a Self::Value)>
    where
        Self: 'a;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains_value(&self, value: &Self::Value) -> bool;

    fn iter(&self) -> Self::Iter<'_>;
}

impl<K, V: PartialEq, S: BuildHasher> MapStore for IndexMap<K, V, S> {
    type Key = K;
    type Value = V;
    type Iter<'a>
        = indexmap::map::Iter<'a, K, V>
    where
        Self: 'a;

    fn len(&self) -> usize {
        IndexMap::len(self)
    }

    // IndexMap has no value index, so this is a linear scan.
    fn contains_value(&self, value: &V) -> bool {
        self.values().any(|v| v == value)
    }

    fn iter(&self) -> Self::Iter<'_> {
        IndexMap::iter(self)
    }
}

impl<K, V: PartialEq> MapStore for BTreeMap<K, V> {
    type Key = K;
    type Value = V;
    type Iter<'a>
        = std::collections::btree_map::Iter<'a, K, V>
    where
        Self: 'a;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn contains_value(&self, value: &V) -> bool {
        self.values().any(|v| v == value)
    }

    fn iter(&self) -> Self::Iter<'_> {
        BTreeMap::iter(self)
    }
}
