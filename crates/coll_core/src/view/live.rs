use std::cell::{Ref, RefCell};
use std::fmt;
use std::iter::FusedIterator;
use std::rc::Weak;

use ahash::RandomState;
use log::debug;

use crate::dict::Dict;
use crate::error::CollectionResult;
use crate::errors;

/// Values of a [`SharedDict`](crate::dict::SharedDict), observed live.
///
/// The view holds a `Weak` reference: it never keeps the dict alive, and
/// every call fails with an invalid-operation error once the dict is gone or
/// while it is mutably borrowed.
pub struct LiveValueView<K, V, S = RandomState> {
    store: Weak<RefCell<Dict<K, V, S>>>,
}

impl<K, V, S> Clone for LiveValueView<K, V, S> {
    fn clone(&self) -> Self {
        Self {
            store: Weak::clone(&self.store),
        }
    }
}

impl<K, V, S> LiveValueView<K, V, S> {
    pub(crate) fn new(store: Weak<RefCell<Dict<K, V, S>>>) -> Self {
        Self { store }
    }

    fn with_store<R>(&self, f: impl FnOnce(&Dict<K, V, S>) -> R) -> CollectionResult<R> {
        let rc = self.store.upgrade().ok_or_else(errors::store_dropped)?;
        let dict = borrow_store(&rc)?;
        Ok(f(&*dict))
    }

    /// Whether the backing dict still exists.
    pub fn is_alive(&self) -> bool {
        self.store.strong_count() > 0
    }

    pub fn len(&self) -> CollectionResult<usize> {
        self.with_store(Dict::len)
    }

    pub fn is_empty(&self) -> CollectionResult<bool> {
        self.with_store(Dict::is_empty)
    }

    /// Starts a new pass. Nothing is read until the first `next`.
    pub fn iter(&self) -> LiveValues<K, V, S> {
        LiveValues {
            store: Weak::clone(&self.store),
            index: 0,
            expected_ver: None,
            done: false,
        }
    }

    pub fn add(&mut self, _value: V) -> CollectionResult<()> {
        Err(errors::read_only_collection())
    }

    pub fn remove(&mut self, _value: &V) -> CollectionResult<bool> {
        Err(errors::read_only_collection())
    }

    pub fn clear(&mut self) -> CollectionResult<()> {
        Err(errors::read_only_collection())
    }
}

impl<K, V: PartialEq, S> LiveValueView<K, V, S> {
    pub fn contains(&self, value: &V) -> CollectionResult<bool> {
        self.with_store(|dict| dict.contains_value(value))
    }
}

impl<K, V: Clone, S> LiveValueView<K, V, S> {
    /// Collects one complete pass.
    pub fn to_vec(&self) -> CollectionResult<Vec<V>> {
        self.iter().collect()
    }

    pub fn copy_to(&self, dest: &mut [V], index: usize) -> CollectionResult<()> {
        let values = self.to_vec()?;
        errors::check_copy_target(dest.len(), index, values.len())?;
        dest[index..index + values.len()].clone_from_slice(&values);
        Ok(())
    }
}

impl<K, V, S> fmt::Debug for LiveValueView<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveValueView")
            .field("alive", &self.is_alive())
            .finish()
    }
}

fn borrow_store<K, V, S>(
    rc: &RefCell<Dict<K, V, S>>,
) -> CollectionResult<Ref<'_, Dict<K, V, S>>> {
    rc.try_borrow().map_err(|_| errors::store_busy())
}

/// Cursor over a [`LiveValueView`] pass.
///
/// The dict's version is captured on the first step; if a later step sees a
/// different version the pass yields one `collection_modified` error and
/// ends. Values are cloned out, since no borrow outlives a step.
pub struct LiveValues<K, V, S = RandomState> {
    store: Weak<RefCell<Dict<K, V, S>>>,
    index: usize,
    expected_ver: Option<u64>,
    done: bool,
}

impl<K, V: Clone, S> LiveValues<K, V, S> {
    fn step(&mut self) -> CollectionResult<Option<V>> {
        let rc = self.store.upgrade().ok_or_else(errors::store_dropped)?;
        let dict = borrow_store(&rc)?;
        let expected = *self.expected_ver.get_or_insert(dict.version());
        if dict.version() != expected {
            debug!(
                "event=live_values module=view status=modified index={} expected_ver={} ver={}",
                self.index,
                expected,
                dict.version()
            );
            return Err(errors::collection_modified());
        }
        let value = dict.get_index(self.index).map(|(_, v)| v.clone());
        self.index += 1;
        Ok(value)
    }
}

impl<K, V: Clone, S> Iterator for LiveValues<K, V, S> {
    type Item = CollectionResult<V>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.step() {
            Ok(Some(v)) => Some(Ok(v)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<K, V: Clone, S> FusedIterator for LiveValues<K, V, S> {}
