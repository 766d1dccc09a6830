//! Helpers over hash maps.
//!
//! [`get_or_insert`] and [`append_to_group`] mutate the map they are given;
//! the rest only read it.

use std::collections::hash_map::Entry;
use std::hash::Hash;

use ahash::{HashMap, HashMapExt};

/// Returns the value stored under `key`, computing and inserting it first
/// if the key is absent.
///
/// On a miss this mutates the map: `f(&key)` is stored under `key` before
/// the reference is handed back.
pub fn get_or_insert<K, V>(m: &mut HashMap<K, V>, key: K, f: impl FnOnce(&K) -> V) -> &V
where
    K: Eq + Hash,
{
    match m.entry(key) {
        Entry::Occupied(entry) => entry.into_mut(),
        Entry::Vacant(entry) => {
            let value = f(entry.key());
            entry.insert(value)
        }
    }
}

/// Appends `value` to the vector stored under `key`, creating an empty
/// vector first if the key is absent. Mutates the map.
pub fn append_to_group<K, V>(m: &mut HashMap<K, Vec<V>>, key: K, value: V)
where
    K: Eq + Hash,
{
    m.entry(key).or_default().push(value);
}

/// Accumulates over all entries of the map, in its iteration order.
///
/// That order is unspecified but consistent within a single pass; callers
/// wanting an order-independent result should use a commutative accumulator.
pub fn fold_items<K, V, R>(m: &HashMap<K, V>, initial: R, mut f: impl FnMut(R, &K, &V) -> R) -> R {
    let mut acc = initial;
    for (k, v) in m {
        acc = f(acc, k, v);
    }
    acc
}

/// Rebuilds the map through the function: entries mapped to `Some` are kept
/// with their new key and value, entries mapped to `None` are dropped.
///
/// When two entries transform to the same key, one of them wins; which one
/// depends on the map's iteration order.
pub fn transform_map<K, V, K2, V2>(
    m: &HashMap<K, V>,
    mut f: impl FnMut(&K, &V) -> Option<(K2, V2)>,
) -> HashMap<K2, V2>
where
    K2: Eq + Hash,
{
    let mut ret = HashMap::new();
    for (k, v) in m {
        if let Some((k2, v2)) = f(k, v) {
            ret.insert(k2, v2);
        }
    }
    ret
}
