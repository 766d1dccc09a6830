use std::hash::Hash;

use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};

/// Applies the function to every element, preserving length and order.
pub fn map<T, U>(s: &[T], f: impl FnMut(&T) -> U) -> Vec<U> {
    s.iter().map(f).collect()
}

/// Like [`map`], but the function also receives the element's index.
pub fn map_indexed<T, U>(s: &[T], mut f: impl FnMut(usize, &T) -> U) -> Vec<U> {
    s.iter().enumerate().map(|(i, e)| f(i, e)).collect()
}

/// Keeps the elements satisfying the predicate, preserving their order.
pub fn filter<T: Clone>(s: &[T], mut pred: impl FnMut(&T) -> bool) -> Vec<T> {
    s.iter().filter(|e| pred(e)).cloned().collect()
}

/// Like [`filter`], but the predicate also receives the element's index.
pub fn filter_indexed<T: Clone>(s: &[T], mut pred: impl FnMut(usize, &T) -> bool) -> Vec<T> {
    let mut ret = Vec::new();
    for (i, e) in s.iter().enumerate() {
        if pred(i, e) {
            ret.push(e.clone());
        }
    }
    ret
}

/// Filter and map in a single pass: elements mapped to `None` are dropped,
/// the values inside `Some` are kept in order.
pub fn filter_map<T, U>(s: &[T], f: impl FnMut(&T) -> Option<U>) -> Vec<U> {
    s.iter().filter_map(f).collect()
}

/// Builds a map from the key/value pairs the function produces.
///
/// When several elements map to the same key, the last one wins.
pub fn associate<T, K, V>(s: &[T], mut f: impl FnMut(&T) -> (K, V)) -> HashMap<K, V>
where
    K: Eq + Hash,
{
    let mut ret = HashMap::new();
    for e in s {
        let (k, v) = f(e);
        ret.insert(k, v);
    }
    ret
}

/// Groups elements by the key the selector assigns them.
///
/// Within each group the elements keep their relative input order. The map
/// itself has no defined iteration order.
pub fn group_by<T, K>(s: &[T], mut key: impl FnMut(&T) -> K) -> HashMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
{
    let mut ret: HashMap<K, Vec<T>> = HashMap::new();
    for e in s {
        ret.entry(key(e)).or_default().push(e.clone());
    }
    ret
}

/// Splits into the elements satisfying the predicate and those that don't,
/// each half preserving input order.
pub fn partition<T: Clone>(s: &[T], mut pred: impl FnMut(&T) -> bool) -> (Vec<T>, Vec<T>) {
    let mut matching = Vec::new();
    let mut rest = Vec::new();
    for e in s {
        if pred(e) {
            matching.push(e.clone());
        } else {
            rest.push(e.clone());
        }
    }
    (matching, rest)
}

/// Removes duplicates, keeping the first occurrence of each element.
pub fn distinct<T>(s: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let mut seen = HashSet::new();
    let mut ret = Vec::new();
    for e in s {
        if seen.insert(e.clone()) {
            ret.push(e.clone());
        }
    }
    ret
}

/// Like [`distinct`], with uniqueness decided by the selector's key rather
/// than the element itself.
pub fn distinct_by<T, K>(s: &[T], mut key: impl FnMut(&T) -> K) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
{
    let mut seen = HashSet::new();
    let mut ret = Vec::new();
    for e in s {
        if seen.insert(key(e)) {
            ret.push(e.clone());
        }
    }
    ret
}
