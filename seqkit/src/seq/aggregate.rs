use crate::error::{Error, Result};

/// Returns true if every element satisfies the predicate.
///
/// Vacuously true for an empty slice.
pub fn all<T>(s: &[T], pred: impl FnMut(&T) -> bool) -> bool {
    s.iter().all(pred)
}

/// Returns true if at least one element satisfies the predicate.
///
/// False for an empty slice.
pub fn any<T>(s: &[T], pred: impl FnMut(&T) -> bool) -> bool {
    s.iter().any(pred)
}

/// Accumulates left to right, starting from `initial`.
///
/// Returns `initial` unchanged for an empty slice.
pub fn fold<T, R>(s: &[T], initial: R, mut f: impl FnMut(R, &T) -> R) -> R {
    let mut acc = initial;
    for e in s {
        acc = f(acc, e);
    }
    acc
}

/// Like [`fold`], but the accumulator function also receives the index of
/// the current element.
pub fn fold_indexed<T, R>(s: &[T], initial: R, mut f: impl FnMut(usize, R, &T) -> R) -> R {
    let mut acc = initial;
    for (i, e) in s.iter().enumerate() {
        acc = f(i, acc, e);
    }
    acc
}

/// Accumulates left to right, seeded with the first element.
///
/// # Errors
///
/// [`Error::EmptySequence`] if the slice is empty.
pub fn reduce<T: Clone>(s: &[T], mut f: impl FnMut(T, &T) -> T) -> Result<T> {
    let (first, rest) = s.split_first().ok_or(Error::EmptySequence)?;
    let mut acc = first.clone();
    for e in rest {
        acc = f(acc, e);
    }
    Ok(acc)
}

/// Like [`reduce`], but the accumulator function also receives the index of
/// the current element. The seed element has index 0 and is never passed to
/// the function, so indices start at 1.
///
/// # Errors
///
/// [`Error::EmptySequence`] if the slice is empty.
pub fn reduce_indexed<T: Clone>(s: &[T], mut f: impl FnMut(usize, T, &T) -> T) -> Result<T> {
    let (first, rest) = s.split_first().ok_or(Error::EmptySequence)?;
    let mut acc = first.clone();
    for (i, e) in rest.iter().enumerate() {
        acc = f(i + 1, acc, e);
    }
    Ok(acc)
}
