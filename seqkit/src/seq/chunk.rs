use std::mem;

use crate::error::{Error, Result};

/// Splits the sequence into consecutive chunks of `size` elements.
///
/// The final chunk holds whatever remains, so it may be shorter than `size`
/// but is never empty.
///
/// # Errors
///
/// [`Error::InvalidChunkSize`] when `size` is zero.
pub fn chunked<T: Clone>(s: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    if size == 0 {
        return Err(Error::InvalidChunkSize);
    }
    Ok(s.chunks(size).map(<[T]>::to_vec).collect())
}

/// Splits the sequence into maximal runs within which the predicate holds
/// for every adjacent pair.
///
/// A new run starts wherever `pred(prev, curr)` is false. An empty input
/// produces no runs.
pub fn chunked_by<T: Clone>(s: &[T], mut pred: impl FnMut(&T, &T) -> bool) -> Vec<Vec<T>> {
    let mut ret = Vec::new();
    let mut run: Vec<T> = Vec::new();
    for e in s {
        if let Some(prev) = run.last() {
            if !pred(prev, e) {
                ret.push(mem::take(&mut run));
            }
        }
        run.push(e.clone());
    }
    if !run.is_empty() {
        ret.push(run);
    }
    ret
}

/// Produces windows of up to `size` elements, each starting `step` elements
/// after the previous one.
///
/// Window `i` covers `[i * step, i * step + size)` clipped to the end of the
/// sequence, and windows keep being emitted, shrinking, as long as their
/// start index lies inside the sequence. An empty input produces no windows.
///
/// # Errors
///
/// [`Error::InvalidWindowSize`] when `size` is zero,
/// [`Error::InvalidWindowStep`] when `step` is zero.
pub fn windowed<T: Clone>(s: &[T], size: usize, step: usize) -> Result<Vec<Vec<T>>> {
    if size == 0 {
        return Err(Error::InvalidWindowSize);
    }
    if step == 0 {
        return Err(Error::InvalidWindowStep);
    }
    let mut ret = Vec::new();
    let mut start = 0;
    while start < s.len() {
        let end = (start + size).min(s.len());
        ret.push(s[start..end].to_vec());
        start += step;
    }
    Ok(ret)
}
