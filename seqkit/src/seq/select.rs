/// All elements except the first `n`. Empty when `n >= s.len()`.
pub fn drop<T: Clone>(s: &[T], n: usize) -> Vec<T> {
    if n >= s.len() {
        return Vec::new();
    }
    s[n..].to_vec()
}

/// All elements except the last `n`. Empty when `n >= s.len()`.
pub fn drop_last<T: Clone>(s: &[T], n: usize) -> Vec<T> {
    if n >= s.len() {
        return Vec::new();
    }
    s[..s.len() - n].to_vec()
}

/// Removes the maximal prefix satisfying the predicate.
///
/// The predicate stops being consulted at the first element that fails it.
pub fn drop_while<T: Clone>(s: &[T], mut pred: impl FnMut(&T) -> bool) -> Vec<T> {
    let start = s.iter().position(|e| !pred(e)).unwrap_or(s.len());
    s[start..].to_vec()
}

/// Removes the maximal suffix satisfying the predicate, scanning from the
/// end.
pub fn drop_last_while<T: Clone>(s: &[T], mut pred: impl FnMut(&T) -> bool) -> Vec<T> {
    let end = s.iter().rposition(|e| !pred(e)).map_or(0, |i| i + 1);
    s[..end].to_vec()
}

/// The first `n` elements. The whole sequence when `n >= s.len()`.
pub fn take<T: Clone>(s: &[T], n: usize) -> Vec<T> {
    if n >= s.len() {
        return s.to_vec();
    }
    s[..n].to_vec()
}

/// The last `n` elements. The whole sequence when `n >= s.len()`.
pub fn take_last<T: Clone>(s: &[T], n: usize) -> Vec<T> {
    if n >= s.len() {
        return s.to_vec();
    }
    s[s.len() - n..].to_vec()
}

/// The maximal prefix satisfying the predicate.
pub fn take_while<T: Clone>(s: &[T], mut pred: impl FnMut(&T) -> bool) -> Vec<T> {
    let end = s.iter().position(|e| !pred(e)).unwrap_or(s.len());
    s[..end].to_vec()
}

/// The maximal suffix satisfying the predicate, scanning from the end.
pub fn take_last_while<T: Clone>(s: &[T], mut pred: impl FnMut(&T) -> bool) -> Vec<T> {
    let start = s.iter().rposition(|e| !pred(e)).map_or(0, |i| i + 1);
    s[start..].to_vec()
}
