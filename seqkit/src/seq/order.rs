/// Reverses the slice in place by swapping symmetric index pairs.
///
/// This is the one sequence operation that mutates its input.
pub fn reverse<T>(s: &mut [T]) {
    if s.is_empty() {
        return;
    }
    let mut i = 0;
    let mut j = s.len() - 1;
    while i < j {
        s.swap(i, j);
        i += 1;
        j -= 1;
    }
}

/// A new vector with the elements in reverse order; the input is untouched.
pub fn reversed<T: Clone>(s: &[T]) -> Vec<T> {
    s.iter().rev().cloned().collect()
}
