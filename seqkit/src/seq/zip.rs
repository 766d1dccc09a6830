use seqkit_pair::Pair;

/// Pairs the two sequences up by index.
///
/// The result is as long as the shorter input; trailing elements of the
/// longer one are ignored.
pub fn zip<A: Clone, B: Clone>(a: &[A], b: &[B]) -> Vec<Pair<A, B>> {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| Pair::new(x.clone(), y.clone()))
        .collect()
}

/// Splits a sequence of pairs into the sequence of first components and the
/// sequence of second components.
pub fn unzip<A: Clone, B: Clone>(pairs: &[Pair<A, B>]) -> (Vec<A>, Vec<B>) {
    pairs
        .iter()
        .map(|p| (p.first.clone(), p.second.clone()))
        .unzip()
}
