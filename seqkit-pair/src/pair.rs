use std::fmt;

/// An ordered 2-tuple.
///
/// This is the element type produced by zipping two sequences together and
/// consumed when unzipping them again. It is a plain value type: both
/// components are public and the pair owns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Pair<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Pair { first, second }
    }

    /// Split the pair back into its components.
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }

    /// A new pair with the components in the opposite order.
    pub fn swap(self) -> Pair<B, A> {
        Pair {
            first: self.second,
            second: self.first,
        }
    }

    pub fn as_refs(&self) -> Pair<&A, &B> {
        Pair {
            first: &self.first,
            second: &self.second,
        }
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Pair { first, second }
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(pair: Pair<A, B>) -> Self {
        (pair.first, pair.second)
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Pair<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}
