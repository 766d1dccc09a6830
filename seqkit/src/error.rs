/// Contract violations surfaced by the few partial operations.
///
/// Everything else in this crate is total: empty input is a valid, defined
/// case that produces an empty or neutral result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `reduce` and `reduce_indexed` need a first element to seed the
    /// accumulator.
    #[error("cannot reduce an empty sequence")]
    EmptySequence,
    /// `chunked` cannot make progress with a chunk size of zero.
    #[error("chunk size must be at least 1")]
    InvalidChunkSize,
    /// `windowed` windows must hold at least one element.
    #[error("window size must be at least 1")]
    InvalidWindowSize,
    /// `windowed` must advance by at least one element per window.
    #[error("window step must be at least 1")]
    InvalidWindowStep,
}

pub type Result<T> = std::result::Result<T, Error>;
