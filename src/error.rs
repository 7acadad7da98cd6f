use thiserror::Error;

/// Failures surfaced by [`solve`](crate::solve).
#[derive(Debug, Error, PartialEq)]
pub enum SolveError<E> {
    /// The defective bound must be at least 1.
    #[error("defective bound must be at least 1")]
    InvalidBound,

    /// A splitting round failed to shrink the candidate pool. Signals a
    /// defect in the partition math and is never retried.
    #[error("splitting round left the pool at {after} items (was {before})")]
    Stalled { before: usize, after: usize },

    /// The test capability itself failed; propagated unmodified.
    #[error(transparent)]
    Oracle(#[from] E),
}
