use std::convert::Infallible;

/// Test capability over subsets of the candidate pool.
///
/// `test` must return `Ok(true)` exactly when `subset` contains at least one
/// defective item. Answers must be deterministic: the same subset yields the
/// same answer regardless of call order. `&mut self` allows adapters and
/// connection-holding oracles to keep state, not to change answers.
pub trait Oracle<T> {
    type Error;

    fn test(&mut self, subset: &[T]) -> Result<bool, Self::Error>;
}

/// Any `FnMut(&[T]) -> bool` closure is an oracle that cannot fail.
impl<T, F> Oracle<T> for F
where
    F: FnMut(&[T]) -> bool,
{
    type Error = Infallible;

    fn test(&mut self, subset: &[T]) -> Result<bool, Infallible> {
        Ok(self(subset))
    }
}

/// Wraps an oracle and tallies how often it is consulted.
///
/// Keeps call counting out of the oracle itself and out of ambient state,
/// so query-cost analysis stays an explicit, opt-in concern.
#[derive(Debug)]
pub struct Counting<O> {
    inner: O,
    calls: u64,
}

impl<O> Counting<O> {
    pub fn new(inner: O) -> Self {
        Self { inner, calls: 0 }
    }

    pub fn calls(&self) -> u64 {
        self.calls
    }

    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<T, O> Oracle<T> for Counting<O>
where
    O: Oracle<T>,
{
    type Error = O::Error;

    fn test(&mut self, subset: &[T]) -> Result<bool, O::Error> {
        self.calls += 1;
        self.inner.test(subset)
    }
}
