use std::ops::Range;

use tracing::trace;

use crate::oracle::Oracle;

/// Half-open index window over a block of candidates.
///
/// Invariant: as long as probes are answered truthfully, the window always
/// contains at least one defective index, and every index left of `start`
/// has been proven clean.
#[derive(Debug)]
pub struct Bisect {
    start: usize,
    end: usize,
}

impl Bisect {
    pub fn new(len: usize) -> Self {
        Self { start: 0, end: len }
    }

    /// Next probe: the left half of the current window. `None` once the
    /// window has narrowed to a single index.
    pub fn next(&self) -> Option<Range<usize>> {
        if self.end - self.start > 1 {
            Some(self.start..self.mid())
        } else {
            None
        }
    }

    /// The probe contained a defective; keep the left half.
    pub fn positive(&mut self) {
        self.end = self.mid();
    }

    /// The probe was clean; the defective sits in the right half.
    pub fn negative(&mut self) {
        self.start = self.mid();
    }

    fn mid(&self) -> usize {
        (self.start + self.end) / 2
    }

    pub fn finish(&self) -> Option<usize> {
        if self.end - self.start == 1 {
            Some(self.start)
        } else {
            None
        }
    }

    // ----- Getter & Setter

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }
}

/// Isolates one defective item inside `candidates` by bisection.
///
/// Precondition: the caller already knows `oracle.test(candidates)` is true.
/// Returns the defective item together with the prefix of `candidates`
/// proven clean along the way; candidates right of the defective stay
/// undetermined. Costs at most `ceil(log2(candidates.len()))` oracle calls.
///
/// # Panics
///
/// Panics if `candidates` is empty.
pub fn locate<'a, T, O>(
    oracle: &mut O,
    candidates: &'a [T],
) -> Result<(&'a T, &'a [T]), O::Error>
where
    O: Oracle<T>,
{
    let mut window = Bisect::new(candidates.len());

    while let Some(probe) = window.next() {
        if oracle.test(&candidates[probe])? {
            window.positive();
        } else {
            window.negative();
        }
        trace!(start = window.start(), end = window.end());
    }

    let at = window
        .finish()
        .expect("a non-empty block narrows to a single candidate");

    Ok((&candidates[at], &candidates[..at]))
}
