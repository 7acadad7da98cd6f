use std::slice;

use tracing::debug;

use crate::bisect;
use crate::error::SolveError;
use crate::oracle::Oracle;

/// Identifies every defective item in `items` with O(d log(n / d)) oracle
/// calls, where `d` is an upper bound on the number of defectives.
///
/// `items` must not contain duplicates; their order determines which block
/// each round tests, so identical inputs always replay the same calls.
/// `d` shapes the per-round block size and is decremented as defectives are
/// confirmed; it is not enforced as a cap, so a pool with more than `d`
/// defectives is still fully resolved, just with more calls than the bound
/// promises. An empty pool resolves to an empty result.
pub fn solve<T, O>(
    oracle: &mut O,
    items: Vec<T>,
    d: usize,
) -> Result<Vec<T>, SolveError<O::Error>>
where
    O: Oracle<T>,
{
    if d < 1 {
        return Err(SolveError::InvalidBound);
    }

    let mut unsure = items;
    let mut defects = Vec::new();
    let mut d = d;

    loop {
        let n = unsure.len();

        // Once the pool is this small, block tests no longer beat testing
        // each remaining candidate on its own. Terminal mode.
        if n <= 1 || n + 2 <= 2 * d {
            for item in unsure {
                if oracle.test(slice::from_ref(&item))? {
                    defects.push(item);
                }
            }
            return Ok(defects);
        }

        // n >= 2 and n >= 2d - 1, so l >= 2 and the block fits the pool.
        let l = n - d + 1;
        let block = 1usize << (l.ilog2() - 1);
        debug!(n, d, block);

        if oracle.test(&unsure[..block])? {
            let (_, cleared) = bisect::locate(oracle, &unsure[..block])?;
            let cleared = cleared.len();

            unsure.drain(..cleared);
            defects.push(unsure.remove(0));
            d = d.saturating_sub(1);
        } else {
            unsure.drain(..block);
        }

        if unsure.len() >= n {
            return Err(SolveError::Stalled {
                before: n,
                after: unsure.len(),
            });
        }
    }
}
