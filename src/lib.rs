//! Adaptive group testing via generalized binary splitting.
//!
//! Given a pool of candidate items, an upper bound `d` on how many of them
//! are defective, and a test capability that reports whether a subset
//! contains at least one defective item, [`solve`] identifies every
//! defective item in O(d log(n / d)) tests instead of testing the pool one
//! item at a time. The oracle is the only expensive operation; each call's
//! subset depends on the previous answer, so the search is strictly
//! sequential.
//!
//! ```
//! use group_split::{solve, Counting};
//!
//! let pool: Vec<u32> = (0..100).collect();
//! let mut oracle = Counting::new(|xs: &[u32]| xs.contains(&7) || xs.contains(&61));
//!
//! let mut defects = solve(&mut oracle, pool, 2).unwrap();
//! defects.sort_unstable();
//!
//! assert_eq!(defects, vec![7, 61]);
//! assert!(oracle.calls() < 100);
//! ```

mod bisect;
mod error;
mod oracle;
mod split;

pub use bisect::{locate, Bisect};
pub use error::SolveError;
pub use oracle::{Counting, Oracle};
pub use split::solve;
