//! # Level-Order Branch Classification
//!
//! This library answers one question about a binary tree stored in
//! breadth-first (level-order) array form: which of the two subtrees
//! hanging off the root carries the greater sum of node values?
//!
//! ## Core Algorithm
//!
//! 1. **Implicit decoding**: index 0 is the root; node i's children live at
//!    2i+1 and 2i+2, bounded by the array length — no node objects
//! 2. **Work-list sums**: each branch is summed via an explicit index
//!    stack, so call depth never tracks tree size
//! 3. **Five-way outcome**: `Left`, `Right`, `Equal`, plus the degenerate
//!    `Empty` and `Root` cases
//!
//! ## Usage Example
//!
//! ```
//! use branchwise::{classify, Classification};
//!
//! let outcome = classify(&[3.0, 6.0, 2.0, 9.0, -1.0, 10.0])?;
//! assert_eq!(outcome, Classification::Left);
//! # Ok::<(), branchwise::ClassifyError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules
pub mod branch; // Branch sums and the five-way classification
pub mod tree; // Level-order encoding: index arithmetic and traversal

// Re-exports for convenience
pub use branch::{branch_sums, classify, classify_sparse, Classification};
pub use tree::{LevelTree, NodeIndex, SubtreeWalk};

use thiserror::Error;

/// Errors produced when an input sequence violates the numeric contract
///
/// Degenerate trees (empty, root-only) are normal [`Classification`]
/// outcomes, never errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyError {
    /// Entry at `index` is NaN or infinite
    #[error("invalid input: non-finite value at index {index}")]
    InvalidInput {
        /// Position of the offending entry in the sequence
        index: usize,
    },
}
