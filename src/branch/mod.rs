//! Branch weight classification
//!
//! The core routine: sum the subtree rooted at index 1 and the subtree
//! rooted at index 2, then report which side is heavier. Degenerate trees
//! (empty, root-only) classify as their own outcomes instead of failing.

use std::fmt;

use tracing::debug;

use crate::tree::{LevelTree, NodeIndex};
use crate::ClassifyError;

/// Five-way outcome of comparing the root's two branches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Classification {
    /// Left branch sums strictly greater
    Left,

    /// Right branch sums strictly greater
    Right,

    /// Both branches sum to the same value
    Equal,

    /// The tree has no nodes
    Empty,

    /// The tree is a lone root with no branches to compare
    Root,
}

impl Classification {
    /// Stable string label for this outcome
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Equal => "Equal",
            Self::Empty => "Empty",
            Self::Root => "Root",
        }
    }

    /// Outcome after the two branches swap places: `Left`↔`Right`, the
    /// degenerate cases and ties are unchanged
    pub fn mirrored(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            other => other,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fail fast on the first entry that is not a finite number
fn ensure_finite(values: &[f64]) -> Result<(), ClassifyError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(ClassifyError::InvalidInput { index }),
        None => Ok(()),
    }
}

/// Sums of the left and right branches of a level-order array
///
/// A branch whose root index is out of bounds sums to 0.
///
/// # Errors
///
/// [`ClassifyError::InvalidInput`] when any entry is NaN or infinite; no
/// partial sums are computed in that case.
pub fn branch_sums(values: &[f64]) -> Result<(f64, f64), ClassifyError> {
    ensure_finite(values)?;
    let tree = LevelTree::new(values);
    Ok((
        tree.subtree_sum(NodeIndex::LEFT_BRANCH),
        tree.subtree_sum(NodeIndex::RIGHT_BRANCH),
    ))
}

/// Classify which branch of a level-order binary tree is heavier
///
/// An empty array is [`Classification::Empty`] and a single entry is
/// [`Classification::Root`]; both are successful outcomes. Otherwise the
/// two branch sums decide between [`Classification::Left`],
/// [`Classification::Right`], and [`Classification::Equal`]. A branch
/// whose root index is out of bounds contributes 0, biasing the
/// comparison toward the side that exists.
///
/// The input is only read; repeated calls with the same array return the
/// same outcome.
///
/// # Errors
///
/// [`ClassifyError::InvalidInput`] when any entry is NaN or infinite.
pub fn classify(values: &[f64]) -> Result<Classification, ClassifyError> {
    match values.len() {
        0 => Ok(Classification::Empty),
        1 => {
            ensure_finite(values)?;
            Ok(Classification::Root)
        }
        _ => {
            let (left, right) = branch_sums(values)?;
            debug!(left, right, "branch sums computed");
            Ok(compare(left, right))
        }
    }
}

/// Classify a sparse array where `None` marks an explicitly absent node
///
/// Absent-subtree convention: a `None` slot contributes nothing and its
/// children are never visited, exactly as if the index were out of
/// bounds. An absent root classifies as [`Classification::Empty`].
///
/// # Errors
///
/// [`ClassifyError::InvalidInput`] when any present entry is NaN or
/// infinite.
pub fn classify_sparse(slots: &[Option<f64>]) -> Result<Classification, ClassifyError> {
    let non_finite = slots
        .iter()
        .position(|slot| matches!(slot, Some(v) if !v.is_finite()));
    if let Some(index) = non_finite {
        return Err(ClassifyError::InvalidInput { index });
    }

    match slots {
        [] | [None] => Ok(Classification::Empty),
        [Some(_)] => Ok(Classification::Root),
        [None, ..] => Ok(Classification::Empty),
        _ => {
            let left = sparse_subtree_sum(slots, NodeIndex::LEFT_BRANCH);
            let right = sparse_subtree_sum(slots, NodeIndex::RIGHT_BRANCH);
            debug!(left, right, "sparse branch sums computed");
            Ok(compare(left, right))
        }
    }
}

fn compare(left: f64, right: f64) -> Classification {
    if left > right {
        Classification::Left
    } else if right > left {
        Classification::Right
    } else {
        Classification::Equal
    }
}

/// Work-list sum that never descends past an absent slot
fn sparse_subtree_sum(slots: &[Option<f64>], root: NodeIndex) -> f64 {
    let mut sum = 0.0;
    let mut stack = Vec::new();
    if root.in_bounds(slots.len()) {
        stack.push(root);
    }

    while let Some(node) = stack.pop() {
        let value = match slots[node.0] {
            Some(value) => value,
            None => continue, // absent node: its subtree is unreachable
        };
        sum += value;

        let (left, right) = node.children();
        if right.in_bounds(slots.len()) {
            stack.push(right);
        }
        if left.in_bounds(slots.len()) {
            stack.push(left);
        }
    }

    sum
}
