use serde::{Deserialize, Serialize};

/// One binary decision per level, top to bottom: 0 = left child, 1 = right child.
pub type Path = Vec<u8>;

/// Best path found by a solver.
///
/// `best_sum` covers the triangle below the root only; the root node is
/// added by the caller when reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub best_sum: u64,
    pub path: Path,
}

impl Solution {
    pub fn new(best_sum: u64, path: Path) -> Self {
        Self { best_sum, path }
    }

    /// Path rendered as a string of `0`/`1` characters.
    pub fn path_string(&self) -> String {
        self.path.iter().map(|step| if *step == 0 { '0' } else { '1' }).collect()
    }
}

/// Prepared triangle beneath a root node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriangleData {
    pub root_node: u32,
    pub num_levels: usize,
    /// Sum of the maximum node of every level. Upper bound on any path sum,
    /// not necessarily reachable.
    pub max_sum: u64,
    /// Leaf nodes, left to right and top to bottom.
    pub triangle: Vec<u32>,
}
