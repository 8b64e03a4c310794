use crate::data::connectors::TriangleValidator;
use crate::engines::indexing::{level_offsets, level_totals};
use crate::error::Result;
use crate::types::TriangleData;

impl TriangleData {
    /// Flatten validated levels and precompute the maximum sum.
    pub fn prepare(root_node: u32, levels: Vec<Vec<u32>>) -> Result<Self> {
        TriangleValidator::validate_levels(&levels, 2)?;

        let num_levels = levels.len();
        let max_sum = levels
            .iter()
            .map(|level| level.iter().copied().max().unwrap_or(0) as u64)
            .sum();
        let triangle = levels.into_iter().flatten().collect();

        Ok(Self {
            root_node,
            num_levels,
            max_sum,
            triangle,
        })
    }

    /// Sum of all nodes on each level.
    pub fn level_totals(&self) -> Vec<u64> {
        level_totals(&self.triangle, self.num_levels)
    }

    /// Nodes of level `level`, left to right, or `None` past the last level.
    pub fn level(&self, level: usize) -> Option<&[u32]> {
        let (prev_counts, counts) = level_offsets(self.num_levels);
        let start = *prev_counts.get(level)?;
        self.triangle.get(start..start + counts.get(level)?)
    }

    /// Total including the root node.
    pub fn total_with_root(&self, best_sum: u64) -> u64 {
        best_sum + self.root_node as u64
    }
}
