use crate::error::{precondition, Result};

/// Node offsets of a flattened triangle.
///
/// Returns `(prev_counts, counts)` where `counts[i] = i + 2` is the number of
/// nodes on level `i` and `prev_counts[i]` is the number of nodes on all
/// levels above it, i.e. the index of the first node of level `i`.
pub fn level_offsets(num_levels: usize) -> (Vec<usize>, Vec<usize>) {
    let counts: Vec<usize> = (0..num_levels).map(|level| level + 2).collect();

    let mut prev_counts = Vec::with_capacity(num_levels);
    let mut total = 0;
    for count in &counts {
        prev_counts.push(total);
        total += count;
    }

    (prev_counts, counts)
}

/// Total number of leaf nodes in a triangle with `num_levels` levels.
pub fn node_count(num_levels: usize) -> usize {
    (3 + num_levels) * num_levels / 2
}

/// Number of distinct root-to-leaf paths, `2^num_levels`.
///
/// `None` when the count does not fit in a `u64`.
pub fn path_count(num_levels: usize) -> Option<u64> {
    u32::try_from(num_levels)
        .ok()
        .and_then(|shift| 1u64.checked_shl(shift))
}

/// Checks that `triangle` holds exactly the nodes of `num_levels` levels.
pub fn check_shape(num_levels: usize, triangle: &[u32]) -> Result<()> {
    if num_levels == 0 {
        return precondition("number of levels must be positive");
    }
    let expected = node_count(num_levels);
    if triangle.len() != expected {
        return precondition(format!(
            "triangle with {} levels must have {} nodes, got {}",
            num_levels,
            expected,
            triangle.len()
        ));
    }
    Ok(())
}

/// Translates steps into indexes of the visited leaf nodes.
pub fn leaf_indices<I>(steps: I, prev_counts: &[usize]) -> Vec<usize>
where
    I: IntoIterator,
    I::Item: Into<usize>,
{
    let mut position = 0;
    steps
        .into_iter()
        .zip(prev_counts)
        .map(|(step, offset)| {
            position += step.into();
            offset + position
        })
        .collect()
}

/// Sum of the nodes visited by `steps`.
pub fn path_sum<I>(steps: I, prev_counts: &[usize], triangle: &[u32]) -> u64
where
    I: IntoIterator,
    I::Item: Into<usize>,
{
    leaf_indices(steps, prev_counts)
        .into_iter()
        .map(|index| triangle[index] as u64)
        .sum()
}

/// Sum of every node on each level.
pub fn level_totals(triangle: &[u32], num_levels: usize) -> Vec<u64> {
    let (prev_counts, counts) = level_offsets(num_levels);
    prev_counts
        .iter()
        .zip(&counts)
        .map(|(&start, &count)| triangle[start..start + count].iter().map(|&v| v as u64).sum())
        .collect()
}

/// Sum of the largest node on each level: the theoretical (not necessarily
/// feasible) maximum of any path sum.
pub fn level_max_sum(triangle: &[u32], num_levels: usize) -> u64 {
    let (prev_counts, counts) = level_offsets(num_levels);
    prev_counts
        .iter()
        .zip(&counts)
        .map(|(&start, &count)| {
            triangle[start..start + count]
                .iter()
                .copied()
                .max()
                .unwrap_or(0) as u64
        })
        .sum()
}
