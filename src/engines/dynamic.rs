use crate::engines::indexing::{check_shape, level_offsets};
use crate::error::Result;
use crate::types::Solution;

/// Optimal path by collapsing levels from the bottom up.
///
/// Totals are widened to `u64` on load. For every position of every level but
/// the last, `took_right[level][j]` records whether the best continuation from
/// node `j` goes to the right child; ties go left. The path is rebuilt by
/// walking those choices from the top.
pub fn bottom_up(num_levels: usize, triangle: &[u32]) -> Result<Solution> {
    check_shape(num_levels, triangle)?;

    let (prev_counts, counts) = level_offsets(num_levels);

    let bottom = num_levels - 1;
    let start = prev_counts[bottom];
    let mut totals: Vec<u64> = triangle[start..start + counts[bottom]]
        .iter()
        .map(|&v| v as u64)
        .collect();

    let mut took_right: Vec<Vec<bool>> = vec![Vec::new(); bottom];

    for level in (0..bottom).rev() {
        let start = prev_counts[level];
        let nodes = &triangle[start..start + counts[level]];

        let mut sides = Vec::with_capacity(nodes.len());
        let collapsed = totals
            .windows(2)
            .zip(nodes)
            .map(|(pair, &node)| {
                let right = pair[1] > pair[0];
                sides.push(right);
                pair[right as usize] + node as u64
            })
            .collect();

        took_right[level] = sides;
        totals = collapsed;
    }

    // The root chooses between the two nodes of the first level.
    let first = (totals[1] > totals[0]) as u8;
    let best_sum = totals[first as usize];

    let mut path = Vec::with_capacity(num_levels);
    path.push(first);

    let mut position = first as usize;
    for sides in &took_right {
        let step = sides[position] as u8;
        path.push(step);
        position += step as usize;
    }

    Ok(Solution::new(best_sum, path))
}

/// Largest path sum only, without path reconstruction.
pub fn bottom_up_sum(num_levels: usize, triangle: &[u32]) -> Result<u64> {
    check_shape(num_levels, triangle)?;

    let (prev_counts, counts) = level_offsets(num_levels);

    let bottom = num_levels - 1;
    let start = prev_counts[bottom];
    let mut totals: Vec<u64> = triangle[start..start + counts[bottom]]
        .iter()
        .map(|&v| v as u64)
        .collect();

    for level in (0..bottom).rev() {
        let start = prev_counts[level];
        totals = totals
            .windows(2)
            .zip(&triangle[start..start + counts[level]])
            .map(|(pair, &node)| pair[0].max(pair[1]) + node as u64)
            .collect();
    }

    Ok(totals.into_iter().max().unwrap_or(0))
}
