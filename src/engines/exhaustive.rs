use crate::engines::indexing::{check_shape, level_offsets, path_count, path_sum};
use crate::error::{precondition, Result};
use crate::types::{Path, Solution};
use std::ops::Range;

/// Decodes a path index into its steps.
///
/// The zero-padded `num_levels`-bit binary representation of `number`, most
/// significant bit first, is the path.
pub fn decode_path(number: u64, num_levels: usize) -> Path {
    (0..num_levels)
        .map(|level| ((number >> (num_levels - 1 - level)) & 1) as u8)
        .collect()
}

/// Checks every path whose index lies in `range` and keeps the best one.
///
/// Stops early once a path reaches `max_sum`, since no path can exceed it.
/// Ties keep the path found first.
pub fn exhaustive(
    num_levels: usize,
    max_sum: u64,
    triangle: &[u32],
    range: Range<u64>,
) -> Result<Solution> {
    check_shape(num_levels, triangle)?;

    if range.start >= range.end {
        return precondition(format!(
            "empty path range: start {} must be below stop {}",
            range.start, range.end
        ));
    }
    let total_paths = match path_count(num_levels) {
        Some(count) => count,
        None => return precondition(format!("{} levels exceed the 63-bit path index space", num_levels)),
    };
    if range.end > total_paths {
        return precondition(format!(
            "path range end {} exceeds the {} available paths",
            range.end, total_paths
        ));
    }

    let (prev_counts, _) = level_offsets(num_levels);

    let mut grand_total = 0;
    let mut best_path = vec![0; num_levels];

    for number in range {
        let steps = decode_path(number, num_levels);
        let total = path_sum(steps.iter().copied(), &prev_counts, triangle);

        if grand_total < total {
            grand_total = total;
            best_path = steps;

            if grand_total == max_sum {
                break;
            }
        }
    }

    Ok(Solution::new(grand_total, best_path))
}

/// Exhaustive search over every path of the triangle.
pub fn exhaustive_all(num_levels: usize, max_sum: u64, triangle: &[u32]) -> Result<Solution> {
    let stop = path_count(num_levels).unwrap_or(u64::MAX);
    exhaustive(num_levels, max_sum, triangle, 0..stop)
}
