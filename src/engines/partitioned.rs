use crate::engines::exhaustive::exhaustive;
use crate::engines::indexing::{check_shape, path_count};
use crate::error::{precondition, Result, TrianglePathError};
use crate::types::Solution;
use rayon::prelude::*;
use std::ops::Range;

/// Splits `[0, 2^num_levels)` into `worker_count` contiguous ranges.
///
/// Boundaries are `floor(k * 2^num_levels / worker_count)`, so partition
/// sizes differ by at most one and every partition is non-empty.
pub fn partition_ranges(num_levels: usize, worker_count: usize) -> Result<Vec<Range<u64>>> {
    let total_paths = match path_count(num_levels) {
        Some(count) => count,
        None => return precondition(format!("{} levels exceed the 63-bit path index space", num_levels)),
    };
    if worker_count == 0 || worker_count as u64 > total_paths {
        return precondition(format!(
            "worker count must be between 1 and {}, got {}",
            total_paths, worker_count
        ));
    }

    let limit = |k: usize| (k as u128 * total_paths as u128 / worker_count as u128) as u64;

    Ok((0..worker_count).map(|k| limit(k)..limit(k + 1)).collect())
}

/// Exhaustive search with the path-index space split across workers.
///
/// Each partition is searched independently on a dedicated pool of at most
/// `worker_count` threads; the triangle is shared read-only. Results are
/// collected in partition order and reduced by largest sum, the earliest
/// partition winning ties, so the answer does not depend on completion order.
/// Any failing partition fails the whole search.
pub fn parallel_exhaustive(
    num_levels: usize,
    max_sum: u64,
    triangle: &[u32],
    worker_count: usize,
) -> Result<Solution> {
    check_shape(num_levels, triangle)?;
    let partitions = partition_ranges(num_levels, worker_count)?;

    let threads = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(worker_count);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("exhaustive-{}", i))
        .build()
        .map_err(|e| TrianglePathError::Worker(format!("Failed to build worker pool: {}", e)))?;

    log::debug!(
        "Searching {} partitions of a {} level triangle on {} threads",
        partitions.len(),
        num_levels,
        threads
    );

    let results: Vec<Result<Solution>> = pool.install(|| {
        partitions
            .into_par_iter()
            .map(|range| exhaustive(num_levels, max_sum, triangle, range))
            .collect()
    });

    reduce_partitions(results)
}

/// Best solution over per-partition results given in partition order.
///
/// The first error fails the whole search; ties keep the earliest partition.
fn reduce_partitions(results: Vec<Result<Solution>>) -> Result<Solution> {
    let mut best: Option<Solution> = None;
    for result in results {
        let candidate = result?;
        if best.as_ref().map_or(true, |current| candidate.best_sum > current.best_sum) {
            best = Some(candidate);
        }
    }

    best.ok_or_else(|| TrianglePathError::Worker("No partition produced a result".to_string()))
}
