use crate::engines::indexing::{level_max_sum, node_count};
use crate::types::TriangleData;
use rand::Rng;

/// Synthetic triangle with `num_levels` levels and root node 1.
///
/// With `random` false the nodes are `1..=n` left to right, so the rightmost
/// node is the largest on every level and the all-right path reaches
/// `max_sum`. With `random` true the nodes are drawn from `10..100`.
pub fn fabricate<R: Rng>(num_levels: usize, random: bool, rng: &mut R) -> TriangleData {
    let n = node_count(num_levels);

    let triangle: Vec<u32> = if random {
        (0..n).map(|_| rng.gen_range(10..100)).collect()
    } else {
        (1..=n as u32).collect()
    };

    TriangleData {
        root_node: 1,
        num_levels,
        max_sum: level_max_sum(&triangle, num_levels),
        triangle,
    }
}
