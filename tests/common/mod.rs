#![allow(dead_code)]

use rand::Rng;
use trianglepath::data::fabricate;
use trianglepath::engines::indexing::{leaf_indices, level_offsets, path_sum};
use trianglepath::{Path, Solution, TriangleData};

/// Triangle with a known best path and sum.
pub struct PlantedCase {
    pub name: &'static str,
    pub data: TriangleData,
    pub path: Path,
    pub best_sum: u64,
    /// Whether `max_sum` is reachable, i.e. a perfect fitness exists.
    pub feasible: bool,
}

/// Cases with a unique optimum: consecutive nodes (all-right path wins), a
/// heavy all-left path, heavy random paths planted in consecutive and random
/// triangles, and a single path of ones in a triangle of zeros.
pub fn planted_cases<R: Rng>(num_levels: usize, rng: &mut R) -> Vec<PlantedCase> {
    let (prev, _) = level_offsets(num_levels);
    let mut cases = Vec::new();

    let consecutive = fabricate(num_levels, false, rng);
    // Larger than any fabricated node, so a planted path is the unique optimum.
    let heavy = consecutive.triangle.len() as u32 + 100;
    let heavy_sum = heavy as u64 * num_levels as u64;

    cases.push(PlantedCase {
        name: "consecutive",
        best_sum: consecutive.max_sum,
        data: consecutive.clone(),
        path: vec![1; num_levels],
        feasible: true,
    });

    let all_left = vec![0; num_levels];
    let mut left = consecutive.clone();
    plant(&mut left.triangle, &all_left, &prev, heavy);
    left.max_sum = heavy_sum;
    cases.push(PlantedCase {
        name: "heavy left",
        data: left,
        path: all_left,
        best_sum: heavy_sum,
        feasible: true,
    });

    for (name, random) in [("planted consecutive", false), ("planted random", true)] {
        let mut data = fabricate(num_levels, random, rng);
        let path: Path = (0..num_levels).map(|_| rng.gen_range(0..2)).collect();
        plant(&mut data.triangle, &path, &prev, heavy);
        data.max_sum = heavy_sum;
        cases.push(PlantedCase {
            name,
            data,
            path,
            best_sum: heavy_sum,
            feasible: true,
        });
    }

    let path: Path = (0..num_levels).map(|_| rng.gen_range(0..2)).collect();
    let mut zeros = consecutive;
    zeros.triangle.iter_mut().for_each(|v| *v = 0);
    plant(&mut zeros.triangle, &path, &prev, 1);
    zeros.max_sum = heavy_sum;
    cases.push(PlantedCase {
        name: "ones in zeros",
        data: zeros,
        path,
        best_sum: num_levels as u64,
        feasible: false,
    });

    cases
}

fn plant(triangle: &mut [u32], path: &[u8], prev: &[usize], value: u32) {
    for index in leaf_indices(path.iter().copied(), prev) {
        triangle[index] = value;
    }
}

/// Asserts the path has the right shape and reproduces the reported sum.
pub fn assert_valid(solution: &Solution, data: &TriangleData) {
    assert_eq!(solution.path.len(), data.num_levels);
    assert!(solution.path.iter().all(|&step| step <= 1));

    let (prev, _) = level_offsets(data.num_levels);
    assert_eq!(
        path_sum(solution.path.iter().copied(), &prev, &data.triangle),
        solution.best_sum,
        "path {:?} does not reproduce sum {}",
        solution.path,
        solution.best_sum
    );
}

/// Best sum 14 through the all-right path; root 1.
pub fn small_triangle() -> TriangleData {
    TriangleData::prepare(1, vec![vec![3, 4], vec![1, 2, 3], vec![4, 5, 6, 7]])
        .expect("fixture is well formed")
}
