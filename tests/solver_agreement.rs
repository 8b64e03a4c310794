mod common;

use common::{assert_valid, planted_cases, small_triangle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use trianglepath::config::{AppConfig, GeneticConfig, SolverMethod};
use trianglepath::data::fabricate;
use trianglepath::engines::{
    bottom_up, bottom_up_sum, evolutionary, exhaustive_all, parallel_exhaustive, solve,
};
use trianglepath::engines::genetic::population_limit;
use trianglepath::TrianglePathError;
use trianglepath::{Solution, TriangleData};

/// Up to 100 individuals, fewer when the triangle has too few paths.
fn genetic_config(levels: usize, seed: u64) -> GeneticConfig {
    let population_size = population_limit(levels).map_or(100, |limit| limit.min(100)).max(2);
    GeneticConfig {
        population_size,
        max_generations: 1000,
        seed: Some(seed),
        ..Default::default()
    }
}

#[test]
fn test_small_triangle_all_solvers_agree() {
    let data = small_triangle();
    let expected = Solution::new(14, vec![1, 1, 1]);

    let dp = bottom_up(data.num_levels, &data.triangle).unwrap();
    let brute = exhaustive_all(data.num_levels, data.max_sum, &data.triangle).unwrap();
    let parallel = parallel_exhaustive(data.num_levels, data.max_sum, &data.triangle, 3).unwrap();
    let genetic = evolutionary(data.num_levels, data.max_sum, &data.triangle, &genetic_config(data.num_levels, 42)).unwrap();

    assert_eq!(dp, expected);
    assert_eq!(brute, expected);
    assert_eq!(parallel, expected);
    assert_eq!(genetic, expected);
    assert_eq!(data.total_with_root(dp.best_sum), 15);
}

#[test]
fn test_single_level_picks_larger_leaf() {
    let data = TriangleData::prepare(4, vec![vec![5, 9]]).unwrap();
    let config = AppConfig::default();

    for method in SolverMethod::ALL {
        let solution = solve(method, &data, &config).unwrap();
        assert_eq!(solution, Solution::new(9, vec![1]), "method {}", method);
    }
}

#[test]
fn test_exact_solvers_agree_on_random_triangles() {
    let mut rng = StdRng::seed_from_u64(2018);

    for levels in 1..=12 {
        for _ in 0..3 {
            let data = fabricate(levels, true, &mut rng);

            let dp = bottom_up(levels, &data.triangle).unwrap();
            let brute = exhaustive_all(levels, data.max_sum, &data.triangle).unwrap();

            assert_valid(&dp, &data);
            assert_valid(&brute, &data);
            assert_eq!(dp.best_sum, brute.best_sum, "levels {}", levels);
            assert_eq!(bottom_up_sum(levels, &data.triangle).unwrap(), dp.best_sum);
            assert!(dp.best_sum <= data.max_sum);

            for workers in [1usize, 2, 3, 7, 16] {
                let workers = workers.min(1 << levels);
                let parallel = parallel_exhaustive(levels, data.max_sum, &data.triangle, workers).unwrap();
                assert_valid(&parallel, &data);
                assert_eq!(parallel.best_sum, dp.best_sum, "levels {} workers {}", levels, workers);
            }
        }
    }
}

#[test]
fn test_genetic_never_beats_the_optimum() {
    let mut rng = StdRng::seed_from_u64(34);

    for levels in 2..=10 {
        let data = fabricate(levels, true, &mut rng);
        let config = GeneticConfig {
            max_generations: 20,
            ..genetic_config(levels, levels as u64)
        };

        let dp = bottom_up(levels, &data.triangle).unwrap();
        let genetic = evolutionary(levels, data.max_sum, &data.triangle, &config).unwrap();

        assert_valid(&genetic, &data);
        assert!(genetic.best_sum <= dp.best_sum);
    }
}

#[test]
fn test_planted_paths_are_recovered() {
    let mut rng = StdRng::seed_from_u64(7);

    for levels in [1usize, 2, 5, 8] {
        for case in planted_cases(levels, &mut rng) {
            let data = &case.data;

            let dp = bottom_up(levels, &data.triangle).unwrap();
            let brute = exhaustive_all(levels, data.max_sum, &data.triangle).unwrap();
            let parallel = parallel_exhaustive(levels, data.max_sum, &data.triangle, 4.min(1 << levels)).unwrap();

            for (solver, solution) in [("dp", &dp), ("exhaustive", &brute), ("parallel", &parallel)] {
                assert_eq!(solution.best_sum, case.best_sum, "{} on {} ({} levels)", solver, case.name, levels);
                assert_eq!(solution.path, case.path, "{} on {} ({} levels)", solver, case.name, levels);
            }

            if case.feasible {
                let genetic = evolutionary(levels, data.max_sum, &data.triangle, &genetic_config(levels, levels as u64)).unwrap();
                assert_eq!(genetic.best_sum, case.best_sum, "genetic on {} ({} levels)", case.name, levels);
                assert_eq!(genetic.path, case.path);
            }
        }
    }
}

#[test]
fn test_oversized_population_is_a_precondition_error() {
    let data = small_triangle();
    let config = GeneticConfig { population_size: 100, seed: Some(42), ..Default::default() };

    let result = evolutionary(data.num_levels, data.max_sum, &data.triangle, &config);
    assert!(matches!(result, Err(TrianglePathError::Precondition(_))));
}

#[test]
fn test_dispatch_fits_population_to_small_triangles() {
    let data = small_triangle();
    let mut config = AppConfig::default();
    config.genetic.seed = Some(42);
    config.genetic.max_generations = 1000;
    assert_eq!(config.genetic.population_size, 100);

    let solution = solve(SolverMethod::Genetic, &data, &config).unwrap();
    assert_eq!(solution, Solution::new(14, vec![1, 1, 1]));
}

#[test]
fn test_dispatch_matches_direct_calls() {
    let mut rng = StdRng::seed_from_u64(99);
    let data = fabricate(9, true, &mut rng);

    let mut config = AppConfig::default();
    config.partition.worker_count = 5;

    let dp = bottom_up(data.num_levels, &data.triangle).unwrap();
    for method in [SolverMethod::Dp, SolverMethod::Exhaustive, SolverMethod::Parallel] {
        let solution = solve(method, &data, &config).unwrap();
        assert_eq!(solution.best_sum, dp.best_sum, "method {}", method);
        assert_valid(&solution, &data);
    }
}

#[test]
fn test_malformed_triangle_is_rejected_by_every_solver() {
    let triangle = [1, 2, 3];

    assert!(bottom_up(2, &triangle).is_err());
    assert!(bottom_up_sum(2, &triangle).is_err());
    assert!(exhaustive_all(2, 10, &triangle).is_err());
    assert!(parallel_exhaustive(2, 10, &triangle, 2).is_err());
    assert!(evolutionary(2, 10, &triangle, &GeneticConfig::default()).is_err());
}
