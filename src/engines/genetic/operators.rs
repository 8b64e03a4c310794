use crate::engines::genetic::chromosome::{Chromosome, Population};
use crate::engines::indexing::path_count;
use crate::error::{precondition, Result, TrianglePathError};
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;

fn check_probability(name: &str, probability: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&probability) {
        return precondition(format!("{} must be between 0 and 1, got {}", name, probability));
    }
    Ok(())
}

/// Generate `population_size` uniformly random chromosomes.
///
/// The population must be smaller than the number of distinct bit patterns,
/// otherwise duplicates are guaranteed.
pub fn generate<R: Rng>(
    population_size: usize,
    chromosome_length: usize,
    rng: &mut R,
) -> Result<Population> {
    if let Some(patterns) = path_count(chromosome_length) {
        if population_size as u64 >= patterns {
            return precondition(format!(
                "population size {} must be below the {} distinct chromosomes of length {}",
                population_size, patterns, chromosome_length
            ));
        }
    }

    Ok((0..population_size)
        .map(|_| (0..chromosome_length).map(|_| rng.gen::<bool>()).collect())
        .collect())
}

/// Roulette wheel selection: resample with replacement, probability
/// proportional to fitness, then shuffle so pairing for crossover carries no
/// positional bias.
pub fn select<R: Rng>(
    population: &[Chromosome],
    scores: &[f64],
    rng: &mut R,
) -> Result<Population> {
    if population.len() != scores.len() {
        return precondition(format!(
            "{} scores given for {} chromosomes",
            scores.len(),
            population.len()
        ));
    }

    let wheel = WeightedIndex::new(scores).map_err(|e| {
        TrianglePathError::Precondition(format!(
            "roulette wheel needs non-negative scores with a positive sum: {}",
            e
        ))
    })?;

    let mut indexes: Vec<usize> = (0..population.len()).map(|_| wheel.sample(rng)).collect();
    indexes.shuffle(rng);

    Ok(indexes.into_iter().map(|i| population[i].clone()).collect())
}

/// Single-point crossover over consecutive pairs (rows `2k` and `2k + 1`).
///
/// Each pair is recombined with `probability`; the breakpoint lies in
/// `1..len`, so every child keeps at least one bit of each parent.
pub fn crossover<R: Rng>(
    mut population: Population,
    probability: f64,
    rng: &mut R,
) -> Result<Population> {
    check_probability("crossover probability", probability)?;
    if population.len() % 2 != 0 {
        return precondition(format!(
            "crossover needs an even population, got {}",
            population.len()
        ));
    }

    for pair in population.chunks_exact_mut(2) {
        let len = pair[0].len().min(pair[1].len());
        if len <= 1 || !rng.gen_bool(probability) {
            continue;
        }

        let point = rng.gen_range(1..len);
        let (first, second) = pair.split_at_mut(1);
        first[0][point..len].swap_with_slice(&mut second[0][point..len]);
    }

    Ok(population)
}

/// Flip every bit independently with `probability`.
pub fn mutate<R: Rng>(
    mut population: Population,
    probability: f64,
    rng: &mut R,
) -> Result<Population> {
    check_probability("mutation probability", probability)?;

    for chromosome in population.iter_mut() {
        for bit in chromosome.iter_mut() {
            if rng.gen_bool(probability) {
                *bit = !*bit;
            }
        }
    }

    Ok(population)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let population = generate(10, 6, &mut rng).unwrap();

        assert_eq!(population.len(), 10);
        assert!(population.iter().all(|c| c.len() == 6));
    }

    #[test]
    fn test_generate_rejects_saturated_population() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate(8, 3, &mut rng).is_err());
        assert!(generate(6, 3, &mut rng).is_ok());
    }

    #[test]
    fn test_select_prefers_fit_chromosomes() {
        let mut rng = StdRng::seed_from_u64(3);
        let population = vec![vec![false, false], vec![true, true]];

        let selected = select(&population, &[0.0, 1.0], &mut rng).unwrap();
        assert!(selected.iter().all(|c| c == &vec![true, true]));
    }

    #[test]
    fn test_select_rejects_zero_scores() {
        let mut rng = StdRng::seed_from_u64(3);
        let population = vec![vec![false], vec![true]];

        assert!(select(&population, &[0.0, 0.0], &mut rng).is_err());
        assert!(select(&population, &[1.0], &mut rng).is_err());
    }

    #[test]
    fn test_crossover_swaps_suffixes() {
        let mut rng = StdRng::seed_from_u64(11);
        let population = vec![vec![false; 8], vec![true; 8]];

        let children = crossover(population, 1.0, &mut rng).unwrap();

        // Children are complementary and each mixes both parents.
        for bit in 0..8 {
            assert_ne!(children[0][bit], children[1][bit]);
        }
        assert!(!children[0][0] && children[0][7]);
        assert!(children[1][0] && !children[1][7]);
    }

    #[test]
    fn test_crossover_rejects_odd_population() {
        let mut rng = StdRng::seed_from_u64(11);
        assert!(crossover(vec![vec![true; 4]; 3], 0.5, &mut rng).is_err());
    }

    #[test]
    fn test_mutate_flips_everything_at_probability_one() {
        let mut rng = StdRng::seed_from_u64(5);
        let mutated = mutate(vec![vec![false, true, false]], 1.0, &mut rng).unwrap();
        assert_eq!(mutated, vec![vec![true, false, true]]);
    }
}
