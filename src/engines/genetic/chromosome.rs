/// Binary chromosome for the genetic engine.
///
/// A chromosome is a fixed-length sequence of bits. For the triangle problem
/// each bit is one step of a path (`false` = left, `true` = right), so a
/// chromosome and a path have the same shape.
///
/// # Why bits instead of paths directly?
///
/// - **Crossover**: swapping suffixes is plain slice copying
/// - **Mutation**: flipping a bit never produces an invalid path
pub type Chromosome = Vec<bool>;

/// Rows are individuals, columns are bits.
pub type Population = Vec<Chromosome>;

/// Chromosome as path steps (`0`/`1`).
pub fn to_steps(chromosome: &[bool]) -> Vec<u8> {
    chromosome.iter().map(|&bit| bit as u8).collect()
}
