use super::engine::ProgressCallback;

/// Reports generation progress through the `log` facade.
pub struct LogProgressCallback {
    /// Log every `every`-th generation at info level; the rest go to trace.
    every: usize,
}

impl LogProgressCallback {
    pub fn new(every: usize) -> Self {
        Self { every: every.max(1) }
    }
}

impl Default for LogProgressCallback {
    fn default() -> Self {
        Self::new(25)
    }
}

impl ProgressCallback for LogProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::trace!("Generation {} starting", generation + 1);
    }

    fn on_generation_complete(&mut self, generation: usize, best_score: f64, generation_best: f64) {
        if (generation + 1) % self.every == 0 {
            log::info!(
                "Generation {} complete. Best fitness: {:.4}, generation best: {:.4}",
                generation + 1,
                best_score,
                generation_best
            );
        } else {
            log::trace!(
                "Generation {} complete. Best fitness: {:.4}",
                generation + 1,
                best_score
            );
        }
    }
}
