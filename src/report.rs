use crate::engines::indexing::node_count;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// Number of path-count digits from which only the digit count is shown.
const MAX_SHOWN_DIGITS: usize = 14;

/// Levels, leaf nodes and paths of a triangle, one per line.
pub fn short_info(num_levels: usize) -> String {
    let digits = path_count_digits(num_levels);

    let paths = if digits < MAX_SHOWN_DIGITS {
        // Fewer than 14 digits always fits in a u64.
        group_thousands(&(1u64 << num_levels).to_string())
    } else {
        format!("it has {} digits", group_thousands(&digits.to_string()))
    };

    format!(
        "Number of levels: {}\nNumber of leaf nodes: {}\nNumber of paths: {}",
        num_levels,
        group_thousands(&node_count(num_levels).to_string()),
        paths
    )
}

/// Decimal digits of `2^num_levels`.
fn path_count_digits(num_levels: usize) -> usize {
    (num_levels as f64 * std::f64::consts::LOG10_2).floor() as usize + 1
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Wall-clock statistics over repeated solver runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingReport {
    pub label: String,
    pub iterations: usize,
    pub total: Duration,
    pub min: Duration,
    pub max: Duration,
    pub avg: Duration,
}

impl fmt::Display for TimingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tested function: {}", self.label)?;
        writeln!(f, "Number of iterations: {}", self.iterations)?;
        writeln!(f, "Total time: {:10.6}", self.total.as_secs_f64())?;
        writeln!(f, "Min: {:10.6}", self.min.as_secs_f64())?;
        writeln!(f, "Avg: {:10.6}", self.avg.as_secs_f64())?;
        write!(f, "Max: {:10.6}", self.max.as_secs_f64())
    }
}

fn average(total: Duration, iterations: usize) -> Duration {
    total.div_f64(iterations.max(1) as f64)
}

/// Runs `f` `iterations` times (at least once) and returns the last result
/// with its timing.
pub fn time_solver<T, F>(label: &str, iterations: usize, mut f: F) -> Result<(T, TimingReport)>
where
    F: FnMut() -> Result<T>,
{
    let iterations = iterations.max(1);
    let mut times = Vec::with_capacity(iterations);

    let started = Instant::now();
    let mut last = f()?;
    times.push(started.elapsed());

    for _ in 1..iterations {
        let started = Instant::now();
        last = f()?;
        times.push(started.elapsed());
    }

    let total: Duration = times.iter().sum();
    let report = TimingReport {
        label: label.to_string(),
        iterations,
        total,
        min: times.iter().copied().min().unwrap_or_default(),
        max: times.iter().copied().max().unwrap_or_default(),
        avg: average(total, iterations),
    };

    Ok((last, report))
}
