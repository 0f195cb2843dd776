//! Streaming payoff statistics.
//!
//! This module implements Welford's online algorithm for the running mean
//! and variance of simulated payoffs. The simulation loop pushes one payoff
//! at a time, so memory use is constant in the path count, and independent
//! accumulators (one per parallel shard) combine via [`StreamingStats::merge`].

/// Running mean and variance accumulator.
///
/// Uses Welford's online update, which stays numerically stable for long
/// sequences where the naive sum-of-squares formulation cancels
/// catastrophically.
///
/// # References
///
/// - Welford, B. P. (1962). "Note on a Method for Calculating Corrected
///   Sums of Squares and Products". Technometrics.
/// - Chan, T. F., Golub, G. H. & LeVeque, R. J. (1983). "Algorithms for
///   Computing the Sample Variance". The American Statistician.
///
/// # Examples
///
/// ```rust
/// use vanopt_pricing::mc::StreamingStats;
///
/// let mut stats = StreamingStats::new();
/// for x in [1.0, 2.0, 3.0, 4.0, 5.0] {
///     stats.push(x);
/// }
///
/// assert_eq!(stats.count(), 5);
/// assert!((stats.mean() - 3.0).abs() < 1e-12);
/// assert!((stats.sample_variance() - 2.5).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct StreamingStats {
    /// Number of values pushed so far.
    count: usize,
    /// Running mean.
    mean: f64,
    /// Sum of squared deviations from the running mean.
    m2: f64,
}

impl StreamingStats {
    /// Creates an empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a value into the accumulator.
    #[inline]
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;
    }

    /// Returns the number of values pushed so far.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the running mean, or 0.0 if no values have been pushed.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the unbiased sample variance (n - 1 denominator).
    ///
    /// Returns 0.0 when fewer than two values have been pushed.
    #[inline]
    pub fn sample_variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    /// Returns the standard error of the mean: `sqrt(variance / n)`.
    ///
    /// Returns 0.0 when fewer than two values have been pushed.
    #[inline]
    pub fn std_error(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            (self.sample_variance() / self.count as f64).sqrt()
        }
    }

    /// Merges another accumulator into this one.
    ///
    /// Uses Chan's pairwise combination formula, which weights each side by
    /// its count. Merging the per-shard accumulators of a sharded run in a
    /// fixed order yields a deterministic combined estimate.
    pub fn merge(&mut self, other: &StreamingStats) {
        if other.count == 0 {
            return;
        }

        let total = self.count + other.count;
        let delta = other.mean - self.mean;

        self.mean += delta * (other.count as f64 / total as f64);
        self.m2 +=
            other.m2 + delta * delta * (self.count as f64 * other.count as f64 / total as f64);
        self.count = total;
    }
}
