//! Synthetic workload generation.
//!
//! Produces reproducible process sets for experiments and tests. Arrival
//! times are built from random inter-arrival gaps, so the output is
//! already in arrival order.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SchedError;
use crate::models::{ProcessId, ProcessRecord, Time};

/// Seeded random workload generator.
///
/// # Example
///
/// ```
/// use u_cpusched::workload::WorkloadGenerator;
///
/// let processes = WorkloadGenerator::new(10).with_seed(7).generate().unwrap();
/// assert_eq!(processes.len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    count: usize,
    arrival_gap: (Time, Time),
    burst: (Time, Time),
    priority: (i32, i32),
    seed: u64,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes.
    ///
    /// Defaults: gaps 0..=4, bursts 1..=10, priorities 1..=5, seed 0.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            arrival_gap: (0, 4),
            burst: (1, 10),
            priority: (1, 5),
            seed: 0,
        }
    }

    /// Sets the inclusive inter-arrival gap range.
    pub fn with_arrival_gap(mut self, min: Time, max: Time) -> Self {
        self.arrival_gap = (min, max);
        self
    }

    /// Sets the inclusive burst time range.
    pub fn with_burst(mut self, min: Time, max: Time) -> Self {
        self.burst = (min, max);
        self
    }

    /// Sets the inclusive priority range.
    pub fn with_priority(mut self, min: i32, max: i32) -> Self {
        self.priority = (min, max);
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generates the workload. Ids are 1..=count.
    ///
    /// # Errors
    /// [`SchedError::InvalidRecord`] if the configured ranges allow a
    /// negative arrival or a non-positive burst.
    pub fn generate(&self) -> Result<Vec<ProcessRecord>, SchedError> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut arrival: Time = 0;
        let mut processes = Vec::with_capacity(self.count);

        for i in 0..self.count {
            if i > 0 {
                arrival += sample(&mut rng, self.arrival_gap);
            }
            let burst = sample(&mut rng, self.burst);
            let priority = sample(&mut rng, self.priority);
            processes.push(ProcessRecord::new(
                i as ProcessId + 1,
                arrival,
                burst,
                priority,
            )?);
        }

        Ok(processes)
    }
}

/// Inclusive range sample that tolerates `min > max` by swapping.
fn sample<T>(rng: &mut StdRng, (a, b): (T, T)) -> T
where
    T: Copy + PartialOrd + rand::distr::uniform::SampleUniform,
{
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    rng.random_range(lo..=hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_count_and_ids() {
        let ps = WorkloadGenerator::new(25).with_seed(3).generate().unwrap();
        assert_eq!(ps.len(), 25);
        for (i, p) in ps.iter().enumerate() {
            assert_eq!(p.id() as usize, i + 1);
        }
    }

    #[test]
    fn test_generate_respects_ranges() {
        let ps = WorkloadGenerator::new(200)
            .with_burst(2, 6)
            .with_priority(-3, 3)
            .with_arrival_gap(1, 2)
            .with_seed(11)
            .generate()
            .unwrap();

        assert_eq!(ps[0].arrival_time(), 0);
        for w in ps.windows(2) {
            let gap = w[1].arrival_time() - w[0].arrival_time();
            assert!((1..=2).contains(&gap));
        }
        for p in &ps {
            assert!((2..=6).contains(&p.burst_time()));
            assert!((-3..=3).contains(&p.priority()));
        }
    }

    #[test]
    fn test_generate_reproducible() {
        let a = WorkloadGenerator::new(50).with_seed(42).generate().unwrap();
        let b = WorkloadGenerator::new(50).with_seed(42).generate().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_rejects_zero_burst() {
        let err = WorkloadGenerator::new(5).with_burst(0, 0).generate();
        assert!(matches!(err, Err(SchedError::InvalidRecord { id: 1, .. })));
    }

    #[test]
    fn test_generate_empty() {
        assert!(WorkloadGenerator::new(0).generate().unwrap().is_empty());
    }
}
