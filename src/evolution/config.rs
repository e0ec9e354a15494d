//! Evolution configuration.
//!
//! [`EvolutionConfig`] holds the four numeric parameters that drive the
//! generation loop.

use crate::error::{EvolveError, Result};

/// Configuration for an evolution run.
///
/// There are no engine-defined defaults for the core parameters: the caller
/// supplies all four to [`new`](EvolutionConfig::new).
///
/// # Examples
///
/// ```
/// use u_evolve::evolution::EvolutionConfig;
///
/// let config = EvolutionConfig::new(60, 6, 0.2, 100).with_parallel(true);
/// assert!(config.validate().is_ok());
///
/// let bad = EvolutionConfig::new(4, 5, 0.2, 100);
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionConfig {
    /// Number of offspring produced each generation.
    pub population_size: usize,

    /// Number of fittest offspring kept as the next generation's parents.
    ///
    /// Also the size of the initial, randomly generated population.
    pub survivors: usize,

    /// Probability that an offspring is mutated (0.0–1.0).
    pub mutation_probability: f64,

    /// Number of generations to run. Zero is legal.
    pub generations: usize,

    /// Whether to evaluate fitness in parallel using rayon.
    ///
    /// Only has an effect with the `parallel` feature. Results are identical
    /// either way.
    #[cfg_attr(feature = "serde", serde(default))]
    pub parallel: bool,
}

impl EvolutionConfig {
    /// Creates a configuration. Parallel evaluation is off.
    pub fn new(
        population_size: usize,
        survivors: usize,
        mutation_probability: f64,
        generations: usize,
    ) -> Self {
        Self {
            population_size,
            survivors,
            mutation_probability,
            generations,
            parallel: false,
        }
    }

    /// Sets the number of offspring per generation.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the survivor count.
    pub fn with_survivors(mut self, n: usize) -> Self {
        self.survivors = n;
        self
    }

    /// Sets the mutation probability.
    ///
    /// The value is not clamped; [`validate`](Self::validate) rejects values
    /// outside `[0, 1]`.
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Enables or disables parallel fitness evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// Selecting more survivors than there are offspring is rejected rather
    /// than clamped.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(EvolveError::Configuration(
                "population_size must be at least 1".into(),
            ));
        }
        if self.survivors == 0 {
            return Err(EvolveError::Configuration(
                "survivors must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(EvolveError::Configuration(format!(
                "mutation_probability ({}) must be within [0, 1]",
                self.mutation_probability
            )));
        }
        if self.survivors > self.population_size {
            return Err(EvolveError::Configuration(format!(
                "survivors ({}) must not exceed population_size ({})",
                self.survivors, self.population_size
            )));
        }
        Ok(())
    }
}
