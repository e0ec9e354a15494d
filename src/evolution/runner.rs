//! Evolution driver.
//!
//! [`Evolution`] is the run's state machine: `start` validates the
//! configuration and generates the initial population (Uninitialized →
//! Initialized → `Running(0)`), every `step` applies one generation, and the
//! run is `Done` after `generations` steps. [`EvolutionRunner`] and
//! [`evolve`] drive it to completion.

use super::config::EvolutionConfig;
use super::step::{generation_step, GenerationStats};
use super::types::Species;
use crate::error::{EvolveError, Result};
use crate::random::{generate_n, Generator};
use tracing::{debug_span, trace};

/// Where an [`Evolution`] is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The next step will run generation `i` (0-based).
    Running(usize),
    /// Every configured generation has run.
    Done,
}

/// Result of an evolution run.
#[derive(Debug, PartialEq)]
pub struct EvolutionReport<G> {
    /// Generator state after the last draw of the run.
    pub generator: Generator,

    /// First member of the final population.
    ///
    /// After at least one generation this is the fittest survivor. With zero
    /// generations it is the first randomly generated genotype, with no
    /// fitness guarantee.
    pub best: G,

    /// Fitness of `best`, or `None` if no generation ran.
    pub best_fitness: Option<f64>,

    /// Number of generations executed.
    pub generations: usize,

    /// Offspring pool summary for each generation.
    pub history: Vec<GenerationStats>,
}

/// A run in progress.
///
/// # Usage
///
/// ```ignore
/// let mut evolution = Evolution::start(&species, &config, Generator::from_seed(42))?;
/// while let Phase::Running(_) = evolution.phase() {
///     evolution = evolution.step()?;
///     println!("{:?}", evolution.history().last());
/// }
/// let report = evolution.finish()?;
/// ```
pub struct Evolution<'a, S: Species> {
    species: &'a S,
    config: &'a EvolutionConfig,
    generator: Generator,
    population: Vec<S::Genotype>,
    best_fitness: Option<f64>,
    generation: usize,
    history: Vec<GenerationStats>,
}

impl<'a, S: Species> Evolution<'a, S> {
    /// Validates `config` and generates the initial population.
    ///
    /// The initial population has `config.survivors` members, generated in
    /// order, and is not scored.
    ///
    /// # Errors
    /// [`EvolveError::Configuration`] before any species call if the
    /// configuration is invalid; [`EvolveError::Capability`] if `generate`
    /// fails.
    pub fn start(species: &'a S, config: &'a EvolutionConfig, generator: Generator) -> Result<Self> {
        config.validate()?;

        let (generator, population) = generate_n(
            |generator| {
                species
                    .generate(generator)
                    .map_err(|e| EvolveError::capability("generate", e))
            },
            config.survivors,
            generator,
        )?;
        trace!(size = population.len(), "initial population generated");

        Ok(Self {
            species,
            config,
            generator,
            population,
            best_fitness: None,
            generation: 0,
            history: Vec::with_capacity(config.generations),
        })
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        if self.generation < self.config.generations {
            Phase::Running(self.generation)
        } else {
            Phase::Done
        }
    }

    /// Current parent population.
    ///
    /// Sorted by fitness descending once at least one generation has run.
    pub fn population(&self) -> &[S::Genotype] {
        &self.population
    }

    /// Stats of every generation run so far.
    pub fn history(&self) -> &[GenerationStats] {
        &self.history
    }

    /// Runs one generation.
    ///
    /// # Errors
    /// [`EvolveError::Finished`] if the run is already done; any error from
    /// the generation step.
    pub fn step(self) -> Result<Self> {
        if self.phase() == Phase::Done {
            return Err(EvolveError::Finished {
                generations: self.generation,
            });
        }

        let Self {
            species,
            config,
            generator,
            population,
            generation,
            mut history,
            ..
        } = self;

        let completed = generation + 1;
        let (generator, next) = generation_step(species, config, completed, generator, &population)?;

        let best_fitness = next.survivors.first().map(|best| best.fitness);
        if let Some(best) = next.survivors.first() {
            species.on_generation(completed, &best.genotype, best.fitness);
        }
        history.push(next.stats);

        Ok(Self {
            species,
            config,
            generator,
            population: next.survivors.into_iter().map(|s| s.genotype).collect(),
            best_fitness,
            generation: completed,
            history,
        })
    }

    /// Runs any remaining generations and extracts the result.
    pub fn finish(self) -> Result<EvolutionReport<S::Genotype>> {
        let mut evolution = self;
        while let Phase::Running(_) = evolution.phase() {
            evolution = evolution.step()?;
        }

        let Self {
            generator,
            population,
            best_fitness,
            generation,
            history,
            ..
        } = evolution;

        let best = population
            .into_iter()
            .next()
            .ok_or(EvolveError::EmptyPopulation("final population is empty"))?;
        trace!(generations = generation, ?best_fitness, "evolution finished");

        Ok(EvolutionReport {
            generator,
            best,
            best_fitness,
            generations: generation,
            history,
        })
    }
}

/// Executes a complete evolution run.
pub struct EvolutionRunner;

impl EvolutionRunner {
    /// Runs `config.generations` generations and returns the full report.
    pub fn run<S: Species>(
        species: &S,
        config: &EvolutionConfig,
        generator: Generator,
    ) -> Result<EvolutionReport<S::Genotype>> {
        let _span = debug_span!(
            "evolve",
            population_size = config.population_size,
            survivors = config.survivors,
            generations = config.generations
        )
        .entered();

        Evolution::start(species, config, generator)?.finish()
    }
}

/// Evolves a genotype for `species` from a fixed seed.
///
/// Returns the final generator state and the best genotype. Identical
/// inputs always produce identical outputs.
///
/// # Examples
///
/// ```
/// use u_evolve::evolution::{evolve, EvolutionConfig, Species};
/// use u_evolve::random::Generator;
/// use u_evolve::EvolveError;
///
/// struct Target(f64);
///
/// impl Species for Target {
///     type Genotype = f64;
///     type Error = EvolveError;
///
///     fn generate(&self, generator: Generator) -> Result<(Generator, f64), EvolveError> {
///         let (x, generator) = generator.uniform_real(-10.0, 10.0)?;
///         Ok((generator, x))
///     }
///
///     fn crossover(&self, generator: Generator, a: &f64, b: &f64) -> Result<(Generator, f64), EvolveError> {
///         Ok((generator, (a + b) / 2.0))
///     }
///
///     fn mutate(&self, generator: Generator, x: f64) -> Result<(Generator, f64), EvolveError> {
///         let (dx, generator) = generator.uniform_real(-0.5, 0.5)?;
///         Ok((generator, x + dx))
///     }
///
///     fn fitness(&self, x: &f64) -> f64 {
///         -(x - self.0).abs()
///     }
/// }
///
/// let config = EvolutionConfig::new(40, 4, 0.5, 50);
/// let (_, best) = evolve(&Target(3.0), &config, 42).unwrap();
/// assert!((best - 3.0).abs() < 0.5);
/// ```
pub fn evolve<S: Species>(
    species: &S,
    config: &EvolutionConfig,
    seed: u64,
) -> Result<(Generator, S::Genotype)> {
    let report = EvolutionRunner::run(species, config, Generator::from_seed(seed))?;
    Ok((report.generator, report.best))
}

// ============================================================================
// Tests
// ============================================================================
