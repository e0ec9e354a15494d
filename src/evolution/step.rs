//! One generation: offspring production, mutation, and survivor selection.
//!
//! Generator state is consumed in a fixed order. For offspring `0..N` in
//! turn: a pair-index draw followed by the crossover's own draws. Then for
//! offspring `0..N` in turn: the mutation draw followed by the mutation's own
//! draws, if any. Fitness evaluation consumes no randomness and may run in
//! parallel without changing the result.

use super::config::EvolutionConfig;
use super::pairing::{pair_at, pool_size};
use super::types::{Scored, Species};
use crate::error::{EvolveError, Result};
use crate::random::{generate_n, map_with_generator, Generator};
use tracing::debug;

/// Fitness summary of one generation's offspring pool.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// 1-based index of the generation.
    pub generation: usize,

    /// Number of offspring produced.
    pub offspring: usize,

    /// Number of offspring that were mutated.
    pub mutated: usize,

    /// Highest fitness in the offspring pool.
    pub best_fitness: f64,

    /// Mean fitness of the offspring pool.
    pub mean_fitness: f64,

    /// Lowest fitness in the offspring pool.
    pub worst_fitness: f64,
}

/// Outcome of a single generation step.
#[derive(Debug, Clone)]
pub struct Generation<G> {
    /// Next parent population, sorted by fitness descending.
    pub survivors: Vec<Scored<G>>,

    /// Summary of the offspring pool the survivors were drawn from.
    pub stats: GenerationStats,
}

/// Produces exactly `count` offspring from `parents`.
///
/// Each offspring is the crossover of a pair drawn uniformly from the full
/// mating pool `parents × parents`, self-pairs included.
///
/// # Errors
/// [`EvolveError::EmptyPopulation`] if `parents` is empty, or
/// [`EvolveError::Capability`] if crossover fails.
pub fn produce_offspring<S: Species>(
    species: &S,
    generator: Generator,
    parents: &[S::Genotype],
    count: usize,
) -> Result<(Generator, Vec<S::Genotype>)> {
    if parents.is_empty() {
        return Err(EvolveError::EmptyPopulation(
            "offspring production requires at least one parent",
        ));
    }

    let pool_len = pool_size(parents.len())?;
    generate_n(
        |generator| {
            let (index, generator) = generator.uniform_index(pool_len)?;
            let (a, b) = pair_at(parents, index);
            species
                .crossover(generator, a, b)
                .map_err(|e| EvolveError::capability("crossover", e))
        },
        count,
        generator,
    )
}

/// Mutates each offspring independently with probability `probability`.
///
/// One uniform draw in `[0, 1)` is taken per offspring; the offspring is
/// mutated when the draw is below `probability`, so `0.0` never mutates and
/// `1.0` always does. Returns the offspring in their original order and the
/// number mutated.
pub fn mutate_offspring<S: Species>(
    species: &S,
    generator: Generator,
    offspring: Vec<S::Genotype>,
    probability: f64,
) -> Result<(Generator, Vec<S::Genotype>, usize)> {
    let mut mutated = 0;
    let (generator, offspring) = map_with_generator(
        |generator, child| {
            let (draw, generator) = generator.uniform_real(0.0, 1.0)?;
            if draw < probability {
                mutated += 1;
                species
                    .mutate(generator, child)
                    .map_err(|e| EvolveError::capability("mutate", e))
            } else {
                Ok((generator, child))
            }
        },
        generator,
        offspring,
    )?;
    Ok((generator, offspring, mutated))
}

/// Scores every offspring once and sorts them by fitness, best first.
///
/// The sort is stable: equal fitness keeps the original offspring order.
///
/// # Errors
/// [`EvolveError::InvalidFitness`] if any fitness is NaN.
pub fn rank_offspring<S: Species>(
    species: &S,
    offspring: Vec<S::Genotype>,
    parallel: bool,
) -> Result<Vec<Scored<S::Genotype>>> {
    let fitness = evaluate_fitness(species, &offspring, parallel);
    if let Some(index) = fitness.iter().position(|f| f.is_nan()) {
        return Err(EvolveError::InvalidFitness { index });
    }

    let mut ranked: Vec<Scored<S::Genotype>> = offspring
        .into_iter()
        .zip(fitness)
        .map(|(genotype, fitness)| Scored { genotype, fitness })
        .collect();
    ranked.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
    Ok(ranked)
}

/// Keeps the first `survivors` entries of a ranked pool.
///
/// The result has `min(survivors, ranked.len())` entries.
pub fn select_survivors<G>(mut ranked: Vec<Scored<G>>, survivors: usize) -> Vec<Scored<G>> {
    ranked.truncate(survivors);
    ranked
}

/// Runs one full generation on `parents`.
///
/// `generation` is the 1-based index recorded in the returned stats.
pub fn generation_step<S: Species>(
    species: &S,
    config: &EvolutionConfig,
    generation: usize,
    generator: Generator,
    parents: &[S::Genotype],
) -> Result<(Generator, Generation<S::Genotype>)> {
    let (generator, offspring) =
        produce_offspring(species, generator, parents, config.population_size)?;
    let (generator, offspring, mutated) =
        mutate_offspring(species, generator, offspring, config.mutation_probability)?;
    let ranked = rank_offspring(species, offspring, config.parallel)?;

    let stats = summarize(generation, mutated, &ranked)?;
    debug!(
        generation,
        offspring = stats.offspring,
        mutated,
        best = stats.best_fitness,
        mean = stats.mean_fitness,
        worst = stats.worst_fitness,
        "generation complete"
    );

    let survivors = select_survivors(ranked, config.survivors);
    Ok((generator, Generation { survivors, stats }))
}

fn summarize<G>(generation: usize, mutated: usize, ranked: &[Scored<G>]) -> Result<GenerationStats> {
    let (best, worst) = match (ranked.first(), ranked.last()) {
        (Some(best), Some(worst)) => (best.fitness, worst.fitness),
        _ => {
            return Err(EvolveError::EmptyPopulation(
                "generation produced no offspring",
            ))
        }
    };
    let mean = ranked.iter().map(|s| s.fitness).sum::<f64>() / ranked.len() as f64;
    Ok(GenerationStats {
        generation,
        offspring: ranked.len(),
        mutated,
        best_fitness: best,
        mean_fitness: mean,
        worst_fitness: worst,
    })
}

#[cfg(feature = "parallel")]
fn evaluate_fitness<S: Species>(species: &S, offspring: &[S::Genotype], parallel: bool) -> Vec<f64> {
    use rayon::prelude::*;

    if parallel {
        offspring.par_iter().map(|g| species.fitness(g)).collect()
    } else {
        offspring.iter().map(|g| species.fitness(g)).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate_fitness<S: Species>(species: &S, offspring: &[S::Genotype], _parallel: bool) -> Vec<f64> {
    offspring.iter().map(|g| species.fitness(g)).collect()
}

// ============================================================================
// Tests
// ============================================================================
