//! Evolution engine.
//!
//! A generic, deterministic evolutionary loop. Users define their problem by
//! implementing [`Species`], which supplies how to generate, crossover,
//! mutate, and score genotypes. The engine handles everything else.
//!
//! # Algorithm
//!
//! 1. Generate `survivors` random genotypes as the initial parents.
//! 2. Each generation, draw `population_size` parent pairs uniformly from
//!    the full mating pool `parents × parents` and cross each pair over.
//! 3. Mutate each offspring with probability `mutation_probability`.
//! 4. Score every offspring once and keep the `survivors` fittest as the
//!    next parents.
//! 5. After `generations` rounds, return the first parent.
//!
//! # Key Types
//!
//! - [`EvolutionConfig`]: The four run parameters
//! - [`Evolution`]: Step-by-step run state machine
//! - [`EvolutionRunner`]: Runs to completion, returns an [`EvolutionReport`]
//! - [`evolve`]: Seed in, `(generator, best genotype)` out
//!
//! # Determinism
//!
//! Every random draw flows through one [`Generator`](crate::random::Generator)
//! in a fixed order, so the same species, configuration, and seed always
//! produce the same result, with or without the `parallel` feature.

mod config;
mod pairing;
mod runner;
mod step;
mod types;

pub use config::EvolutionConfig;
pub use pairing::{mating_pool, pair_at, pool_size};
pub use runner::{evolve, Evolution, EvolutionReport, EvolutionRunner, Phase};
pub use step::{
    generation_step, mutate_offspring, produce_offspring, rank_offspring, select_survivors,
    Generation, GenerationStats,
};
pub use types::{Scored, Species};
