//! Deterministic, domain-agnostic evolutionary optimization.
//!
//! Callers describe a problem by implementing [`Species`] for their
//! environment type: how to generate, crossover, mutate, and score a
//! genotype. The engine runs a fixed number of generations of offspring
//! production, mutation, and truncation selection, and returns the best
//! genotype found.
//!
//! - [`random`]: The explicitly threaded [`Generator`] and the combinators
//!   that carry it through sequences of draws.
//! - [`evolution`]: The species contract, configuration, generation step,
//!   and driver.
//!
//! # Architecture
//!
//! This crate sits at Layer 2 (Algorithms) in the U-Engine ecosystem. It
//! contains no domain-specific concepts; genotype representations and
//! fitness functions are defined by consumers at higher layers.
//!
//! # Logging
//!
//! The engine emits `tracing` events (per-generation `debug!`, run-level
//! span) and never installs a subscriber itself.

pub mod error;
pub mod evolution;
pub mod random;

pub use error::{EvolveError, Result};
pub use evolution::{evolve, EvolutionConfig, EvolutionReport, EvolutionRunner, Species};
pub use random::Generator;
