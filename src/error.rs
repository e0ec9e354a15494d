//! Error types for the evolution engine.
//!
//! Every failure aborts the whole run; there is no partial result.

use thiserror::Error;

/// Boxed error produced by a [`Species`](crate::evolution::Species) implementation.
pub type BoxedSpeciesError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error type for all engine operations.
#[derive(Debug, Error)]
pub enum EvolveError {
    /// The configuration violates a parameter constraint.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Sampling or offspring production was attempted on an empty sequence.
    #[error("empty population: {0}")]
    EmptyPopulation(&'static str),

    /// A uniform draw was requested over a malformed range.
    #[error("invalid range: [{low}, {high}]")]
    InvalidRange { low: f64, high: f64 },

    /// An offspring was scored with a fitness that cannot be ranked.
    #[error("fitness of offspring {index} is NaN")]
    InvalidFitness { index: usize },

    /// A species capability failed to produce a value.
    #[error("species `{operation}` failed: {source}")]
    Capability {
        operation: &'static str,
        #[source]
        source: BoxedSpeciesError,
    },

    /// The driver was stepped after completing every generation.
    #[error("evolution already finished after {generations} generations")]
    Finished { generations: usize },
}

impl EvolveError {
    /// Wraps a species failure, tagging it with the capability that failed.
    pub(crate) fn capability<E>(operation: &'static str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Capability {
            operation,
            source: Box::new(source),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = EvolveError> = std::result::Result<T, E>;
