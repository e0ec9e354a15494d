//! The species contract and scored-genotype type.
//!
//! [`Species`] is the single extension point of the engine: it ties a
//! problem environment to its genotype representation and supplies the
//! four capabilities the evolutionary loop needs.

use crate::random::Generator;

/// Defines an optimization problem for the evolution engine.
///
/// The implementing type is the *environment*: problem-specific context
/// (constraints, target data) that every capability reads but never
/// changes. The associated [`Genotype`](Species::Genotype) is the candidate
/// solution representation, which the engine never inspects.
///
/// Stochastic capabilities take a [`Generator`] by value and must return
/// its successor alongside the result. Fitness is deterministic and
/// higher is better.
///
/// # Implementing
///
/// ```
/// use std::convert::Infallible;
/// use u_evolve::evolution::Species;
/// use u_evolve::random::Generator;
///
/// /// Find the largest integer in `0..=limit`.
/// struct Climb {
///     limit: i64,
/// }
///
/// impl Species for Climb {
///     type Genotype = i64;
///     type Error = Infallible;
///
///     fn generate(&self, generator: Generator) -> Result<(Generator, i64), Infallible> {
///         let (x, generator) = generator.sample(|rng| {
///             use rand::Rng;
///             rng.random_range(0..=self.limit)
///         });
///         Ok((generator, x))
///     }
///
///     fn crossover(
///         &self,
///         generator: Generator,
///         a: &i64,
///         b: &i64,
///     ) -> Result<(Generator, i64), Infallible> {
///         Ok((generator, (a + b) / 2))
///     }
///
///     fn mutate(&self, generator: Generator, x: i64) -> Result<(Generator, i64), Infallible> {
///         Ok((generator, (x + 1).min(self.limit)))
///     }
///
///     fn fitness(&self, x: &i64) -> f64 {
///         *x as f64
///     }
/// }
/// ```
///
/// # Thread Safety
///
/// `Species` must be `Send + Sync` because fitness may be evaluated in
/// parallel with the `parallel` feature.
pub trait Species: Send + Sync {
    /// Candidate solution representation.
    type Genotype: Send + Sync;

    /// Failure raised by a capability. Use [`std::convert::Infallible`]
    /// when every capability is total.
    ///
    /// [`Generator`] draws fail with [`EvolveError`](crate::EvolveError);
    /// species that draw through them can set `type Error = EvolveError` and
    /// propagate with `?`. Draws with valid constant bounds never fail.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Produces one random genotype.
    fn generate(&self, generator: Generator) -> Result<(Generator, Self::Genotype), Self::Error>;

    /// Combines two parents into one offspring.
    ///
    /// `a` and `b` may be the same genotype.
    fn crossover(
        &self,
        generator: Generator,
        a: &Self::Genotype,
        b: &Self::Genotype,
    ) -> Result<(Generator, Self::Genotype), Self::Error>;

    /// Produces a modified version of `genotype`.
    fn mutate(
        &self,
        generator: Generator,
        genotype: Self::Genotype,
    ) -> Result<(Generator, Self::Genotype), Self::Error>;

    /// Scores a genotype. Higher is better.
    ///
    /// Must return identical results for identical inputs.
    fn fitness(&self, genotype: &Self::Genotype) -> f64;

    /// Called after every completed generation with its fittest survivor.
    ///
    /// Useful for progress reporting. The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best: &Self::Genotype, _best_fitness: f64) {}
}

/// A genotype paired with its computed fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored<G> {
    /// The genotype.
    pub genotype: G,
    /// Its fitness, computed exactly once.
    pub fitness: f64,
}
