//! Deterministic pseudorandom generator threading.
//!
//! All randomness in the engine flows through an explicit [`Generator`]
//! value: every draw consumes the current state and returns its successor.
//! There is no ambient or thread-local randomness anywhere in the crate.

mod generator;
mod threading;

pub use generator::Generator;
pub use threading::{generate_n, map_with_generator};
