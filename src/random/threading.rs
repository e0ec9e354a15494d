//! Combinators that thread a [`Generator`] through a sequence of draws.
//!
//! Both combinators consume generator state strictly left to right, one
//! element at a time. Reproducibility of a run depends on this order.

use super::generator::Generator;

/// Maps a generator-consuming function over `items`, preserving order.
///
/// The generator returned by the call for element `i` is the one passed to
/// the call for element `i + 1`. The first error aborts the traversal.
///
/// # Examples
///
/// ```
/// use u_evolve::random::{map_with_generator, Generator};
///
/// let (_, shifted) = map_with_generator(
///     |generator: Generator, x: f64| {
///         generator.uniform_real(0.0, 1.0).map(|(dx, g)| (g, x + dx))
///     },
///     Generator::from_seed(1),
///     vec![10.0, 20.0, 30.0],
/// )
/// .unwrap();
/// assert_eq!(shifted.len(), 3);
/// assert!(shifted[2] >= 30.0 && shifted[2] < 31.0);
/// ```
pub fn map_with_generator<T, U, E, F, I>(
    mut f: F,
    generator: Generator,
    items: I,
) -> Result<(Generator, Vec<U>), E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(Generator, T) -> Result<(Generator, U), E>,
{
    let items = items.into_iter();
    let mut mapped = Vec::with_capacity(items.size_hint().0);
    let mut generator = generator;
    for item in items {
        let (next, value) = f(generator, item)?;
        generator = next;
        mapped.push(value);
    }
    Ok((generator, mapped))
}

/// Calls a generator-consuming producer exactly `count` times.
pub fn generate_n<U, E, F>(mut f: F, count: usize, generator: Generator) -> Result<(Generator, Vec<U>), E>
where
    F: FnMut(Generator) -> Result<(Generator, U), E>,
{
    map_with_generator(|generator, _| f(generator), generator, 0..count)
}
