//! Criterion benchmarks for u-evolve.
//!
//! Uses synthetic problems (Sphere function, OneMax) to measure pure engine
//! overhead independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use std::convert::Infallible;
use u_evolve::evolution::{mating_pool, EvolutionConfig, EvolutionRunner, Species};
use u_evolve::random::Generator;

// ===========================================================================
// Sphere function: maximize -sum(x_i^2)
// ===========================================================================

struct Sphere {
    dim: usize,
}

impl Species for Sphere {
    type Genotype = Vec<f64>;
    type Error = Infallible;

    fn generate(&self, generator: Generator) -> Result<(Generator, Vec<f64>), Infallible> {
        let (genes, generator): (Vec<f64>, _) =
            generator.sample(|rng| (0..self.dim).map(|_| rng.random_range(-5.0..5.0)).collect());
        Ok((generator, genes))
    }

    fn crossover(
        &self,
        generator: Generator,
        a: &Vec<f64>,
        b: &Vec<f64>,
    ) -> Result<(Generator, Vec<f64>), Infallible> {
        let (point, generator) = generator.sample(|rng| rng.random_range(0..self.dim));
        let mut child = a.clone();
        child[point..].copy_from_slice(&b[point..]);
        Ok((generator, child))
    }

    fn mutate(&self, generator: Generator, mut genes: Vec<f64>) -> Result<(Generator, Vec<f64>), Infallible> {
        let ((i, delta), generator) =
            generator.sample(|rng| (rng.random_range(0..self.dim), rng.random_range(-0.5..0.5)));
        genes[i] += delta;
        Ok((generator, genes))
    }

    fn fitness(&self, genes: &Vec<f64>) -> f64 {
        -genes.iter().map(|x| x * x).sum::<f64>()
    }
}

// ===========================================================================
// OneMax: maximize the number of set bits
// ===========================================================================

struct OneMax {
    n: usize,
}

impl Species for OneMax {
    type Genotype = Vec<bool>;
    type Error = Infallible;

    fn generate(&self, generator: Generator) -> Result<(Generator, Vec<bool>), Infallible> {
        let (bits, generator): (Vec<bool>, _) =
            generator.sample(|rng| (0..self.n).map(|_| rng.random_bool(0.5)).collect());
        Ok((generator, bits))
    }

    fn crossover(
        &self,
        generator: Generator,
        a: &Vec<bool>,
        b: &Vec<bool>,
    ) -> Result<(Generator, Vec<bool>), Infallible> {
        let (mask, generator): (Vec<bool>, _) =
            generator.sample(|rng| (0..self.n).map(|_| rng.random_bool(0.5)).collect());
        let child: Vec<bool> = mask
            .iter()
            .zip(a.iter().zip(b))
            .map(|(&m, (&x, &y))| if m { x } else { y })
            .collect();
        Ok((generator, child))
    }

    fn mutate(&self, generator: Generator, mut bits: Vec<bool>) -> Result<(Generator, Vec<bool>), Infallible> {
        let (i, generator) = generator.sample(|rng| rng.random_range(0..self.n));
        bits[i] = !bits[i];
        Ok((generator, bits))
    }

    fn fitness(&self, bits: &Vec<bool>) -> f64 {
        bits.iter().filter(|&&b| b).count() as f64
    }
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolve_sphere");
    for &dim in &[10, 30, 100] {
        let problem = Sphere { dim };
        let config = EvolutionConfig::new(100, 10, 0.2, 50);
        group.bench_with_input(BenchmarkId::from_parameter(dim), &dim, |b, _| {
            b.iter(|| {
                EvolutionRunner::run(black_box(&problem), &config, Generator::from_seed(42))
                    .map(|report| report.best_fitness)
            })
        });
    }
    group.finish();
}

fn bench_onemax(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolve_onemax");
    for &survivors in &[2, 10, 25] {
        let problem = OneMax { n: 64 };
        let config = EvolutionConfig::new(100, survivors, 0.1, 50);
        group.bench_with_input(BenchmarkId::from_parameter(survivors), &survivors, |b, _| {
            b.iter(|| {
                EvolutionRunner::run(black_box(&problem), &config, Generator::from_seed(42))
                    .map(|report| report.best_fitness)
            })
        });
    }
    group.finish();
}

fn bench_mating_pool(c: &mut Criterion) {
    let mut group = c.benchmark_group("mating_pool");
    for &k in &[10usize, 50, 200] {
        let parents: Vec<u64> = (0..k as u64).collect();
        group.bench_with_input(BenchmarkId::from_parameter(k), &parents, |b, parents| {
            b.iter(|| mating_pool(black_box(parents)).len())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sphere, bench_onemax, bench_mating_pool);
criterion_main!(benches);
