use crate::quadrature::tables::{NC_PREFACTORS, NC_WEIGHTS};

/// Closed Newton-Cotes estimate of the integral of f over [a, b] using
/// order + 1 equally spaced samples (trapezoid, Simpson 1/3, Simpson 3/8,
/// Boole for orders 1 through 4).
///
/// Order must already be validated to lie in [1, 4].
pub fn newton_cotes<F>(f: &F, a: f64, b: f64, order: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    let h = (b - a) / order as f64;
    let prefactor = NC_PREFACTORS[order - 1] * h;
    NC_WEIGHTS[order - 1]
        .iter()
        .enumerate()
        .map(|(i, &c)| prefactor * c * f(a + i as f64 * h))
        .sum()
}
