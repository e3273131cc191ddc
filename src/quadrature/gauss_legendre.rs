use itertools::izip;

use crate::quadrature::tables::{GL_ROOTS, GL_WEIGHTS};

/// Gauss-Legendre estimate of the integral of f over [a, b] with `order`
/// nodes, mapping the tabulated [-1, 1] nodes onto [a, b].
///
/// Order must already be validated to lie in [1, 5].
pub fn gauss_legendre<F>(f: &F, a: f64, b: f64, order: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    let half_width = (b - a) / 2.0;
    let center = (b + a) / 2.0;
    izip!(GL_ROOTS[order - 1], GL_WEIGHTS[order - 1])
        .map(|(&r, &w)| half_width * w * f(half_width * r + center))
        .sum()
}
