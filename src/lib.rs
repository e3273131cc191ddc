//----------------------------------------
// Root lib
//----------------------------------------
//! Numerical estimates of the integral of e^x over [0, 1] with composite
//! closed Newton-Cotes (Simpson-type) rules and Gauss-Legendre quadrature,
//! compared order by order against the exact value e - 1.

/// This module houses the public API: partitioning, rule selection,
/// composite totals, order sweeps and the comparison report
pub mod compute;
/// This module contains error types
pub mod error;
mod partition;
mod quadrature;
