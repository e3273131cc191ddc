//----------------------------------------
// compute mod
//----------------------------------------
pub mod compare;
pub mod error;
pub mod report;
pub mod types;

pub use crate::compute::compare::{compare_methods, integrate_exp};
pub use crate::partition::equal_width::partition_interval;
pub use crate::partition::types::Subinterval;
pub use crate::quadrature::composite::{evaluate, order_sweep, total_integral, total_integral_of};
pub use crate::quadrature::integrand::{DOMAIN_HI, DOMAIN_LO, analytic_value, integrand};
pub use crate::quadrature::types::{OrderSweep, QuadratureRule, RuleFamily};
