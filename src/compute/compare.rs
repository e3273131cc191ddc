use log::{debug, info};

use crate::compute::types::ComparisonReport;
use crate::error::NumIntegralErr;
use crate::partition::equal_width::partition_interval;
use crate::quadrature::{
    composite::{order_sweep, total_integral},
    integrand::{DOMAIN_HI, DOMAIN_LO, analytic_value},
    types::{QuadratureRule, RuleFamily},
};

/// Estimates the integral of e^x over [0, 1] with `n_steps` panels and the
/// given rule. The rule is validated before the domain is partitioned.
pub fn integrate_exp(
    n_steps: usize,
    family: RuleFamily,
    order: usize,
) -> Result<f64, NumIntegralErr> {
    let rule = QuadratureRule::new(family, order)?;
    let partition = partition_interval(DOMAIN_LO, DOMAIN_HI, n_steps)?;
    let total = total_integral(&partition, &rule);
    info!("{family} order {order} with {n_steps} panels: {total}");
    Ok(total)
}

/// Runs every order of both families on the same partition of [0, 1]
pub fn compare_methods(n_steps: usize) -> Result<ComparisonReport, NumIntegralErr> {
    let partition = partition_interval(DOMAIN_LO, DOMAIN_HI, n_steps)?;
    let simpson = order_sweep(&partition, RuleFamily::Simpson)?;
    let gauss = order_sweep(&partition, RuleFamily::GaussLegendre)?;
    let analytic = analytic_value();

    let simpson_minus_gauss: Vec<f64> = simpson
        .totals
        .iter()
        .zip(gauss.totals.iter())
        .map(|(s, g)| s - g)
        .collect();
    let simpson_minus_analytic = simpson.totals.iter().map(|s| s - analytic).collect();
    let gauss_minus_analytic = gauss.totals.iter().map(|g| g - analytic).collect();

    debug!("Simpson - Gauss by order: {simpson_minus_gauss:?}");
    Ok(ComparisonReport {
        n_steps,
        analytic,
        simpson,
        gauss,
        simpson_minus_gauss,
        simpson_minus_analytic,
        gauss_minus_analytic,
    })
}
