use log::debug;

use crate::error::NumIntegralErr;
use crate::partition::types::Subinterval;
use crate::quadrature::{
    gauss_legendre::gauss_legendre,
    integrand::integrand,
    newton_cotes::newton_cotes,
    types::{OrderSweep, QuadratureRule, RuleFamily},
};

/// Applies `rule` to a single panel
pub fn evaluate<F>(f: &F, panel: &Subinterval, rule: &QuadratureRule) -> f64
where
    F: Fn(f64) -> f64,
{
    match rule.family() {
        RuleFamily::Simpson => newton_cotes(f, panel.a, panel.b, rule.order()),
        RuleFamily::GaussLegendre => gauss_legendre(f, panel.a, panel.b, rule.order()),
    }
}

/// Composite estimate of the integral of f: the sum of `rule` applied to
/// each panel of the partition independently
pub fn total_integral_of<F>(f: &F, partition: &[Subinterval], rule: &QuadratureRule) -> f64
where
    F: Fn(f64) -> f64,
{
    partition.iter().map(|panel| evaluate(f, panel, rule)).sum()
}

/// Composite estimate of the integral of e^x over the partition
pub fn total_integral(partition: &[Subinterval], rule: &QuadratureRule) -> f64 {
    total_integral_of(&integrand, partition, rule)
}

// Totals for orders 1..=max_order of the family, all on the same partition
pub fn order_sweep(
    partition: &[Subinterval],
    family: RuleFamily,
) -> Result<OrderSweep, NumIntegralErr> {
    let totals = (1..=family.max_order())
        .map(|order| {
            QuadratureRule::new(family, order).map(|rule| total_integral(partition, &rule))
        })
        .collect::<Result<Vec<f64>, NumIntegralErr>>()?;

    debug!("{family} order sweep over {} panels: {totals:?}", partition.len());
    Ok(OrderSweep { family, totals })
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::partition::equal_width::partition_interval;
    use crate::quadrature::integrand::analytic_value;

    fn unit_partition(n: usize) -> Vec<Subinterval> {
        partition_interval(0.0, 1.0, n).expect("failed to partition [0, 1]")
    }

    fn error_of(n: usize, family: RuleFamily, order: usize) -> f64 {
        let rule = QuadratureRule::new(family, order).unwrap();
        (total_integral(&unit_partition(n), &rule) - analytic_value()).abs()
    }

    #[test]
    fn simpson_10_panels() {
        let rule = QuadratureRule::new(RuleFamily::Simpson, 2).unwrap();
        let res = total_integral(&unit_partition(10), &rule);
        assert_abs_diff_eq!(res, 1.718281828, epsilon = 1e-7);
        assert_abs_diff_eq!(res, analytic_value(), epsilon = 1e-7);
    }

    #[test]
    fn gauss_3_10_panels() {
        let rule = QuadratureRule::new(RuleFamily::GaussLegendre, 3).unwrap();
        let res = total_integral(&unit_partition(10), &rule);
        assert_abs_diff_eq!(res, analytic_value(), epsilon = 1e-11);
    }

    #[test]
    fn trapezoid_single_panel() {
        let rule = QuadratureRule::new(RuleFamily::Simpson, 1).unwrap();
        let res = total_integral(&unit_partition(1), &rule);
        assert_abs_diff_eq!(res, 1.8591409142295225, epsilon = 1e-12);
    }

    #[test]
    fn total_is_sum_of_panels() {
        let partition = unit_partition(7);
        for family in [RuleFamily::Simpson, RuleFamily::GaussLegendre] {
            for order in 1..=family.max_order() {
                let rule = QuadratureRule::new(family, order).unwrap();
                let mut by_hand = 0.0;
                for panel in partition.iter() {
                    by_hand += evaluate(&integrand, panel, &rule);
                }
                assert_abs_diff_eq!(
                    total_integral(&partition, &rule),
                    by_hand,
                    epsilon = 1e-15
                );
            }
        }
    }

    #[test]
    fn split_domain_matches_whole() {
        let whole = unit_partition(10);
        let mut halves = partition_interval(0.0, 0.5, 5).unwrap();
        halves.extend(partition_interval(0.5, 1.0, 5).unwrap());
        for family in [RuleFamily::Simpson, RuleFamily::GaussLegendre] {
            for order in 1..=family.max_order() {
                let rule = QuadratureRule::new(family, order).unwrap();
                assert_abs_diff_eq!(
                    total_integral(&whole, &rule),
                    total_integral(&halves, &rule),
                    epsilon = 1e-13
                );
            }
        }
    }

    #[test]
    fn converges_as_panels_refine() {
        for family in [RuleFamily::Simpson, RuleFamily::GaussLegendre] {
            for n in [2, 4, 8] {
                // both order 2 rules are fourth order accurate
                assert!(error_of(2 * n, family, 2) < error_of(n, family, 2) / 10.0);
                // trapezoid and midpoint are second order
                assert!(error_of(2 * n, family, 1) < error_of(n, family, 1) / 3.0);
            }
        }
    }

    #[test]
    fn simpson_sweep_improves_with_order() {
        let sweep = order_sweep(&unit_partition(10), RuleFamily::Simpson).unwrap();
        assert_eq!(sweep.totals.len(), 4);
        let errors: Vec<f64> = sweep.totals.iter().map(|t| (t - analytic_value()).abs()).collect();
        for w in errors.windows(2) {
            assert!(w[1] < w[0]);
        }
        assert!(errors[3] < 1e-11);
    }

    #[test]
    fn gauss_sweep_improves_with_order() {
        let sweep = order_sweep(&unit_partition(10), RuleFamily::GaussLegendre).unwrap();
        assert_eq!(sweep.family, RuleFamily::GaussLegendre);
        assert_eq!(sweep.totals.len(), 5);
        let errors: Vec<f64> = sweep.totals.iter().map(|t| (t - analytic_value()).abs()).collect();
        assert!(errors[1] < errors[0]);
        assert!(errors[2] < errors[1]);
        for e in &errors[2..] {
            assert!(*e < 1e-11);
        }
    }

    #[test]
    fn sweep_entries_match_single_runs() {
        let partition = unit_partition(3);
        let sweep = order_sweep(&partition, RuleFamily::GaussLegendre).unwrap();
        for (order, total) in sweep.iter() {
            let rule = QuadratureRule::new(RuleFamily::GaussLegendre, order).unwrap();
            assert_eq!(total, total_integral(&partition, &rule));
        }
    }

    #[test]
    fn composite_simpson_exact_for_cubic() {
        let f = |x: f64| x.powi(3) - 2.0 * x + 1.0;
        let partition = partition_interval(-1.0, 2.0, 6).unwrap();
        let rule = QuadratureRule::new(RuleFamily::Simpson, 2).unwrap();
        // x^4/4 - x^2 + x on [-1, 2]: (4 - 4 + 2) - (0.25 - 1 - 1)
        assert_abs_diff_eq!(total_integral_of(&f, &partition, &rule), 3.75, epsilon = 1e-12);
    }
}
