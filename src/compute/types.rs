//----------------------------------------
// compute mod types
//----------------------------------------
use std::path::PathBuf;

use serde::Serialize;

use crate::quadrature::types::{OrderSweep, RuleFamily};

pub const DEFAULT_N_STEPS: usize = 10;
pub const DEFAULT_ORDER: usize = 2;

/// Settings for one run of the driver
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub family: RuleFamily,
    pub order: usize,
    pub n_steps: usize,
    pub json_path: Option<PathBuf>,
}

impl RunConfig {
    pub fn new(family: RuleFamily) -> Self {
        RunConfig {
            family,
            order: DEFAULT_ORDER,
            n_steps: DEFAULT_N_STEPS,
            json_path: None,
        }
    }
}

/// Both order sweeps on a shared partition, with their differences from
/// each other and from the exact value
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub n_steps: usize,
    pub analytic: f64,
    pub simpson: OrderSweep,
    pub gauss: OrderSweep,
    // Orders shared by both families only
    pub simpson_minus_gauss: Vec<f64>,
    pub simpson_minus_analytic: Vec<f64>,
    pub gauss_minus_analytic: Vec<f64>,
}
