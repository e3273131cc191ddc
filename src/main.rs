use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Parser};
use log::{LevelFilter, debug};
use numintegral::compute::types::{DEFAULT_N_STEPS, DEFAULT_ORDER, RunConfig};
use numintegral::compute::{RuleFamily, analytic_value, compare_methods, integrate_exp};
use numintegral::error::NumIntegralErr;

/// Integrate e^x over [0, 1] with Simpson-type or Gauss-Legendre quadrature
/// and compare every rule order against the exact value e - 1
#[derive(Parser, Debug)]
#[command(name = "numintegral")]
#[command(version)]
#[command(group(ArgGroup::new("method").required(true).args(["simpson", "gauss"])))]
struct Cli {
    /// Use the closed Newton-Cotes (Simpson-type) family, orders 1-4
    #[arg(long)]
    simpson: bool,

    /// Use Gauss-Legendre quadrature, orders 1-5
    #[arg(long)]
    gauss: bool,

    /// Rule order (points per panel minus one for Simpson, nodes for Gauss)
    #[arg(long, visible_alias = "nint", default_value_t = DEFAULT_ORDER)]
    order: usize,

    /// Number of equal panels [0, 1] is split into
    #[arg(long, default_value_t = DEFAULT_N_STEPS)]
    nsteps: usize,

    /// Write the order-by-order comparison as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Cli {
    fn init_logging(&self) {
        if self.verbose {
            env_logger::builder().filter_level(LevelFilter::Info).init();
        } else {
            env_logger::init();
        }
    }

    fn into_config(self) -> RunConfig {
        let family = if self.gauss {
            RuleFamily::GaussLegendre
        } else {
            RuleFamily::Simpson
        };
        RunConfig {
            family,
            order: self.order,
            n_steps: self.nsteps,
            json_path: self.json,
        }
    }
}

fn run(config: &RunConfig) -> Result<(), NumIntegralErr> {
    debug!("run config: {config:?}");
    let integral = integrate_exp(config.n_steps, config.family, config.order)?;
    let analytic = analytic_value();

    println!("Integrating e^x between 0 and 1.");
    println!("Analytic answer: {analytic}");
    println!("Numerical answer: {integral}");
    println!("Analytic-Numerical: {}", analytic - integral);

    let report = compare_methods(config.n_steps)?;
    println!();
    print!("{}", report.render_table());

    if let Some(path) = &config.json_path {
        report.write_json(path).map_err(Into::<NumIntegralErr>::into)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.init_logging();

    match run(&cli.into_config()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
