use itertools::Itertools;
use log::debug;

use crate::error::NumIntegralErr;
use crate::partition::{error::PartitionErr, types::Subinterval};

/// Splits [lo, hi] into n panels of width (hi - lo) / n, in ascending order.
///
/// Endpoints are computed as lo + i * width, with the final endpoint pinned
/// to hi, and neighbouring panels share the exact same endpoint value.
pub fn partition_interval(
    lo: f64,
    hi: f64,
    n: usize,
) -> Result<Vec<Subinterval>, NumIntegralErr> {
    //----------------------------------------
    // Check arguments
    if n < 1 {
        return Err(PartitionErr::EmptyPartition(n).into());
    }
    if !lo.is_finite() || !hi.is_finite() || lo >= hi {
        return Err(PartitionErr::BadBounds(lo, hi).into());
    }

    //----------------------------------------
    // Endpoints, then pair them up
    let width = (hi - lo) / n as f64;
    let subintervals: Vec<Subinterval> = (0..=n)
        .map(|i| if i == n { hi } else { lo + i as f64 * width })
        .tuple_windows()
        .map(|(a, b)| Subinterval { a, b })
        .collect();

    debug!("partitioned [{lo}, {hi}] into {n} subintervals of width {width}");
    Ok(subintervals)
}
