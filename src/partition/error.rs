//----------------------------------------
// partition errors
//----------------------------------------
use crate::error::NumIntegralErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PartitionErr {
    #[error("number of subintervals should be at least 1; got {0}")]
    EmptyPartition(usize),
    #[error("interval bounds should be finite with lower < upper; got [{0}, {1}]")]
    BadBounds(f64, f64),
}

impl Into<NumIntegralErr> for PartitionErr {
    fn into(self) -> NumIntegralErr {
        NumIntegralErr::Partition(self)
    }
}
