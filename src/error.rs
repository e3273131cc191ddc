//----------------------------------------
// Crate error type
//----------------------------------------
pub use crate::compute::error::ReportErr;
pub use crate::partition::error::PartitionErr;
pub use crate::quadrature::error::RuleErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumIntegralErr {
    #[error("while partitioning the domain: {0}")]
    Partition(PartitionErr),
    #[error("while selecting quadrature rule: {0}")]
    Rule(RuleErr),
    #[error("while writing comparison report: {0}")]
    Report(ReportErr),
}
