//----------------------------------------
// report errors
//----------------------------------------
use crate::error::NumIntegralErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportErr {
    #[error("failed to write report file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Into<NumIntegralErr> for ReportErr {
    fn into(self) -> NumIntegralErr {
        NumIntegralErr::Report(self)
    }
}
