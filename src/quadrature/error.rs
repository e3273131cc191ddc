//----------------------------------------
// quadrature errors
//----------------------------------------
use crate::error::NumIntegralErr;
use crate::quadrature::types::RuleFamily;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuleErr {
    #[error("for {family}, order must be in the range [1, {max}]; got {order}")]
    OrderOutOfRange {
        family: RuleFamily,
        order: usize,
        max: usize,
    },
}

impl Into<NumIntegralErr> for RuleErr {
    fn into(self) -> NumIntegralErr {
        NumIntegralErr::Rule(self)
    }
}
