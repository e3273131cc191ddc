//----------------------------------------
// quadrature mod types
//----------------------------------------
use std::fmt;

use serde::Serialize;

use crate::error::NumIntegralErr;
use crate::quadrature::error::RuleErr;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum RuleFamily {
    Simpson,       // closed Newton-Cotes, equally spaced samples
    GaussLegendre, // samples at Legendre roots
}

impl RuleFamily {
    /// Highest order with a coefficient table
    pub fn max_order(&self) -> usize {
        match self {
            RuleFamily::Simpson => 4,
            RuleFamily::GaussLegendre => 5,
        }
    }
}

impl fmt::Display for RuleFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleFamily::Simpson => write!(f, "Simpson"),
            RuleFamily::GaussLegendre => write!(f, "Gauss-Legendre"),
        }
    }
}

/// A rule family together with an order that has been checked against the
/// family's coefficient tables
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct QuadratureRule {
    family: RuleFamily,
    order: usize,
}

impl QuadratureRule {
    pub fn new(family: RuleFamily, order: usize) -> Result<Self, NumIntegralErr> {
        let max = family.max_order();
        if order < 1 || order > max {
            return Err(RuleErr::OrderOutOfRange { family, order, max }.into());
        }
        Ok(QuadratureRule { family, order })
    }

    pub fn family(&self) -> RuleFamily {
        self.family
    }

    pub fn order(&self) -> usize {
        self.order
    }
}

/// Composite totals for every order of one family over the same partition;
/// `totals[k]` belongs to order k + 1
#[derive(Debug, Clone, Serialize)]
pub struct OrderSweep {
    pub family: RuleFamily,
    pub totals: Vec<f64>,
}

impl OrderSweep {
    pub fn get(&self, order: usize) -> Option<f64> {
        order.checked_sub(1).and_then(|i| self.totals.get(i).copied())
    }

    /// (order, total) pairs in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.totals.iter().enumerate().map(|(i, &total)| (i + 1, total))
    }
}
