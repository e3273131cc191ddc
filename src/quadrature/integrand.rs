//----------------------------------------
// Fixed integrand and its reference value
//----------------------------------------

/// Lower end of the integration domain
pub const DOMAIN_LO: f64 = 0.0;
/// Upper end of the integration domain
pub const DOMAIN_HI: f64 = 1.0;

/// The integrand, e^x
pub fn integrand(x: f64) -> f64 {
    x.exp()
}

/// Exact value of the integral of e^x over [0, 1], e - 1
pub fn analytic_value() -> f64 {
    std::f64::consts::E - 1.0
}
