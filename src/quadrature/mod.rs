//----------------------------------------
// quadrature mod
//----------------------------------------
pub mod composite;
pub mod error;
pub mod gauss_legendre;
pub mod integrand;
pub mod newton_cotes;
mod tables;
pub mod types;
