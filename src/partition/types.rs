//----------------------------------------
// partition mod types
//----------------------------------------
use serde::Serialize;

/// Closed interval [a, b] with a < b; one panel of a composite rule
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct Subinterval {
    pub a: f64,
    pub b: f64,
}

impl Subinterval {
    pub fn width(&self) -> f64 {
        self.b - self.a
    }
}
