//! Physical constants and per-scenario parameters
//!
//! `Parameters` holds the settings a scenario shares between its bodies:
//! - gravitational acceleration `g`

/// Gravitational acceleration used when nothing else is given (m/s^2)
pub const STANDARD_GRAVITY: f64 = 9.80;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub g: f64, // gravitational acceleration
}

impl Default for Parameters {
    fn default() -> Self {
        Self { g: STANDARD_GRAVITY }
    }
}
