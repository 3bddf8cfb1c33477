//! Inclined-plane geometry
//!
//! A `Ramp` is built from one driving dimension (length, base or height) and
//! an inclination in degrees. The two missing dimensions are derived with
//! trigonometry, in priority order length > base > height. With zero (or
//! negative) inclination the surface is flat and no trig is applied:
//! base mirrors the supplied length and height passes through.
//!
//! Two formula sets exist, see [`RampFormulas`].

use log::{debug, warn};
use serde::Deserialize;

/// Which trig identities the base and height branches use
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RampFormulas {
    /// Historical behavior: base branch derives `height = length * cos`,
    /// height branch derives length from the (still unset) base
    #[default]
    #[serde(rename = "literal")]
    Literal,

    /// `height = length * sin`, `base = length * cos` in every branch
    #[serde(rename = "corrected")]
    Corrected,
}

/// Raw user input for a ramp; zero means "not supplied"
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RampParams {
    pub length: f64,
    pub base: f64,
    pub height: f64,
    pub inclination: f64, // degrees
    pub friction_coefficient: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ramp {
    length: f64,
    base: f64,
    height: f64,
    inclination: f64,
    friction_coefficient: Option<f64>,
}

impl Ramp {
    pub fn new(params: RampParams) -> Self {
        Self::with_formulas(RampFormulas::Literal, params)
    }

    pub fn with_formulas(formulas: RampFormulas, params: RampParams) -> Self {
        let RampParams { length, base, height, inclination, friction_coefficient } = params;

        let (length, base, height) = if inclination > 0.0 {
            let theta = inclination.to_radians();
            let (sin, cos) = theta.sin_cos();

            if length != 0.0 {
                (length, length * cos, length * sin)
            } else if base != 0.0 {
                let l = base / cos;
                match formulas {
                    RampFormulas::Literal => (l, base, l * cos),
                    RampFormulas::Corrected => (l, base, l * sin),
                }
            } else if height != 0.0 {
                match formulas {
                    // base is still zero here, so the whole triangle collapses
                    RampFormulas::Literal => {
                        debug!("literal height branch leaves length and base at 0");
                        let l = base / sin;
                        (l, l * sin, height)
                    }
                    RampFormulas::Corrected => {
                        let l = height / sin;
                        (l, l * cos, height)
                    }
                }
            } else {
                warn!("ramp inclined at {inclination} deg has no length, base or height");
                (0.0, 0.0, 0.0)
            }
        } else {
            // flat surface
            (length, length, height)
        };

        debug!(
            "ramp built ({formulas:?}): length={length}, base={base}, height={height}, inclination={inclination}"
        );

        Self { length, base, height, inclination, friction_coefficient }
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Inclination in degrees
    pub fn inclination(&self) -> f64 {
        self.inclination
    }

    pub fn inclination_rad(&self) -> f64 {
        self.inclination.to_radians()
    }

    pub fn friction_coefficient(&self) -> Option<f64> {
        self.friction_coefficient
    }
}
