//! Configuration types for describing mechanics scenarios in YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – shared physical constants
//! - [`RampConfig`]       – named inclined surfaces
//! - [`BodyConfig`]       – initial state of each body
//! - [`ScenarioConfig`]   – top-level wrapper
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   g: 9.8                    # optional, defaults to 9.80
//!
//! ramps:
//!   incline:
//!     length: 10.0            # give one of length / base / height
//!     inclination: 30.0       # degrees
//!     friction_coefficient: 0.2
//!     formulas: corrected     # optional, "literal" (default) or "corrected"
//!
//! bodies:
//!   - point: [0.0, 5.0, 0.0]  # or { x: 0.0, y: 5.0, z: 0.0 }
//!     mass: 2.0               # or weight: 19.6
//!     velocity: [3.0, 4.0, 0.0]   # end point, { origin: [..], end: [..] }, or null
//!     acc: [1.0, 0.0, 0.0]
//!     surface: incline
//! ```
//!
//! Body fields that users commonly get wrong (`point`, `mass`, `weight`,
//! `velocity`) are kept as raw [`serde_yaml::Value`]s here and checked when the
//! runtime [`Scenario`](crate::mechanics::scenario::Scenario) is built, so a
//! badly shaped value surfaces as a `TypeMismatch` instead of a parse error.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

use crate::mechanics::error::MechanicsError;
use crate::mechanics::ramp::RampFormulas;

/// Shared physical constants
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ParametersConfig {
    pub g: Option<f64>, // gravitational acceleration
}

/// One inclined surface; zero (or omitted) dimensions are derived
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RampConfig {
    #[serde(default)]
    pub length: f64,
    #[serde(default)]
    pub base: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub inclination: f64, // degrees
    pub friction_coefficient: Option<f64>,
    #[serde(default)]
    pub formulas: RampFormulas,
}

/// Initial state of a single body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub point: Value, // position, sequence of 3 numbers or {x, y, z}
    #[serde(default)]
    pub mass: Option<Value>,
    #[serde(default)]
    pub weight: Option<Value>, // wins over `mass` when present
    // `None` = key omitted (zero vector), `Some(Null)` = explicitly no velocity
    #[serde(default, deserialize_with = "present")]
    pub velocity: Option<Value>,
    pub acc: Option<[f64; 3]>,
    pub g: Option<f64>, // overrides `parameters.g` for this body
    pub surface: Option<String>, // key into `ramps`
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub ramps: BTreeMap<String, RampConfig>,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(src: &str) -> Result<Self, MechanicsError> {
        Ok(serde_yaml::from_str(src)?)
    }
}

// keeps an explicit `null` distinguishable from a missing key
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
