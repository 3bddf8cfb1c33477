//! Build validated scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! - shared parameters (`Parameters`)
//! - named ramps, each built once and shared through `Arc`
//! - bodies, validated field by field
//!
//! Body validation runs in a fixed order (mass/weight, point, velocity) and
//! stops at the first mismatch.

use std::collections::BTreeMap;
use std::sync::Arc;

use log::debug;
use serde_yaml::Value;

use crate::configuration::config::{BodyConfig, RampConfig, ScenarioConfig};
use crate::mechanics::body::Body;
use crate::mechanics::error::MechanicsError;
use crate::mechanics::params::Parameters;
use crate::mechanics::ramp::{Ramp, RampParams};
use crate::mechanics::states::{Point, Vector};

const MASS_MISMATCH: &str = "mass needs to be a float or int";
const POINT_MISMATCH: &str = "point needs to be an instance of Point class";
const VELOCITY_MISMATCH: &str = "velocity needs to be an instance of Vector class";

#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub ramps: BTreeMap<String, Arc<Ramp>>,
    pub bodies: Vec<Body>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, MechanicsError> {
        let mut parameters = Parameters::default();
        if let Some(g) = cfg.parameters.g {
            parameters.g = g;
        }

        // Ramps: build each once, bodies share them by name
        let ramps: BTreeMap<String, Arc<Ramp>> = cfg
            .ramps
            .iter()
            .map(|(name, rc)| (name.clone(), Arc::new(build_ramp(rc))))
            .collect();

        let bodies = cfg
            .bodies
            .iter()
            .map(|bc| build_body(bc, &parameters, &ramps))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("scenario built: {} ramps, {} bodies", ramps.len(), bodies.len());

        Ok(Self { parameters, ramps, bodies })
    }

    pub fn from_yaml_str(src: &str) -> Result<Self, MechanicsError> {
        Self::build_scenario(ScenarioConfig::from_yaml_str(src)?)
    }
}

fn build_ramp(rc: &RampConfig) -> Ramp {
    Ramp::with_formulas(
        rc.formulas,
        RampParams {
            length: rc.length,
            base: rc.base,
            height: rc.height,
            inclination: rc.inclination,
            friction_coefficient: rc.friction_coefficient,
        },
    )
}

fn build_body(
    bc: &BodyConfig,
    parameters: &Parameters,
    ramps: &BTreeMap<String, Arc<Ramp>>,
) -> Result<Body, MechanicsError> {
    // mass is only looked at when weight is absent or zero
    let weight = optional_number(bc.weight.as_ref(), "weight")?.filter(|w| *w != 0.0);
    let mass = match weight {
        Some(_) => None,
        None => optional_number(bc.mass.as_ref(), "mass")?,
    };

    let pos = point_from_value(&bc.point)
        .ok_or_else(|| MechanicsError::type_mismatch("point", POINT_MISMATCH))?;

    let mut builder = Body::builder(pos).g(bc.g.unwrap_or(parameters.g));

    builder = match &bc.velocity {
        None => builder,
        Some(Value::Null) => builder.without_velocity(),
        Some(v) => builder.velocity(
            vector_from_value(v)
                .ok_or_else(|| MechanicsError::type_mismatch("velocity", VELOCITY_MISMATCH))?,
        ),
    };

    if let Some(w) = weight {
        builder = builder.weight(w);
    }
    if let Some(m) = mass {
        builder = builder.mass(m);
    }
    if let Some(acc) = bc.acc {
        builder = builder.acceleration(Point::from(acc));
    }
    if let Some(name) = &bc.surface {
        let ramp = ramps
            .get(name)
            .ok_or_else(|| MechanicsError::UnknownSurface(name.clone()))?;
        builder = builder.surface(Arc::clone(ramp));
    }

    builder.build()
}

// null counts as "not given"
fn optional_number(value: Option<&Value>, field: &'static str) -> Result<Option<f64>, MechanicsError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(_) => Err(MechanicsError::type_mismatch(field, MASS_MISMATCH)),
    }
}

/// `[x, y, z]` or `{x, y, z}`
fn point_from_value(value: &Value) -> Option<Point> {
    match value {
        Value::Sequence(seq) if seq.len() == 3 => {
            let x = seq[0].as_f64()?;
            let y = seq[1].as_f64()?;
            let z = seq[2].as_f64()?;
            Some(Point::new(x, y, z))
        }
        Value::Mapping(_) => {
            let x = value.get("x")?.as_f64()?;
            let y = value.get("y")?.as_f64()?;
            let z = value.get("z")?.as_f64()?;
            Some(Point::new(x, y, z))
        }
        _ => None,
    }
}

/// An end point (origin at world origin) or `{origin, end}`
fn vector_from_value(value: &Value) -> Option<Vector> {
    if let Some(end) = value.get("end") {
        let origin = match value.get("origin") {
            Some(o) => point_from_value(o)?,
            None => Point::origin(),
        };
        return Some(Vector::between(origin, point_from_value(end)?));
    }
    point_from_value(value).map(Vector::new)
}
