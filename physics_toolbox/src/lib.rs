pub mod mechanics;
pub mod configuration;

pub use mechanics::states::{Point, Vector, NVec3};
pub use mechanics::ramp::{Ramp, RampParams, RampFormulas};
pub use mechanics::body::{Body, BodyBuilder};
pub use mechanics::params::{Parameters, STANDARD_GRAVITY};
pub use mechanics::scenario::Scenario;
pub use mechanics::error::MechanicsError;

pub use configuration::config::ScenarioConfig;
