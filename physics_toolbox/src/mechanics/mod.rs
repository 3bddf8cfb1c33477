pub mod states;
pub mod params;
pub mod error;
pub mod ramp;
pub mod body;
pub mod scenario;
