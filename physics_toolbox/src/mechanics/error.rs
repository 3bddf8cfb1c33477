//! Errors raised while building bodies and scenarios
//!
//! Only construction can fail. Once a `Body` or `Ramp` exists, every derived
//! quantity is either a number or `None`.

#[derive(Debug, Clone, PartialEq)]
pub enum MechanicsError {
    /// A dynamic value had the wrong shape for the field it was bound to
    TypeMismatch { field: &'static str, message: &'static str },
    NonPositiveMass(f64),
    MissingMass,
    UnknownSurface(String),
    Config(String),
}

impl MechanicsError {
    pub(crate) fn type_mismatch(field: &'static str, message: &'static str) -> Self {
        MechanicsError::TypeMismatch { field, message }
    }
}

impl std::fmt::Display for MechanicsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MechanicsError::TypeMismatch { field, message } => write!(f, "{field}: {message}"),
            MechanicsError::NonPositiveMass(m) => write!(f, "mass must be positive, got {m}"),
            MechanicsError::MissingMass => write!(f, "either mass or weight must be given"),
            MechanicsError::UnknownSurface(name) => write!(f, "unknown surface '{name}'"),
            MechanicsError::Config(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for MechanicsError {}

impl From<serde_yaml::Error> for MechanicsError {
    fn from(err: serde_yaml::Error) -> Self {
        MechanicsError::Config(err.to_string())
    }
}
