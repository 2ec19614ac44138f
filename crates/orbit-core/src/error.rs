use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum OrbitError {
    #[error("invalid spring {field}: {value} (mass and stiffness must be > 0, damping >= 0)")]
    InvalidSpring { field: &'static str, value: f32 },
}
