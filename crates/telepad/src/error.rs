use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("the menu angle must be within 0..=90 degrees, got {0}")]
    MenuAngleOutOfRange(f64),
    #[error("{name} must be a positive length, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },
    #[error("{name} must be finite")]
    NotFinite { name: &'static str },
    #[error("the pad's outer radius {value} exceeds {max} pixels")]
    TooLarge { value: f64, max: f64 },
}
