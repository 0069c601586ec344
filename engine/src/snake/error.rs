use super::types::{MAX_FIELD_DIMENSION, MIN_FIELD_DIMENSION};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDimensionsError {
    pub width: usize,
    pub height: usize,
}

impl std::fmt::Display for InvalidDimensionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid board dimensions {}x{}: both must be between {} and {}",
            self.width, self.height, MIN_FIELD_DIMENSION, MAX_FIELD_DIMENSION
        )
    }
}

impl std::error::Error for InvalidDimensionsError {}

/// Raised by food placement when no empty cell is left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardFullError;

impl std::fmt::Display for BoardFullError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "No empty cell left for food")
    }
}

impl std::error::Error for BoardFullError {}
