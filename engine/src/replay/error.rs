use crate::snake::InvalidDimensionsError;

#[derive(Debug)]
pub enum ReplayError {
    IoError(std::io::Error),
    DecodeError(prost::DecodeError),
    UnsupportedVersion { found: u8, expected: u8 },
    EmptyFile,
    MissingMetadata,
    InvalidDimensions(InvalidDimensionsError),
}

impl std::fmt::Display for ReplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplayError::IoError(e) => write!(f, "IO error: {}", e),
            ReplayError::DecodeError(e) => write!(f, "Decode error: {}", e),
            ReplayError::UnsupportedVersion { found, expected } => {
                write!(f, "Unsupported replay version: found {}, expected {}", found, expected)
            }
            ReplayError::EmptyFile => write!(f, "Empty replay file"),
            ReplayError::MissingMetadata => write!(f, "Replay has no metadata"),
            ReplayError::InvalidDimensions(e) => write!(f, "Replay board: {}", e),
        }
    }
}

impl std::error::Error for ReplayError {}

impl From<std::io::Error> for ReplayError {
    fn from(e: std::io::Error) -> Self {
        ReplayError::IoError(e)
    }
}

impl From<prost::DecodeError> for ReplayError {
    fn from(e: prost::DecodeError) -> Self {
        ReplayError::DecodeError(e)
    }
}

impl From<InvalidDimensionsError> for ReplayError {
    fn from(e: InvalidDimensionsError) -> Self {
        ReplayError::InvalidDimensions(e)
    }
}
