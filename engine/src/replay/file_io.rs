use std::io::{Read, Write};
use std::path::Path;
use prost::Message;
use super::error::ReplayError;
use super::proto::ReplayV1;
use super::{REPLAY_FILE_EXTENSION, REPLAY_VERSION};

pub fn save_replay(path: &Path, replay: &ReplayV1) -> Result<(), ReplayError> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(&save_replay_to_bytes(replay))?;
    Ok(())
}

pub fn save_replay_to_bytes(replay: &ReplayV1) -> Vec<u8> {
    let mut result = vec![REPLAY_VERSION];
    result.extend(replay.encode_to_vec());
    result
}

pub fn load_replay(path: &Path) -> Result<ReplayV1, ReplayError> {
    let mut file = std::fs::File::open(path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;

    load_replay_from_bytes(&buffer)
}

pub fn load_replay_from_bytes(bytes: &[u8]) -> Result<ReplayV1, ReplayError> {
    let (&version, payload) = bytes.split_first().ok_or(ReplayError::EmptyFile)?;
    if version != REPLAY_VERSION {
        return Err(ReplayError::UnsupportedVersion {
            found: version,
            expected: REPLAY_VERSION,
        });
    }

    Ok(ReplayV1::decode(payload)?)
}

pub fn generate_replay_filename(width: usize, height: usize, version: &str) -> String {
    let timestamp = chrono::Local::now().format("%Y%m%d%H%M%S");
    let sanitized_version = version.replace('.', "_");

    format!(
        "{}_SNAKE_{}x{}_{}.{}",
        timestamp, width, height, sanitized_version, REPLAY_FILE_EXTENSION
    )
}
