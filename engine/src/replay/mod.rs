mod error;
mod file_io;
mod player;
mod proto;
mod recorder;

pub use error::ReplayError;
pub use file_io::{
    generate_replay_filename, load_replay, load_replay_from_bytes, save_replay,
    save_replay_to_bytes,
};
pub use player::{ReplayPlayer, ReplaySummary};
pub use proto::{ReplayDirection, ReplayV1, ReplayV1Metadata, TickInput};
pub use recorder::ReplayRecorder;

pub const REPLAY_FILE_EXTENSION: &str = "snakereplay";
pub const REPLAY_VERSION: u8 = 1;
