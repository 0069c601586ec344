mod board;
mod error;
mod game_state;
mod snake;
mod types;

pub use board::{Board, Cell};
pub use error::{BoardFullError, InvalidDimensionsError};
pub use game_state::{new_game, GameState, SimulationStatus, StepEvent, StepResult};
pub use snake::{Snake, DEFAULT_DIRECTION, DEFAULT_SPAWN_LENGTH};
pub use types::{wrap, Direction, FieldSize, Point, MAX_FIELD_DIMENSION, MIN_FIELD_DIMENSION};
