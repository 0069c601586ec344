//! Deterministic toroidal Snake simulation.
//!
//! The engine owns the board and the snake and advances them one `step` at a time.
//! Drawing, input polling and frame pacing belong to the caller.

pub mod config;
pub mod logger;
pub mod replay;
pub mod session_rng;
pub mod snake;
pub mod version;

pub use session_rng::SessionRng;
pub use snake::{new_game, Direction, GameState, Point, StepEvent, StepResult};
