use crate::snake::Direction;

#[derive(Clone, PartialEq, prost::Message)]
pub struct ReplayV1 {
    #[prost(message, optional, tag = "1")]
    pub metadata: Option<ReplayV1Metadata>,
    #[prost(message, repeated, tag = "2")]
    pub inputs: Vec<TickInput>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ReplayV1Metadata {
    #[prost(string, tag = "1")]
    pub engine_version: String,
    #[prost(int64, tag = "2")]
    pub game_started_timestamp_ms: i64,
    #[prost(uint64, tag = "3")]
    pub seed: u64,
    #[prost(uint32, tag = "4")]
    pub field_width: u32,
    #[prost(uint32, tag = "5")]
    pub field_height: u32,
    #[prost(uint64, tag = "6")]
    pub total_ticks: u64,
}

/// Direction requested before the step with the given 1-based tick.
#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct TickInput {
    #[prost(uint64, tag = "1")]
    pub tick: u64,
    #[prost(enumeration = "ReplayDirection", tag = "2")]
    pub direction: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum ReplayDirection {
    Unspecified = 0,
    Up = 1,
    Down = 2,
    Left = 3,
    Right = 4,
}

impl From<Direction> for ReplayDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => ReplayDirection::Up,
            Direction::Down => ReplayDirection::Down,
            Direction::Left => ReplayDirection::Left,
            Direction::Right => ReplayDirection::Right,
        }
    }
}

impl ReplayDirection {
    pub fn to_direction(self) -> Option<Direction> {
        match self {
            ReplayDirection::Up => Some(Direction::Up),
            ReplayDirection::Down => Some(Direction::Down),
            ReplayDirection::Left => Some(Direction::Left),
            ReplayDirection::Right => Some(Direction::Right),
            ReplayDirection::Unspecified => None,
        }
    }
}

impl TickInput {
    pub fn new(tick: u64, direction: Direction) -> Self {
        Self {
            tick,
            direction: ReplayDirection::from(direction).into(),
        }
    }

    /// Unknown or unspecified values decode to "no change".
    pub fn requested_direction(&self) -> Option<Direction> {
        ReplayDirection::try_from(self.direction)
            .ok()
            .and_then(ReplayDirection::to_direction)
    }
}
