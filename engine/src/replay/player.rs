use chrono::{DateTime, Local, TimeZone};
use crate::log;
use crate::snake::{Direction, GameState, StepEvent};
use super::error::ReplayError;
use super::proto::{ReplayV1, ReplayV1Metadata, TickInput};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub ticks: u64,
    pub resets: u32,
    pub wins: u32,
}

pub struct ReplayPlayer {
    metadata: ReplayV1Metadata,
    inputs: Vec<TickInput>,
    current_input_index: usize,
}

impl ReplayPlayer {
    pub fn new(replay: ReplayV1) -> Result<Self, ReplayError> {
        let ReplayV1 { metadata, inputs } = replay;
        let metadata = metadata.ok_or(ReplayError::MissingMetadata)?;
        Ok(Self {
            metadata,
            inputs,
            current_input_index: 0,
        })
    }

    fn metadata(&self) -> &ReplayV1Metadata {
        &self.metadata
    }

    pub fn engine_version(&self) -> &str {
        &self.metadata().engine_version
    }

    pub fn seed(&self) -> u64 {
        self.metadata().seed
    }

    pub fn field_width(&self) -> usize {
        self.metadata().field_width as usize
    }

    pub fn field_height(&self) -> usize {
        self.metadata().field_height as usize
    }

    pub fn total_ticks(&self) -> u64 {
        self.metadata().total_ticks
    }

    pub fn game_started_timestamp_ms(&self) -> i64 {
        self.metadata().game_started_timestamp_ms
    }

    pub fn game_started_at(&self) -> Option<DateTime<Local>> {
        Local.timestamp_millis_opt(self.game_started_timestamp_ms()).single()
    }

    pub fn total_inputs(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_finished(&self) -> bool {
        self.current_input_index >= self.inputs.len()
    }

    /// Direction for `tick`, consuming every stored input up to it. The last one wins.
    pub fn input_for_tick(&mut self, tick: u64) -> Option<Direction> {
        let mut requested = None;
        while let Some(input) = self.inputs.get(self.current_input_index) {
            if input.tick > tick {
                break;
            }
            if input.tick == tick {
                requested = input.requested_direction();
            }
            self.current_input_index += 1;
        }
        requested
    }

    pub fn reset(&mut self) {
        self.current_input_index = 0;
    }

    /// Rebuilds the session from its seed and runs every recorded tick.
    pub fn simulate(&mut self) -> Result<(GameState, ReplaySummary), ReplayError> {
        self.reset();
        let mut state = GameState::with_seed(self.field_width(), self.field_height(), self.seed())?;
        let mut summary = ReplaySummary::default();

        for tick in 1..=self.total_ticks() {
            let direction = self.input_for_tick(tick);
            match state.step(direction).event {
                StepEvent::Reset => summary.resets += 1,
                StepEvent::Won => summary.wins += 1,
                StepEvent::None => {}
            }
            summary.ticks += 1;
        }

        log!(
            "Replay finished after {} ticks: score {}, {} resets, {} wins",
            summary.ticks,
            state.score(),
            summary.resets,
            summary.wins
        );
        Ok((state, summary))
    }
}
