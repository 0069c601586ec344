use crate::snake::{Direction, FieldSize};
use super::proto::{ReplayV1, ReplayV1Metadata, TickInput};

/// Collects the inputs of one session. Ticks without a requested direction are not stored.
pub struct ReplayRecorder {
    engine_version: String,
    game_started_timestamp_ms: i64,
    seed: u64,
    field_size: FieldSize,
    inputs: Vec<TickInput>,
}

impl ReplayRecorder {
    pub fn new(engine_version: String, seed: u64, field_size: FieldSize) -> Self {
        let game_started_timestamp_ms = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);

        Self {
            engine_version,
            game_started_timestamp_ms,
            seed,
            field_size,
            inputs: Vec::new(),
        }
    }

    pub fn record_tick(&mut self, tick: u64, direction: Option<Direction>) {
        if let Some(direction) = direction {
            self.inputs.push(TickInput::new(tick, direction));
        }
    }

    pub fn finalize(&mut self, total_ticks: u64) -> ReplayV1 {
        let mut inputs = std::mem::take(&mut self.inputs);
        inputs.sort_by_key(|input| input.tick);

        ReplayV1 {
            metadata: Some(ReplayV1Metadata {
                engine_version: std::mem::take(&mut self.engine_version),
                game_started_timestamp_ms: self.game_started_timestamp_ms,
                seed: self.seed,
                field_width: self.field_size.width as u32,
                field_height: self.field_size.height as u32,
                total_ticks,
            }),
            inputs,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn inputs_count(&self) -> usize {
        self.inputs.len()
    }
}
