use snake_engine::log;
use snake_engine::replay::ReplayRecorder;
use snake_engine::{Direction, GameState, StepEvent};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub resets: u32,
    pub wins: u32,
    pub best_score: u32,
}

/// Feeds one script entry per tick into `state`. Every requested input goes to `recorder` as well.
pub fn run_scripted(
    state: &mut GameState,
    moves: &[Option<Direction>],
    mut recorder: Option<&mut ReplayRecorder>,
) -> RunSummary {
    let mut summary = RunSummary {
        best_score: state.score(),
        ..RunSummary::default()
    };

    for requested in moves.iter().copied() {
        let result = state.step(requested);
        if let Some(recorder) = recorder.as_deref_mut() {
            recorder.record_tick(state.tick(), requested);
        }
        summary.ticks += 1;
        summary.best_score = summary.best_score.max(result.score);

        match result.event {
            StepEvent::Reset => {
                summary.resets += 1;
                log!("Tick {}: reset", state.tick());
            }
            StepEvent::Won => {
                summary.wins += 1;
                log!("Tick {}: won with score {}", state.tick(), result.score);
            }
            StepEvent::None => {}
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_engine::replay::ReplayPlayer;
    use crate::moves::parse_moves;

    #[test]
    fn test_no_input_moves_east() {
        let mut state = GameState::with_seed(10, 10, 1).unwrap();
        let moves = parse_moves(".").unwrap();

        let summary = run_scripted(&mut state, &moves, None);

        assert_eq!(summary.ticks, 1);
        assert_eq!(state.snake().head().x, 6);
        assert_eq!(state.snake().head().y, 5);
    }

    #[test]
    fn test_turning_into_neck_on_two_wide_board_resets() {
        let mut state = GameState::with_seed(2, 4, 1).unwrap();
        let moves = parse_moves(".").unwrap();

        let summary = run_scripted(&mut state, &moves, None);

        assert_eq!(summary.resets, 1);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_recorded_run_replays_identically() {
        let mut state = GameState::with_seed(8, 8, 77).unwrap();
        let mut recorder = ReplayRecorder::new("test".to_string(), state.seed(), state.field_size());
        let moves = parse_moves("..U..L...D..R....U.L.D..R..U...L....D...R.").unwrap();

        let summary = run_scripted(&mut state, &moves, Some(&mut recorder));
        let replay = recorder.finalize(summary.ticks);

        let mut player = ReplayPlayer::new(replay).unwrap();
        let (replayed, replay_summary) = player.simulate().unwrap();

        assert_eq!(replay_summary.ticks, summary.ticks);
        assert_eq!(replay_summary.resets, summary.resets);
        assert_eq!(replayed.snake_body(), state.snake_body());
        assert_eq!(replayed.score(), state.score());
        assert_eq!(replayed.food_position(), state.food_position());
    }
}
