mod ascii;
mod config;
mod moves;
mod session;

use std::path::{Path, PathBuf};
use clap::Parser;
use snake_engine::replay::{
    generate_replay_filename, load_replay, save_replay, ReplayPlayer, ReplayRecorder,
};
use snake_engine::snake::GameState;
use snake_engine::version::VERSION;
use snake_engine::{log, logger};

#[derive(Parser)]
#[command(name = "snake_runner", version, about = "Runs the snake engine headless over a move script")]
struct Args {
    /// YAML config file, defaults to snake_runner_config.yaml. Flags below override its values
    #[arg(long)]
    config: Option<String>,

    /// Move script, e.g. "..U..L.." (U/D/L/R or ^/v/</>, '.' keeps heading)
    #[arg(long)]
    moves: Option<String>,

    #[arg(long, conflicts_with = "moves")]
    moves_file: Option<PathBuf>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Play back a saved replay instead of a script
    #[arg(long, conflicts_with_all = ["moves", "moves_file"])]
    replay: Option<PathBuf>,

    #[arg(long)]
    save_replay: bool,

    #[arg(long)]
    show_board: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Runner".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let cfg = config::load_config(
        args.config.as_deref(),
        config::Overrides {
            field_width: args.width,
            field_height: args.height,
            seed: args.seed,
            show_board: args.show_board,
            save_replay: args.save_replay,
        },
    )?;

    if let Some(path) = args.replay.as_deref() {
        return play_replay(path, cfg.simulation.show_board);
    }

    let script = match (&args.moves, &args.moves_file) {
        (Some(moves), _) => moves.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => String::new(),
    };
    let moves = moves::parse_moves(&script)?;

    let width = cfg.simulation.field_width as usize;
    let height = cfg.simulation.field_height as usize;
    let mut state = match cfg.simulation.seed {
        Some(seed) => GameState::with_seed(width, height, seed)?,
        None => GameState::new(width, height)?,
    };
    log!(
        "Starting {}x{} session with seed {} over {} ticks",
        width,
        height,
        state.seed(),
        moves.len()
    );

    let mut recorder = cfg
        .replay
        .save
        .then(|| ReplayRecorder::new(VERSION.to_string(), state.seed(), state.field_size()));

    let summary = session::run_scripted(&mut state, &moves, recorder.as_mut());

    println!(
        "ticks: {}  score: {}  best: {}  resets: {}  wins: {}  length: {}",
        summary.ticks,
        state.score(),
        summary.best_score,
        summary.resets,
        summary.wins,
        state.snake().len()
    );
    if cfg.simulation.show_board {
        print!("{}", ascii::render_board(state.board()));
    }

    if let Some(mut recorder) = recorder {
        let replay = recorder.finalize(summary.ticks);
        let replay_dir = Path::new(&cfg.replay.location);
        std::fs::create_dir_all(replay_dir)?;
        let file_path = replay_dir.join(generate_replay_filename(width, height, VERSION));
        save_replay(&file_path, &replay)?;
        log!("Replay saved to: {}", file_path.display());
    }

    Ok(())
}

fn play_replay(path: &Path, show_board: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut player = ReplayPlayer::new(load_replay(path)?)?;
    log!(
        "Loaded replay {} (engine {}, seed {}, {}x{}, {} ticks)",
        path.display(),
        player.engine_version(),
        player.seed(),
        player.field_width(),
        player.field_height(),
        player.total_ticks()
    );
    if let Some(started) = player.game_started_at() {
        log!("Replay recorded at {}", started.format("%Y-%m-%d %H:%M:%S"));
    }
    if player.engine_version() != VERSION {
        log!(
            "Replay was recorded with engine {}, running {}",
            player.engine_version(),
            VERSION
        );
    }

    let (state, summary) = player.simulate()?;

    println!(
        "ticks: {}  score: {}  resets: {}  wins: {}  length: {}",
        summary.ticks,
        state.score(),
        summary.resets,
        summary.wins,
        state.snake().len()
    );
    if show_board {
        print!("{}", ascii::render_board(state.board()));
    }
    Ok(())
}
