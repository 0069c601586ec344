use crate::log;
use crate::session_rng::SessionRng;
use super::board::{Board, Cell};
use super::error::{BoardFullError, InvalidDimensionsError};
use super::snake::Snake;
use super::types::{Direction, FieldSize, Point};

/// One-step notification raised by `GameState::step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepEvent {
    None,
    /// The snake ran into itself; the session started over.
    Reset,
    /// Food could not be replaced because the snake fills the board.
    Won,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationStatus {
    Running,
    JustReset,
    JustWon,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StepResult {
    pub board: Board,
    pub score: u32,
    pub event: StepEvent,
}

#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    snake: Snake,
    score: u32,
    food: Option<Point>,
    status: SimulationStatus,
    tick: u64,
    rng: SessionRng,
}

pub fn new_game(width: usize, height: usize) -> Result<GameState, InvalidDimensionsError> {
    GameState::new(width, height)
}

impl GameState {
    pub fn new(width: usize, height: usize) -> Result<Self, InvalidDimensionsError> {
        Self::with_rng(width, height, SessionRng::from_random())
    }

    pub fn with_seed(width: usize, height: usize, seed: u64) -> Result<Self, InvalidDimensionsError> {
        Self::with_rng(width, height, SessionRng::new(seed))
    }

    fn with_rng(width: usize, height: usize, rng: SessionRng) -> Result<Self, InvalidDimensionsError> {
        let field_size = FieldSize::new(width, height)?;
        let mut state = Self {
            board: Board::new(field_size),
            snake: Snake::spawn(&field_size),
            score: 0,
            food: None,
            status: SimulationStatus::Running,
            tick: 0,
            rng,
        };
        state.respawn();
        Ok(state)
    }

    pub fn step(&mut self, requested_direction: Option<Direction>) -> StepResult {
        self.status = SimulationStatus::Running;
        self.tick += 1;

        if let Some(direction) = requested_direction {
            self.snake.set_direction(direction);
        }

        let field_size = self.board.field_size();
        let next_head = self.snake.next_head(&field_size);

        let event = match self.board.cell_at_point(next_head) {
            Cell::Empty => {
                self.snake.move_forward(&field_size);
                self.refresh_segments();
                StepEvent::None
            }
            Cell::Food => {
                self.snake.grow(&field_size);
                self.score += 1;
                self.board.remove_food();
                self.food = None;
                self.refresh_segments();
                log!(
                    "Tick {}: ate food at ({}, {}). Score: {}",
                    self.tick,
                    next_head.x,
                    next_head.y,
                    self.score
                );

                match self.board.place_food(&mut self.rng) {
                    Ok(food) => {
                        self.food = Some(food);
                        StepEvent::None
                    }
                    Err(BoardFullError) => {
                        self.status = SimulationStatus::JustWon;
                        log!(
                            "Tick {}: board full with length {}, game won",
                            self.tick,
                            self.snake.len()
                        );
                        StepEvent::Won
                    }
                }
            }
            Cell::SnakeSegment(rank) => {
                log!(
                    "Tick {}: self collision at ({}, {}) with segment {}, score {} lost",
                    self.tick,
                    next_head.x,
                    next_head.y,
                    rank,
                    self.score
                );
                self.snake = Snake::spawn(&field_size);
                self.score = 0;
                self.respawn();
                self.status = SimulationStatus::JustReset;
                StepEvent::Reset
            }
        };

        StepResult {
            board: self.board.clone(),
            score: self.score,
            event,
        }
    }

    fn refresh_segments(&mut self) {
        self.board.clear_segments();
        self.board.place_snake(&self.snake);
    }

    fn respawn(&mut self) {
        self.board.clear();
        self.board.place_snake(&self.snake);
        self.food = match self.board.place_food(&mut self.rng) {
            Ok(food) => Some(food),
            Err(err) => {
                log!("Could not place food after spawn: {}", err);
                None
            }
        };
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn field_size(&self) -> FieldSize {
        self.board.field_size()
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn snake_body(&self) -> Vec<Point> {
        self.snake.body().copied().collect()
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    pub fn food_position(&self) -> Option<Point> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> SimulationStatus {
        self.status
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[cfg(test)]
    fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
        self.refresh_segments();
        if let Some(food) = self.food
            && self.snake.contains(&food)
        {
            self.board.remove_food();
            self.food = None;
        }
    }

    #[cfg(test)]
    fn set_food(&mut self, food: Point) {
        self.board.remove_food();
        self.board.set_cell(food, Cell::Food);
        self.food = Some(food);
    }
}
