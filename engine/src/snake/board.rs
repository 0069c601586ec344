use crate::session_rng::SessionRng;
use super::error::BoardFullError;
use super::snake::Snake;
use super::types::{FieldSize, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// 1-based position along the body, head = 1.
    SnakeSegment(usize),
    Food,
}

/// Toroidal grid of cell markers. Every coordinate passed in is wrapped before use.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    field_size: FieldSize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(field_size: FieldSize) -> Self {
        Self {
            cells: vec![Cell::Empty; field_size.cell_count()],
            field_size,
        }
    }

    pub fn field_size(&self) -> FieldSize {
        self.field_size
    }

    pub fn width(&self) -> usize {
        self.field_size.width
    }

    pub fn height(&self) -> usize {
        self.field_size.height
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Drops segment markers only; food stays where it is.
    pub fn clear_segments(&mut self) {
        for cell in self.cells.iter_mut() {
            if matches!(cell, Cell::SnakeSegment(_)) {
                *cell = Cell::Empty;
            }
        }
    }

    pub fn place_snake(&mut self, snake: &Snake) {
        for (i, point) in snake.body().enumerate() {
            let index = self.field_size.index_of(*point);
            self.cells[index] = Cell::SnakeSegment(i + 1);
        }
    }

    pub fn place_food(&mut self, rng: &mut SessionRng) -> Result<Point, BoardFullError> {
        let empty_indices: Vec<usize> = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect();

        if empty_indices.is_empty() {
            return Err(BoardFullError);
        }

        let index = empty_indices[rng.random_range(0..empty_indices.len())];
        self.cells[index] = Cell::Food;
        Ok(self.field_size.point_at(index))
    }

    pub fn remove_food(&mut self) {
        for cell in self.cells.iter_mut() {
            if *cell == Cell::Food {
                *cell = Cell::Empty;
            }
        }
    }

    pub fn cell_at(&self, x: i32, y: i32) -> Cell {
        self.cells[self.field_size.index_of(Point::new(x, y))]
    }

    pub fn cell_at_point(&self, point: Point) -> Cell {
        self.cell_at(point.x, point.y)
    }

    pub fn food_position(&self) -> Option<Point> {
        self.cells
            .iter()
            .position(|cell| *cell == Cell::Food)
            .map(|index| self.field_size.point_at(index))
    }

    pub fn count(&self, predicate: impl Fn(&Cell) -> bool) -> usize {
        self.cells.iter().filter(|cell| predicate(cell)).count()
    }

    /// Cells in row-major order, top row first.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (self.field_size.point_at(index), *cell))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.field_size.width)
    }

    #[cfg(test)]
    pub(crate) fn set_cell(&mut self, point: Point, cell: Cell) {
        let index = self.field_size.index_of(point);
        self.cells[index] = cell;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::types::Direction;

    fn create_board(width: usize, height: usize) -> Board {
        Board::new(FieldSize::new(width, height).unwrap())
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = create_board(4, 3);
        assert_eq!(board.width(), 4);
        assert_eq!(board.height(), 3);
        assert_eq!(board.count(|c| *c == Cell::Empty), 12);
        assert_eq!(board.rows().count(), 3);
    }

    #[test]
    fn test_cell_at_wraps_negative_and_large_coordinates() {
        let mut board = create_board(5, 4);
        board.set_cell(Point::new(4, 3), Cell::Food);
        assert_eq!(board.cell_at(-1, -1), Cell::Food);
        assert_eq!(board.cell_at(9, 7), Cell::Food);
        assert_eq!(board.cell_at(4, 3), Cell::Food);
        assert_eq!(board.cell_at(0, 0), Cell::Empty);
    }

    #[test]
    fn test_place_snake_ranks_from_head() {
        let mut board = create_board(6, 6);
        let size = board.field_size();
        let snake = Snake::new(Point::new(1, 2), Direction::Right, 3, &size);
        board.place_snake(&snake);

        assert_eq!(board.cell_at(1, 2), Cell::SnakeSegment(1));
        assert_eq!(board.cell_at(0, 2), Cell::SnakeSegment(2));
        assert_eq!(board.cell_at(-1, 2), Cell::SnakeSegment(3));
        assert_eq!(board.count(|c| matches!(c, Cell::SnakeSegment(_))), 3);
    }

    #[test]
    fn test_clear_segments_keeps_food() {
        let mut board = create_board(6, 6);
        let size = board.field_size();
        board.place_snake(&Snake::spawn(&size));
        board.set_cell(Point::new(0, 0), Cell::Food);

        board.clear_segments();
        assert_eq!(board.count(|c| matches!(c, Cell::SnakeSegment(_))), 0);
        assert_eq!(board.food_position(), Some(Point::new(0, 0)));

        board.clear();
        assert_eq!(board.food_position(), None);
    }

    #[test]
    fn test_place_food_avoids_snake() {
        let mut rng = SessionRng::new(42);
        let size = FieldSize::new(3, 3).unwrap();
        let snake = Snake::new(Point::new(2, 1), Direction::Right, 3, &size);

        for _ in 0..50 {
            let mut board = Board::new(size);
            board.place_snake(&snake);
            let food = board.place_food(&mut rng).unwrap();
            assert!(!snake.contains(&food));
            assert_eq!(board.cell_at_point(food), Cell::Food);
            assert_eq!(board.count(|c| *c == Cell::Food), 1);
        }
    }

    #[test]
    fn test_place_food_picks_only_empty_cell() {
        let mut rng = SessionRng::new(1);
        let mut board = create_board(2, 2);
        board.set_cell(Point::new(0, 0), Cell::SnakeSegment(1));
        board.set_cell(Point::new(1, 0), Cell::SnakeSegment(2));
        board.set_cell(Point::new(1, 1), Cell::SnakeSegment(3));

        assert_eq!(board.place_food(&mut rng), Ok(Point::new(0, 1)));
    }

    #[test]
    fn test_place_food_on_full_board_fails() {
        let mut rng = SessionRng::new(1);
        let mut board = create_board(2, 2);
        for (rank, point) in [(0, 0), (1, 0), (1, 1), (0, 1)].iter().enumerate() {
            board.set_cell(Point::new(point.0, point.1), Cell::SnakeSegment(rank + 1));
        }

        assert_eq!(board.place_food(&mut rng), Err(BoardFullError));
        assert_eq!(board.food_position(), None);
    }

    #[test]
    fn test_iter_is_row_major() {
        let board = create_board(3, 2);
        let points: Vec<Point> = board.iter().map(|(p, _)| p).collect();
        assert_eq!(points[0], Point::new(0, 0));
        assert_eq!(points[2], Point::new(2, 0));
        assert_eq!(points[3], Point::new(0, 1));
    }
}
