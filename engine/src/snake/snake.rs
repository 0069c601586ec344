use std::collections::VecDeque;

use super::types::{Direction, FieldSize, Point};

pub const DEFAULT_SPAWN_LENGTH: usize = 2;
pub const DEFAULT_DIRECTION: Direction = Direction::Right;

#[derive(Clone, Debug, PartialEq)]
pub struct Snake {
    body: VecDeque<Point>,
    direction: Direction,
    last_moved: Direction,
}

impl Snake {
    /// Lays `length` segments out behind `head`, opposite to `direction`.
    pub fn new(head: Point, direction: Direction, length: usize, field_size: &FieldSize) -> Self {
        let mut body = VecDeque::with_capacity(length.max(1));
        let head = field_size.wrap_point(head);
        body.push_back(head);

        let back = direction.opposite();
        for _ in 1..length {
            let last = *body.back().unwrap_or(&head);
            body.push_back(field_size.wrap_point(last.moved_in_direction(back)));
        }

        Self {
            body,
            direction,
            last_moved: direction,
        }
    }

    pub fn spawn(field_size: &FieldSize) -> Self {
        Self::new(
            field_size.center(),
            DEFAULT_DIRECTION,
            DEFAULT_SPAWN_LENGTH,
            field_size,
        )
    }

    /// Returns whether the turn was taken. Reversals onto the neck are dropped.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(&self.direction) || direction.is_opposite(&self.last_moved) {
            return false;
        }
        self.direction = direction;
        true
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn next_head(&self, field_size: &FieldSize) -> Point {
        field_size.wrap_point(self.head().moved_in_direction(self.direction))
    }

    pub fn move_forward(&mut self, field_size: &FieldSize) {
        self.push_head(field_size);
        self.body.pop_back();
    }

    pub fn grow(&mut self, field_size: &FieldSize) {
        self.push_head(field_size);
    }

    fn push_head(&mut self, field_size: &FieldSize) {
        let next_head = self.next_head(field_size);
        self.body.push_front(next_head);
        self.last_moved = self.direction;
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn tail(&self) -> Point {
        self.body[self.body.len() - 1]
    }

    pub fn body(&self) -> impl ExactSizeIterator<Item = &Point> + '_ {
        self.body.iter()
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.body.contains(point)
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// `direction` is taken as the direction of the last move as well.
    #[cfg(test)]
    pub(crate) fn from_body(body: Vec<Point>, direction: Direction) -> Self {
        Self {
            body: body.into(),
            direction,
            last_moved: direction,
        }
    }
}
