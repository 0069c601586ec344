use super::error::InvalidDimensionsError;

pub const MIN_FIELD_DIMENSION: usize = 2;
pub const MAX_FIELD_DIMENSION: usize = 1024;

/// Floored modulo: maps any integer onto `0..size`. `size` must be in `1..=i32::MAX`.
pub fn wrap(value: i32, size: usize) -> i32 {
    debug_assert!(size > 0 && size <= i32::MAX as usize, "wrap size {} out of range", size);
    value.rem_euclid(size as i32)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    pub fn wrap(&self, width: usize, height: usize) -> Self {
        Self {
            x: wrap(self.x, width),
            y: wrap(self.y, height),
        }
    }

    /// True when `other` is one axis-aligned step away, counting steps across the edges.
    pub fn is_adjacent_on(&self, other: &Point, field_size: &FieldSize) -> bool {
        Direction::ALL.iter().any(|direction| {
            field_size.wrap_point(self.moved_in_direction(*direction)) == *other
        })
    }
}

/// Screen orientation: `Up` decreases `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Maps a raw vector to a direction. Zero, diagonal and longer vectors yield `None`.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Direction> {
        match (dx, dy) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSize {
    pub width: usize,
    pub height: usize,
}

impl FieldSize {
    pub fn new(width: usize, height: usize) -> Result<Self, InvalidDimensionsError> {
        if width < MIN_FIELD_DIMENSION || height < MIN_FIELD_DIMENSION {
            return Err(InvalidDimensionsError { width, height });
        }
        if width > MAX_FIELD_DIMENSION || height > MAX_FIELD_DIMENSION {
            return Err(InvalidDimensionsError { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    pub fn center(&self) -> Point {
        Point::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    pub fn wrap_point(&self, point: Point) -> Point {
        point.wrap(self.width, self.height)
    }

    pub fn index_of(&self, point: Point) -> usize {
        let wrapped = self.wrap_point(point);
        wrapped.y as usize * self.width + wrapped.x as usize
    }

    pub fn point_at(&self, index: usize) -> Point {
        Point::new((index % self.width) as i32, (index / self.width) as i32)
    }
}
