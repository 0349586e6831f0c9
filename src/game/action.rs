use serde::{Deserialize, Serialize};

/// Direction the snake can be steered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Per-tick displacement of the head.
///
/// Either a unit step along one axis or [`Velocity::ZERO`], which only
/// occurs before the first start of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Velocity {
    pub dx: i32,
    pub dy: i32,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { dx: 0, dy: 0 };

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Component-wise negation
    pub fn reversed(&self) -> Velocity {
        Velocity {
            dx: -self.dx,
            dy: -self.dy,
        }
    }

    /// True if `other` would send the head straight back into the neck.
    /// Zero never reverses anything.
    pub fn is_reverse_of(&self, other: Velocity) -> bool {
        !self.is_zero() && *self == other.reversed()
    }
}

impl From<Direction> for Velocity {
    fn from(direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Velocity { dx, dy }
    }
}
