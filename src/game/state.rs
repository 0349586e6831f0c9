use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::action::Velocity;
use super::config::GameConfig;
use super::food::place_food;

/// Body segments closer to the head than this index never count as a hit.
pub const SELF_COLLISION_GRACE: usize = 4;

/// A tile on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Vector addition of a velocity
    pub fn offset(&self, velocity: Velocity) -> Self {
        Self {
            x: self.x + velocity.dx,
            y: self.y + velocity.dy,
        }
    }
}

/// The snake, head first and tail last. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// A single-segment snake
    pub fn new(head: Cell) -> Self {
        Self {
            body: VecDeque::from([head]),
        }
    }

    /// Build a snake from explicit segments, head first. Returns `None` when
    /// `cells` is empty.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Option<Self> {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        (!body.is_empty()).then_some(Self { body })
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true: a snake always has a head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Prepend `new_head`, dropping the tail unless `grow` is set
    pub(crate) fn advance(&mut self, new_head: Cell, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }
    }

    /// True if the head lies on a segment at index >= [`SELF_COLLISION_GRACE`]
    pub fn head_hits_body(&self) -> bool {
        let head = self.head();
        self.body
            .iter()
            .skip(SELF_COLLISION_GRACE)
            .any(|&segment| segment == head)
    }
}

/// Lifecycle of a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Lifecycle {
    #[default]
    NotStarted,
    Running,
    GameOver,
}

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionKind {
    /// Head left the grid
    Wall,
    /// Head ran into its own body
    SelfCollision,
}

/// Complete mutable game state, owned by a single [`crate::game::Game`]
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub snake: Snake,
    pub food: Cell,
    /// Velocity applied on the last tick (or at start)
    pub velocity: Velocity,
    /// Latest accepted direction request, committed on the next tick
    pub pending_velocity: Option<Velocity>,
    pub score: u32,
    pub speed: u32,
    pub lifecycle: Lifecycle,
    pub tile_count: u32,
    /// Ticks survived in the current run
    pub ticks: u64,
}

impl SimulationState {
    /// Fresh `NotStarted` state with the snake on the spawn cell and food
    /// placed elsewhere
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let snake = Snake::new(config.spawn);
        let food = place_food(rng, &snake, config.tile_count).unwrap_or(config.spawn);

        Self {
            snake,
            food,
            velocity: Velocity::ZERO,
            pending_velocity: None,
            score: 0,
            speed: config.base_speed,
            lifecycle: Lifecycle::NotStarted,
            tile_count: config.tile_count,
            ticks: 0,
        }
    }

    /// Reinitialize every entity and return to `NotStarted`
    pub fn reset<R: Rng>(&mut self, config: &GameConfig, rng: &mut R) {
        *self = Self::new(config, rng);
    }

    /// Check if a cell is within the grid bounds
    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        let max = self.tile_count as i64;
        (0..max).contains(&(cell.x as i64)) && (0..max).contains(&(cell.y as i64))
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            snake: self.snake.cells().collect(),
            food: self.food,
            score: self.score,
            speed: self.speed,
            lifecycle: self.lifecycle,
            tile_count: self.tile_count,
        }
    }
}

/// Read-only view handed to renderers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub snake: Vec<Cell>,
    pub food: Cell,
    pub score: u32,
    pub speed: u32,
    pub lifecycle: Lifecycle,
    pub tile_count: u32,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<Cell> {
        self.snake.first().copied()
    }
}
