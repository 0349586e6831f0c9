//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The only async piece is [`clock::TickScheduler`], which waits on tokio timers.

pub mod action;
pub mod clock;
pub mod config;
pub mod engine;
pub mod food;
pub mod input_gate;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, Velocity};
pub use clock::{TickScheduler, TickToken, tick_interval};
pub use config::{ConfigError, GameConfig};
pub use engine::{StepEngine, TickOutcome};
pub use food::place_food;
pub use input_gate::apply_direction;
pub use session::Game;
pub use state::{
    Cell, CollisionKind, GameSnapshot, Lifecycle, SELF_COLLISION_GRACE, SimulationState, Snake,
};
