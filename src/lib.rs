//! Grid Snake - a tick-based Snake game for the terminal
//!
//! This library provides:
//! - Core game logic and tick scheduling (game module)
//! - The single-actor driver that ties the game to its scheduler (driver module)
//! - Keyboard input mapping (input module)
//! - TUI rendering (render module)
//! - Session metrics (metrics module)
//! - Execution modes (modes module)

pub mod driver;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
