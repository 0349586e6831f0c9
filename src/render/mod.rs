//! Terminal rendering of game snapshots

pub mod pulse;
pub mod renderer;

pub use pulse::FoodPulse;
pub use renderer::Renderer;
