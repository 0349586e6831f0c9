use log::{debug, info};

use super::{
    action::{Direction, Velocity},
    config::{ConfigError, GameConfig},
    engine::{StepEngine, TickOutcome},
    input_gate::apply_direction,
    state::{GameSnapshot, Lifecycle, SimulationState},
};

/// One game: the simulation state plus the engine that advances it.
///
/// This is the surface renderers and input adapters talk to. Commands that
/// make no sense in the current lifecycle are ignored and report `false`.
pub struct Game {
    engine: StepEngine,
    state: SimulationState,
}

impl Game {
    /// Fails if `config` is invalid; see [`GameConfig::validate`]
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let mut engine = StepEngine::new(config)?;
        let state = engine.new_state();
        Ok(Self { engine, state })
    }

    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    /// Owned snapshot for a renderer
    pub fn get_state(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.state.lifecycle
    }

    pub fn speed(&self) -> u32 {
        self.state.speed
    }

    pub fn is_running(&self) -> bool {
        self.state.lifecycle == Lifecycle::Running
    }

    /// `NotStarted` → `Running`, heading right
    pub fn start(&mut self) -> bool {
        if self.state.lifecycle != Lifecycle::NotStarted {
            debug!("start ignored in {:?}", self.state.lifecycle);
            return false;
        }
        self.state.lifecycle = Lifecycle::Running;
        self.state.velocity = Velocity::from(Direction::Right);
        self.state.pending_velocity = None;
        info!("run started at speed {}", self.state.speed);
        true
    }

    /// Back to a fresh `NotStarted` state from anywhere
    pub fn reset(&mut self) {
        self.engine.reset(&mut self.state);
        debug!(
            "reset; food at ({}, {})",
            self.state.food.x, self.state.food.y
        );
    }

    /// Reset and immediately start a new run
    pub fn restart(&mut self) -> bool {
        self.reset();
        self.start()
    }

    pub fn request_direction(&mut self, direction: Direction) -> bool {
        apply_direction(&mut self.state, direction)
    }

    pub fn tick(&mut self) -> TickOutcome {
        self.engine.tick(&mut self.state)
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }
}
