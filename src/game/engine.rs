use super::{
    config::{ConfigError, GameConfig},
    food::place_food,
    state::{CollisionKind, Lifecycle, SimulationState},
};
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// False when the tick was ignored because the run was not `Running`
    pub advanced: bool,
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Whether the speed went up this tick
    pub sped_up: bool,
    /// Set on the tick that ended the run
    pub collision: Option<CollisionKind>,
}

impl TickOutcome {
    pub fn is_game_over(&self) -> bool {
        self.collision.is_some()
    }
}

/// Advances a [`SimulationState`] one tick at a time
pub struct StepEngine {
    config: GameConfig,
    rng: StdRng,
}

impl StepEngine {
    /// Create a new engine; food placement is seeded from `config.seed` when set.
    ///
    /// Fails if `config` does not pass [`GameConfig::validate`].
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a fresh `NotStarted` state
    pub fn new_state(&mut self) -> SimulationState {
        SimulationState::new(&self.config, &mut self.rng)
    }

    /// Reinitialize `state` in place
    pub fn reset(&mut self, state: &mut SimulationState) {
        state.reset(&self.config, &mut self.rng);
    }

    /// Execute one tick of the game.
    ///
    /// Every effect of the move is kept even when it ends the run: the
    /// collided snake, out-of-bounds head included, stays in the state.
    pub fn tick(&mut self, state: &mut SimulationState) -> TickOutcome {
        if state.lifecycle != Lifecycle::Running {
            return TickOutcome::default();
        }

        if let Some(pending) = state.pending_velocity.take() {
            state.velocity = pending;
        }

        let new_head = state.snake.head().offset(state.velocity);
        let ate_food = new_head == state.food;
        state.snake.advance(new_head, ate_food);
        state.ticks += 1;

        let mut sped_up = false;
        if ate_food {
            sped_up = self.consume_food(state);
        }

        let collision = if !state.is_in_bounds(new_head) {
            Some(CollisionKind::Wall)
        } else if state.snake.head_hits_body() {
            Some(CollisionKind::SelfCollision)
        } else {
            None
        };

        if let Some(kind) = collision {
            state.lifecycle = Lifecycle::GameOver;
            info!(
                "game over after {} ticks: {:?} at ({}, {}), score {}",
                state.ticks, kind, new_head.x, new_head.y, state.score
            );
        } else {
            debug!("tick {}: head at ({}, {})", state.ticks, new_head.x, new_head.y);
        }

        TickOutcome {
            advanced: true,
            ate_food,
            sped_up,
            collision,
        }
    }

    /// Award the food, move it and apply any speed-up. Returns whether the
    /// speed changed.
    fn consume_food(&mut self, state: &mut SimulationState) -> bool {
        let previous = state.score;
        state.score = state.score.saturating_add(self.config.food_reward);

        match place_food(&mut self.rng, &state.snake, state.tile_count) {
            Some(food) => state.food = food,
            None => warn!("grid is full; food stays at ({}, {})", state.food.x, state.food.y),
        }

        let threshold = self.config.speed_threshold.max(1);
        let crossed = state.score / threshold - previous / threshold;
        if crossed == 0 {
            debug!("ate food, score {}", state.score);
            return false;
        }

        let added = crossed.saturating_mul(self.config.speed_increment);
        state.speed = state.speed.saturating_add(added);
        debug!("score {} reached; speed now {}", state.score, state.speed);
        true
    }
}
