//! Couples a [`Game`] with its [`TickScheduler`].
//!
//! The driver is the single actor that mutates the game: front ends forward
//! commands to it and await [`GameDriver::next_tick`] in their event loop.
//! Ticks are only armed while the game is running, and every command that
//! resets the game disarms the pending tick first.

use log::debug;

use crate::game::{
    ConfigError, Direction, Game, GameConfig, GameSnapshot, Lifecycle, TickOutcome, TickScheduler, TickToken,
};

pub struct GameDriver {
    game: Game,
    scheduler: TickScheduler,
}

impl GameDriver {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            game: Game::new(config)?,
            scheduler: TickScheduler::new(),
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.get_state()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.game.lifecycle()
    }

    pub fn is_ticking(&self) -> bool {
        self.scheduler.is_armed()
    }

    /// Start the run and arm its first tick
    pub fn start(&mut self) -> bool {
        if !self.game.start() {
            return false;
        }
        self.scheduler.schedule(self.game.speed());
        true
    }

    /// Cancel any pending tick, then reset the game
    pub fn reset(&mut self) {
        if self.scheduler.cancel() {
            debug!("cancelled pending tick on reset");
        }
        self.game.reset();
    }

    pub fn restart(&mut self) -> bool {
        self.reset();
        self.start()
    }

    pub fn request_direction(&mut self, direction: Direction) -> bool {
        self.game.request_direction(direction)
    }

    /// Wait for the armed tick. Never resolves while nothing is armed.
    pub async fn next_tick(&mut self) -> TickToken {
        self.scheduler.wait().await
    }

    /// Run the tick identified by `token` and arm the next one from the
    /// speed the tick left behind. Stale tokens are dropped.
    pub fn on_tick(&mut self, token: TickToken) -> Option<TickOutcome> {
        if !self.scheduler.is_current(token) {
            debug!("dropping stale tick");
            return None;
        }

        let outcome = self.game.tick();
        if self.game.is_running() {
            self.scheduler.schedule(self.game.speed());
        }
        Some(outcome)
    }

    /// Convenience for headless use: wait for and run the next tick
    pub async fn step(&mut self) -> Option<TickOutcome> {
        let token = self.next_tick().await;
        self.on_tick(token)
    }

    #[cfg(test)]
    pub(crate) fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }
}
