//! Variable-rate tick scheduling.
//!
//! The scheduler holds at most one armed deadline. Each tick is scheduled
//! individually from the speed current at that moment, so a speed change
//! shortens the very next interval. Every arm gets a fresh generation number;
//! [`TickScheduler::cancel`] disarms the deadline and retires its
//! generation, so a tick belonging to a previous run can never be delivered.

use std::time::Duration;
use tokio::time::{Instant, sleep_until};

/// Time between ticks at `speed` ticks per second: `1000 / speed` ms.
/// A speed of zero is treated as one.
pub fn tick_interval(speed: u32) -> Duration {
    Duration::from_secs(1) / speed.max(1)
}

/// Identifies one armed deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickToken {
    generation: u64,
}

#[derive(Debug, Default)]
pub struct TickScheduler {
    deadline: Option<(Instant, TickToken)>,
    generation: u64,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the next tick `tick_interval(speed)` from now, replacing any armed one
    pub fn schedule(&mut self, speed: u32) -> TickToken {
        self.schedule_after(tick_interval(speed))
    }

    fn schedule_after(&mut self, delay: Duration) -> TickToken {
        self.generation += 1;
        let token = TickToken {
            generation: self.generation,
        };
        self.deadline = Some((Instant::now() + delay, token));
        token
    }

    /// Disarm; returns whether a tick was pending
    pub fn cancel(&mut self) -> bool {
        self.generation += 1;
        self.deadline.take().is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// True only for the token of the currently armed (or just fired) deadline
    pub fn is_current(&self, token: TickToken) -> bool {
        token.generation == self.generation
    }

    /// Resolve once the armed deadline passes, disarming it.
    ///
    /// Pending forever while disarmed. Cancel-safe: dropping the future
    /// before it resolves leaves the deadline armed.
    pub async fn wait(&mut self) -> TickToken {
        let Some((deadline, token)) = self.deadline else {
            return std::future::pending().await;
        };
        sleep_until(deadline).await;
        self.deadline = None;
        token
    }
}
