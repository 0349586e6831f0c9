use std::time::{Duration, Instant};

/// Per-session statistics shown in the header. Held in memory only.
pub struct GameMetrics {
    pub start_time: Option<Instant>,
    pub elapsed_time: Duration,
    pub best_score: u32,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: None,
            elapsed_time: Duration::ZERO,
            best_score: 0,
            games_played: 0,
        }
    }

    /// Refresh the run clock; frozen while no run is in progress
    pub fn update(&mut self) {
        self.update_at(Instant::now());
    }

    pub fn on_game_start(&mut self) {
        self.on_game_start_at(Instant::now());
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.on_game_over_at(final_score, Instant::now());
    }

    fn update_at(&mut self, now: Instant) {
        if let Some(start) = self.start_time {
            self.elapsed_time = now.saturating_duration_since(start);
        }
    }

    fn on_game_start_at(&mut self, now: Instant) {
        self.start_time = Some(now);
        self.elapsed_time = Duration::ZERO;
    }

    fn on_game_over_at(&mut self, final_score: u32, now: Instant) {
        self.update_at(now);
        self.start_time = None;
        self.games_played += 1;
        if final_score > self.best_score {
            self.best_score = final_score;
        }
    }

    /// Abandon the current run without counting it
    pub fn on_reset(&mut self) {
        self.start_time = None;
        self.elapsed_time = Duration::ZERO;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
