use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{debug, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::driver::GameDriver;
use crate::game::{GameConfig, Lifecycle, TickToken};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::{FoodPulse, Renderer};

/// Interactive play in the terminal
pub struct HumanMode {
    driver: GameDriver,
    metrics: GameMetrics,
    renderer: Renderer,
    pulse: FoodPulse,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        Ok(Self {
            driver: GameDriver::new(config)?,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            pulse: FoodPulse::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Render at 30 FPS (33ms per frame); game ticks follow the snake's speed
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick, armed only while running
                token = self.driver.next_tick() => {
                    self.update_game(token);
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    if self.driver.lifecycle() != Lifecycle::GameOver {
                        self.pulse.advance();
                    }
                    let snapshot = self.driver.snapshot();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &snapshot, &self.metrics, &self.pulse);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                info!("quitting");
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.input_handler.handle_key_event(key) {
            KeyAction::Steer(direction) => {
                if !self.driver.request_direction(direction) {
                    debug!("ignored {:?} in {:?}", direction, self.driver.lifecycle());
                }
            }
            KeyAction::Start => {
                if self.driver.start() {
                    self.metrics.on_game_start();
                }
            }
            KeyAction::Restart => self.restart_game(),
            KeyAction::Reset => self.reset_game(),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    fn update_game(&mut self, token: TickToken) {
        let Some(outcome) = self.driver.on_tick(token) else {
            return;
        };

        if outcome.is_game_over() {
            self.metrics.on_game_over(self.driver.snapshot().score);
        }
    }

    fn abandon_run(&mut self) {
        if self.driver.lifecycle() == Lifecycle::Running {
            self.metrics.on_reset();
        }
    }

    fn reset_game(&mut self) {
        self.abandon_run();
        self.driver.reset();
        self.pulse.reset();
    }

    fn restart_game(&mut self) {
        self.abandon_run();
        self.pulse.reset();
        if self.driver.restart() {
            self.metrics.on_game_start();
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
