use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::pulse::FoodPulse;
use crate::game::{Cell, GameSnapshot, Lifecycle};
use crate::metrics::GameMetrics;

const SNAKE_COLOR: Color = Color::Rgb(0, 255, 204);
const HEAD_FG: Color = Color::Rgb(0, 255, 204);
const HEAD_BG: Color = Color::Rgb(0, 102, 255);
const FOOD_COLOR: Color = Color::Rgb(255, 0, 68);
const GRID_COLOR: Color = Color::Rgb(51, 51, 51);

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        snapshot: &GameSnapshot,
        metrics: &GameMetrics,
        pulse: &FoodPulse,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(snapshot, metrics), chunks[0]);

        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match snapshot.lifecycle {
            Lifecycle::GameOver => {
                frame.render_widget(self.render_game_over(snapshot, metrics), game_area)
            }
            Lifecycle::NotStarted | Lifecycle::Running => {
                frame.render_widget(self.render_grid(snapshot, pulse), game_area)
            }
        }

        frame.render_widget(self.render_controls(snapshot.lifecycle), chunks[2]);
    }

    fn render_grid(&self, snapshot: &GameSnapshot, pulse: &FoodPulse) -> Paragraph<'_> {
        let side = snapshot.tile_count as i32;
        let head = snapshot.head();
        let mut lines = Vec::with_capacity(snapshot.tile_count as usize);

        for y in 0..side {
            let mut spans = Vec::with_capacity(snapshot.tile_count as usize);

            for x in 0..side {
                let cell = Cell::new(x, y);

                let span = if Some(cell) == head {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(HEAD_FG)
                            .bg(HEAD_BG)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if snapshot.snake.contains(&cell) {
                    Span::styled("□ ", Style::default().fg(SNAKE_COLOR))
                } else if cell == snapshot.food {
                    food_span(pulse)
                } else {
                    Span::styled("· ", Style::default().fg(GRID_COLOR))
                };

                spans.push(span);
            }

            lines.push(Line::from(spans));
        }

        let title = match snapshot.lifecycle {
            Lifecycle::NotStarted => " Snake - press Space to start ",
            _ => " Snake ",
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, snapshot: &GameSnapshot, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(snapshot.score.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Speed: ", label),
            Span::styled(snapshot.speed.to_string(), value),
            Span::raw("    "),
            Span::styled("Length: ", label),
            Span::styled(snapshot.snake.len().to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.best_score.to_string(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, snapshot: &GameSnapshot, metrics: &GameMetrics) -> Paragraph<'_> {
        let mut text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(SNAKE_COLOR).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        if snapshot.score > 0 && snapshot.score >= metrics.best_score {
            text.push(Line::from(Span::styled(
                "New best!",
                Style::default().fg(Color::Green),
            )));
        }

        text.extend([
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to play again or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ]);

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, lifecycle: Lifecycle) -> Paragraph<'_> {
        let key = Style::default().fg(Color::Cyan);
        let mut spans = vec![
            Span::styled("↑↓←→", key),
            Span::raw(" or "),
            Span::styled("WASD", key),
            Span::raw(" to move | "),
        ];
        if lifecycle == Lifecycle::NotStarted {
            spans.push(Span::styled("Space", key));
            spans.push(Span::raw(" to start | "));
        }
        spans.extend([
            Span::styled("R", key),
            Span::raw(" restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn food_span(pulse: &FoodPulse) -> Span<'static> {
    let style = Style::default().fg(FOOD_COLOR);
    if pulse.is_swollen() {
        Span::styled("● ", style.add_modifier(Modifier::BOLD))
    } else {
        Span::styled("• ", style)
    }
}
