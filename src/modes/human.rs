use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::{Duration, Instant};
use tokio::time::{MissedTickBehavior, interval};
use tracing::info;

use crate::game::{Game, GameConfig};
use crate::input::{Controls, InputHandler};
use crate::metrics::FrameStats;
use crate::render::Renderer;

pub struct HumanMode {
    game: Game,
    stats: FrameStats,
    renderer: Renderer,
    input_handler: InputHandler,
    controls: Controls,
    frame_duration: Duration,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let frame_duration = Duration::from_secs(1) / config.target_fps.max(1);

        Ok(Self {
            game: Game::new(config)?,
            stats: FrameStats::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            controls: Controls::new(),
            frame_duration,
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

        info!(frame_ms = self.frame_duration.as_millis() as u64, "human mode started");

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        info!(
            high_score = self.stats.high_score,
            games_played = self.stats.games_played,
            "human mode finished"
        );

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut frame_timer = interval(self.frame_duration);
        frame_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        while self.controls.running {
            tokio::select! {
                // Input is applied as soon as it arrives, ahead of the next frame
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // One frame: update, restart, render
                _ = frame_timer.tick() => {
                    self.advance_frame();

                    self.stats.update();
                    let scene = self.game.scene();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &scene, &self.stats, self.controls.paused);
                    }).context("Failed to draw frame")?;

                    self.finish_frame(Instant::now());
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.controls.running = false;
                }
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let action = self.input_handler.handle_key_event(key);
            self.controls.apply(action, self.game.body_mut());
        }
    }

    /// Simulation half of a frame
    fn advance_frame(&mut self) {
        let was_alive = self.game.is_alive();

        if !self.controls.paused {
            self.game.update();
        }

        if was_alive && !self.game.is_alive() {
            self.stats.on_game_over(self.game.score());
        }

        if self.controls.restart {
            self.game.restart();
            self.stats.on_game_start();
            self.controls.restart = false;
        }
    }

    /// Count the frame and refresh the title once a second
    fn finish_frame(&mut self, now: Instant) {
        if let Some(fps) = self.stats.on_frame(now) {
            self.renderer.update_window_title(self.game.score(), fps);
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
