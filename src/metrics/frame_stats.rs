use std::time::{Duration, Instant};

const FPS_WINDOW: Duration = Duration::from_secs(1);

/// Frame rate and session bookkeeping for the front-end
pub struct FrameStats {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
    /// Frames counted in the last full window
    pub fps: u32,
    window_start: Instant,
    frame_count: u32,
}

impl FrameStats {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            fps: 0,
            window_start: now,
            frame_count: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    /// Count a finished frame. Returns the measured FPS once a second has passed.
    pub fn on_frame(&mut self, now: Instant) -> Option<u32> {
        self.frame_count += 1;
        if now.saturating_duration_since(self.window_start) < FPS_WINDOW {
            return None;
        }

        self.fps = self.frame_count;
        self.frame_count = 0;
        self.window_start = now;
        Some(self.fps)
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}
