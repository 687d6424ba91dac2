use std::time::{Duration, Instant};

/// In-memory session stats for the HUD. Nothing here is persisted.
///
/// Elapsed time only accumulates while a round is actually running: it
/// freezes across pauses and stops at death.
pub struct GameMetrics {
    run_started: Option<Instant>,
    banked: Duration,
    pub high_score: u32,
    pub rounds_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            run_started: None,
            banked: Duration::ZERO,
            high_score: 0,
            rounds_played: 0,
        }
    }

    /// Wall-clock time spent running in the current round.
    pub fn elapsed(&self) -> Duration {
        let live = self
            .run_started
            .map(|started| started.elapsed())
            .unwrap_or(Duration::ZERO);
        self.banked + live
    }

    pub fn on_round_start(&mut self) {
        self.banked = Duration::ZERO;
        self.run_started = Some(Instant::now());
    }

    pub fn on_pause(&mut self) {
        if let Some(started) = self.run_started.take() {
            self.banked += started.elapsed();
        }
    }

    pub fn on_resume(&mut self) {
        self.run_started = Some(Instant::now());
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.on_pause();
        self.rounds_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed().as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
