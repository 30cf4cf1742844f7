//! Session driver
//!
//! Owns one game: reads the high score when it starts, ticks the simulation
//! at the fixed period, and records the high score once the run ends.

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use crate::highscore::HighScore;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, Outcome, TickInput, tick};
use crate::view::FrameView;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub outcome: Outcome,
    pub score: u32,
    pub new_high_score: bool,
}

/// A single play session
#[derive(Debug)]
pub struct Session {
    pub state: GameState,
    pub high_score: HighScore,
    /// `None` keeps the high score in memory only
    high_score_path: Option<PathBuf>,
    tick_period: Duration,
    recorded: Option<bool>,
}

impl Session {
    /// Start a session from settings, reading the stored high score
    pub fn new(settings: &Settings) -> Self {
        let high_score = HighScore::load(&settings.high_score_path);
        let state = GameState::with_config(settings.seed, settings.game_config());
        log::info!(
            "Session started: seed {}, layout '{}', best {}",
            settings.seed,
            settings.layout.as_str(),
            high_score.best
        );
        Self {
            state,
            high_score,
            high_score_path: Some(settings.high_score_path.clone()),
            tick_period: Duration::from_millis(settings.tick_millis),
            recorded: None,
        }
    }

    /// Session around an existing state with no file behind the high score
    pub fn in_memory(state: GameState, high_score: HighScore) -> Self {
        Self {
            state,
            high_score,
            high_score_path: None,
            tick_period: Duration::from_millis(crate::consts::TICK_MILLIS),
            recorded: None,
        }
    }

    pub fn view(&self) -> FrameView {
        FrameView::capture(&self.state, self.high_score.best)
    }

    /// Advance one tick and return the events it raised
    pub fn step(&mut self, input: &TickInput) -> &[GameEvent] {
        tick(&mut self.state, input);
        for event in &self.state.events {
            log::debug!("tick {}: {:?}", self.state.time_ticks, event);
        }
        self.record_if_over();
        &self.state.events
    }

    /// Record the result once, the first time the run is seen to be over
    fn record_if_over(&mut self) {
        if self.state.is_over() && self.recorded.is_none() {
            self.recorded = Some(self.record_result());
        }
    }

    /// Update the stored high score from a finished run
    fn record_result(&mut self) -> bool {
        let score = self.state.score;
        if !self.high_score.record(score) {
            return false;
        }
        log::info!("New high score: {}", score);
        if let Some(path) = &self.high_score_path {
            if let Err(e) = self.high_score.save(path) {
                log::warn!("High score not saved: {e:#}");
            }
        }
        true
    }

    /// Play until the run ends or `max_ticks` have elapsed.
    ///
    /// `input` is asked for the held keys before every tick and `on_frame`
    /// sees the view after every tick. With `realtime` set the loop sleeps
    /// out the remainder of each tick period.
    pub fn run<I, F>(
        &mut self,
        mut input: I,
        max_ticks: Option<u64>,
        realtime: bool,
        mut on_frame: F,
    ) -> RunSummary
    where
        I: FnMut(&GameState) -> TickInput,
        F: FnMut(&FrameView),
    {
        // A state handed over already finished never reaches `step`
        self.record_if_over();

        let mut ticks = 0u64;
        let mut next_deadline = Instant::now() + self.tick_period;

        while !self.state.is_over() && max_ticks.is_none_or(|max| ticks < max) {
            let keys = input(&self.state);
            self.step(&keys);
            ticks += 1;
            on_frame(&self.view());

            if realtime {
                let now = Instant::now();
                if next_deadline > now {
                    thread::sleep(next_deadline - now);
                }
                next_deadline += self.tick_period;
            }
        }

        RunSummary {
            ticks,
            outcome: self.state.outcome,
            score: self.state.score,
            new_high_score: self.recorded.unwrap_or(false),
        }
    }
}
