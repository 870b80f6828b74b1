use crate::{
    assets::Assets,
    audio::Audio,
    events::{AppEvent, EventHandler},
    theme::{self, Theme},
};
use chop_core::{Controller, Key};
use color_eyre::eyre::Result;
use rand::{SeedableRng, rngs::StdRng};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;

/// 60 FPS = 1000ms / 60
const FPS_RATE: Duration = Duration::from_millis(1000 / 60);

pub struct App {
    /// Owns the current challenge.
    pub controller: Controller<StdRng>,
    /// Sounds and keyboard art, loaded at startup.
    pub assets: Assets,
    /// Audio output the cues are played on.
    pub audio: Audio,
    /// Active color theme.
    pub theme: Theme,
    /// Is the application running?
    pub is_running: bool,
    /// Terminal event source.
    pub events: EventHandler,
    /// Keys pressed during the current frame, consumed by the controller.
    keys: VecDeque<Key>,
}

impl App {
    /// Construct a new instance of [`App`], starting the first challenge right away.
    pub fn new(assets: Assets, audio: Audio) -> Self {
        Self {
            controller: Controller::new(StdRng::from_entropy(), Instant::now()),
            assets,
            audio,
            theme: theme::DEFAULT,
            is_running: false,
            events: EventHandler::new(),
            keys: VecDeque::new(),
        }
    }

    /// Run the application's main loop.
    ///
    /// Every frame polls input, advances the challenge, plays the resulting
    /// cues and then redraws.
    pub async fn run(mut self, mut terminal: ratatui::DefaultTerminal) -> Result<()> {
        self.is_running = true;

        // paces frames, stands in for vsync
        let mut interval = tokio::time::interval(FPS_RATE);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        while self.is_running {
            interval.tick().await;

            self.handle_crossterm_events()?;
            if !self.is_running {
                break;
            }

            let now = Instant::now();
            let cues = self.controller.update(now, &mut self.keys);
            // keys the controller did not consume do not carry over
            self.keys.clear();
            for cue in cues {
                self.audio.play(&self.assets.sounds, cue);
            }

            terminal.draw(|frame| self.draw_challenge(frame, now))?;
        }

        Ok(())
    }

    /// Reads the pending crossterm events into this frame's keys.
    fn handle_crossterm_events(&mut self) -> Result<()> {
        while let Some(event) = self.events.next()? {
            match event {
                AppEvent::Quit => {
                    self.quit();
                    return Ok(());
                }
                AppEvent::Key(key) => self.keys.push_back(key),
            }
        }
        Ok(())
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.is_running = false;
    }
}
