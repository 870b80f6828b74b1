use crate::{Challenge, Cue, Key, KeySource};
use rand::Rng;
use std::time::Instant;

/// Owns the current [`Challenge`] and replaces it when the player restarts.
#[derive(Debug)]
pub struct Controller<R> {
    rng: R,
    challenge: Challenge,
}

impl<R: Rng> Controller<R> {
    /// Create a controller with a freshly generated challenge starting at `now`.
    pub fn new(mut rng: R, now: Instant) -> Self {
        let challenge = Challenge::generate(&mut rng, now);
        Self { rng, challenge }
    }

    /// The current challenge.
    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    /// Run one frame.
    ///
    /// Active challenges consume the frame's keys through [`Challenge::update`].
    /// Finished ones only look for [`Key::Confirm`] and regenerate on it, all
    /// other keys are dropped.
    pub fn update(&mut self, now: Instant, keys: &mut impl KeySource) -> Vec<Cue> {
        if !self.challenge.state().is_terminal() {
            return self.challenge.update(now, keys);
        }

        let mut confirmed = false;
        while let Some(key) = keys.poll_key() {
            confirmed |= key == Key::Confirm;
        }
        if confirmed {
            tracing::debug!(previous = ?self.challenge.state(), "restarting challenge");
            self.challenge = Challenge::generate(&mut self.rng, now);
        }

        Vec::new()
    }
}
