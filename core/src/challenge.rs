use crate::{Key, Symbol};
use rand::{
    Rng,
    distributions::{Distribution, Standard},
};
use std::time::{Duration, Instant};

/// Number of symbols the player has to type.
pub const SEQUENCE_LEN: usize = 15;

/// Time budget of a single challenge.
pub const CHALLENGE_DURATION: Duration = Duration::from_secs(5);

/// Interval between two timer ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// A one-shot sound trigger emitted while a challenge advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Once per elapsed second while active.
    Tick,
    /// Any key pressed while active.
    Key,
    /// The whole sequence was typed in time.
    Success,
    /// The challenge was lost.
    Fail,
}

/// Why a challenge ended in [`ChallengeState::Failed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailReason {
    /// The countdown ran out.
    Timeout,
    /// The pressed key did not match the expected symbol.
    WrongKey { expected: Symbol, pressed: Key },
    /// More than one key was reported within the same frame.
    Chord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChallengeState {
    #[default]
    Active,
    Succeeded,
    Failed(FailReason),
}

impl ChallengeState {
    /// Succeeded and failed challenges no longer react to the timer or keys.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ChallengeState::Active)
    }
}

/// Source of the keys pressed during the current frame.
///
/// Each call yields the next reported key; a second successful call within the
/// same frame means two keys were pressed at once.
pub trait KeySource {
    fn poll_key(&mut self) -> Option<Key>;
}

impl KeySource for std::collections::VecDeque<Key> {
    fn poll_key(&mut self) -> Option<Key> {
        self.pop_front()
    }
}

/// A single chop challenge: a random sequence to type before the countdown expires.
#[derive(Debug, Clone)]
pub struct Challenge {
    sequence: [Symbol; SEQUENCE_LEN],
    progress: usize,
    state: ChallengeState,
    started_at: Instant,
    duration: Duration,
    /// Deadline of the next tick, i.e. one interval past the last emitted one.
    ///
    /// Starts at `started_at` so that the first tick fires right away.
    next_tick_at: Instant,
}

impl Challenge {
    /// Generate a fresh, active challenge starting at `now`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, now: Instant) -> Self {
        let sequence = std::array::from_fn(|_| Standard.sample(rng));
        let challenge = Self::with_sequence(sequence, now);
        tracing::debug!(sequence = %challenge.sequence_string(), "generated challenge");
        challenge
    }

    /// Build an active challenge around a known sequence.
    pub fn with_sequence(sequence: [Symbol; SEQUENCE_LEN], now: Instant) -> Self {
        Self {
            sequence,
            progress: 0,
            state: ChallengeState::Active,
            started_at: now,
            duration: CHALLENGE_DURATION,
            next_tick_at: now,
        }
    }

    pub fn sequence(&self) -> &[Symbol; SEQUENCE_LEN] {
        &self.sequence
    }

    pub fn progress(&self) -> usize {
        self.progress
    }

    pub fn state(&self) -> ChallengeState {
        self.state
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The symbol the player has to press next, if the sequence is not done yet.
    pub fn expected(&self) -> Option<Symbol> {
        self.sequence.get(self.progress).copied()
    }

    /// Time spent since the challenge started.
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    /// Fraction of the time budget still left at `now`, in `[0, 1]`.
    pub fn remaining_ratio(&self, now: Instant) -> f64 {
        let ratio = 1.0 - self.elapsed(now).as_secs_f64() / self.duration.as_secs_f64();
        ratio.clamp(0.0, 1.0)
    }

    /// Advance an active challenge by one frame, returning the cues to play.
    ///
    /// Terminal challenges are left untouched.
    pub fn update(&mut self, now: Instant, keys: &mut impl KeySource) -> Vec<Cue> {
        let mut cues = Vec::new();
        if self.state.is_terminal() {
            return cues;
        }

        if self.elapsed(now) >= self.duration {
            self.fail(FailReason::Timeout, &mut cues);
            return cues;
        }

        if now >= self.next_tick_at {
            tracing::trace!(elapsed = ?self.elapsed(now), "tick");
            cues.push(Cue::Tick);
            self.next_tick_at += TICK_INTERVAL;
        }

        let Some(pressed) = keys.poll_key() else {
            return cues;
        };
        cues.push(Cue::Key);

        // progress < SEQUENCE_LEN while active
        let expected = self.sequence[self.progress];
        let chord = keys.poll_key().is_some();

        if chord {
            self.fail(FailReason::Chord, &mut cues);
        } else if pressed != Key::Symbol(expected) {
            self.fail(FailReason::WrongKey { expected, pressed }, &mut cues);
        } else {
            self.progress += 1;
            if self.progress == SEQUENCE_LEN {
                tracing::debug!(elapsed = ?self.elapsed(now), "challenge succeeded");
                cues.push(Cue::Success);
                self.state = ChallengeState::Succeeded;
            }
        }

        cues
    }

    fn fail(&mut self, reason: FailReason, cues: &mut Vec<Cue>) {
        tracing::debug!(?reason, progress = self.progress, "challenge failed");
        cues.push(Cue::Fail);
        self.state = ChallengeState::Failed(reason);
    }

    fn sequence_string(&self) -> String {
        self.sequence.iter().map(|s| s.as_char()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    fn sequence() -> [Symbol; SEQUENCE_LEN] {
        std::array::from_fn(|i| Symbol::ALL[i % Symbol::ALL.len()])
    }

    #[test]
    fn test_first_update_ticks_immediately() {
        let t0 = Instant::now();
        let mut challenge = Challenge::with_sequence(sequence(), t0);
        let cues = challenge.update(t0, &mut VecDeque::new());
        assert_eq!(cues, vec![Cue::Tick]);
    }

    #[test]
    fn test_expected_follows_progress() {
        let t0 = Instant::now();
        let mut challenge = Challenge::with_sequence(sequence(), t0);
        assert_eq!(challenge.expected(), Some(Symbol::Q));

        let mut keys = VecDeque::from([Key::Symbol(Symbol::Q)]);
        challenge.update(t0, &mut keys);
        assert_eq!(challenge.expected(), Some(Symbol::W));
    }

    #[test]
    fn test_remaining_ratio_is_clamped() {
        let t0 = Instant::now();
        let challenge = Challenge::with_sequence(sequence(), t0);
        assert_eq!(challenge.remaining_ratio(t0), 1.0);
        let half = challenge.remaining_ratio(t0 + Duration::from_millis(2500));
        assert!((half - 0.5).abs() < 1e-9);
        assert_eq!(challenge.remaining_ratio(t0 + Duration::from_secs(9)), 0.0);
    }

    #[test]
    fn test_wrong_key_records_reason() {
        let t0 = Instant::now();
        let mut challenge = Challenge::with_sequence(sequence(), t0);
        let mut keys = VecDeque::from([Key::Other]);
        challenge.update(t0, &mut keys);
        assert_eq!(
            challenge.state(),
            ChallengeState::Failed(FailReason::WrongKey {
                expected: Symbol::Q,
                pressed: Key::Other,
            })
        );
    }
}
