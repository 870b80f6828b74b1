pub mod challenge;
pub mod controller;
pub mod symbol;

pub use challenge::{
    CHALLENGE_DURATION, Challenge, ChallengeState, Cue, FailReason, KeySource, SEQUENCE_LEN,
    TICK_INTERVAL,
};
pub use controller::Controller;
pub use symbol::{Key, Symbol};
