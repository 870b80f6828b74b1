//! The four cue sounds, synthesized once at startup.

use chop_core::Cue;
use fundsp::hacker32 as dsp;
use rodio::buffer::SamplesBuffer;
use std::sync::Arc;

pub const SAMPLE_RATE: u32 = 44_100;

const TICK_DURATION: f32 = 0.06;
const KEY_DURATION: f32 = 0.04;
const FAIL_DURATION: f32 = 0.5;

/// A mono clip kept in memory.
///
/// Cloning is cheap, the samples are shared.
#[derive(Debug, Clone)]
pub struct Clip(Arc<[f32]>);

impl Clip {
    pub fn new(samples: Vec<f32>) -> Self {
        Self(samples.into())
    }

    pub fn samples(&self) -> &[f32] {
        &self.0
    }

    /// A fresh source over the clip, one per playback.
    pub fn source(&self) -> SamplesBuffer<f32> {
        SamplesBuffer::new(1, SAMPLE_RATE, self.0.to_vec())
    }
}

/// One clip per [`Cue`].
#[derive(Debug, Clone)]
pub struct SoundBank {
    pub timer: Clip,
    pub key: Clip,
    pub success: Clip,
    pub fail: Clip,
}

impl SoundBank {
    pub fn synthesize() -> Self {
        Self {
            timer: Clip::new(generate_tick_samples(SAMPLE_RATE)),
            key: Clip::new(generate_key_samples(SAMPLE_RATE)),
            success: Clip::new(generate_success_samples(SAMPLE_RATE)),
            fail: Clip::new(generate_fail_samples(SAMPLE_RATE)),
        }
    }

    pub fn clip(&self, cue: Cue) -> &Clip {
        match cue {
            Cue::Tick => &self.timer,
            Cue::Key => &self.key,
            Cue::Success => &self.success,
            Cue::Fail => &self.fail,
        }
    }
}

fn generate_tick_samples(sample_rate: u32) -> Vec<f32> {
    let mut node = dsp::sine_hz(1200.0)
        * dsp::lfo(move |t: f32| dsp::xerp(0.2, 0.001, (t / TICK_DURATION).min(1.0)));
    render_mono(&mut node, sample_rate, TICK_DURATION)
}

fn generate_key_samples(sample_rate: u32) -> Vec<f32> {
    let mut node = (dsp::noise() >> dsp::bandpass_hz(2400.0, 0.7) >> dsp::mul(0.2))
        * dsp::lfo(move |t: f32| dsp::xerp(0.4, 0.001, (t / KEY_DURATION).min(1.0)));
    render_mono(&mut node, sample_rate, KEY_DURATION)
}

/// Rising three-note arpeggio.
fn generate_success_samples(sample_rate: u32) -> Vec<f32> {
    const NOTES: [f32; 3] = [523.0, 659.0, 784.0];
    let note_gap = 0.09f32;
    let note_len = 0.2f32;
    let total_duration = note_gap * (NOTES.len() as f32 - 1.0) + note_len;
    let total_samples = (sample_rate as f32 * total_duration) as usize;
    let mut samples = vec![0.0f32; total_samples];

    for (idx, freq) in NOTES.iter().enumerate() {
        let start = (note_gap * idx as f32 * sample_rate as f32) as usize;
        let mut node = dsp::sine_hz(*freq)
            * dsp::lfo(move |t: f32| dsp::xerp(0.12, 0.001, (t / note_len).min(1.0)));
        let tone = render_mono(&mut node, sample_rate, note_len);
        for (i, s) in tone.into_iter().enumerate() {
            if let Some(target) = samples.get_mut(start + i) {
                *target += s;
            }
        }
    }

    samples
}

/// Falling saw buzz.
fn generate_fail_samples(sample_rate: u32) -> Vec<f32> {
    let mut node = (dsp::lfo(|t: f32| dsp::lerp(300.0, 70.0, (t / 0.4).min(1.0))) >> dsp::saw())
        * dsp::lfo(move |t: f32| dsp::lerp(0.15, 0.0, (t / FAIL_DURATION).min(1.0)));
    render_mono(&mut node, sample_rate, FAIL_DURATION)
}

fn render_mono(node: &mut dyn dsp::AudioUnit, sample_rate: u32, duration: f32) -> Vec<f32> {
    node.set_sample_rate(sample_rate as f64);
    node.reset();

    let sample_count = (sample_rate as f32 * duration) as usize;
    let mut samples = Vec::with_capacity(sample_count);
    for _ in 0..sample_count {
        samples.push(node.get_mono());
    }
    samples
}
