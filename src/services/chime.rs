//! Two-tone completion chime
//!
//! Two sine tones sounding together, each starting at gain 0.3 and ramping
//! down exponentially to 0.01 over two seconds.

use std::f32::consts::PI;
use std::time::Duration;

/// Tone frequencies in Hz
pub const CHIME_FREQUENCIES: [f32; 2] = [880.0, 1320.0];
pub const START_GAIN: f32 = 0.3;
pub const END_GAIN: f32 = 0.01;
pub const CHIME_DURATION: Duration = Duration::from_secs(2);

const SAMPLE_RATE: u32 = 44_100;

/// Mono sample generator for one chime
pub struct Chime {
    sample_rate: u32,
    num_sample: usize,
    total_samples: usize,
}

impl Chime {
    pub fn new() -> Self {
        Self::with_sample_rate(SAMPLE_RATE)
    }

    pub fn with_sample_rate(sample_rate: u32) -> Self {
        let total_samples = (CHIME_DURATION.as_secs_f64() * sample_rate as f64) as usize;
        Self {
            sample_rate,
            num_sample: 0,
            total_samples,
        }
    }

    /// Per-tone gain `t` seconds into the chime
    pub fn gain_at(t: f32) -> f32 {
        let fraction = (t / CHIME_DURATION.as_secs_f32()).clamp(0.0, 1.0);
        START_GAIN * (END_GAIN / START_GAIN).powf(fraction)
    }
}

impl Default for Chime {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Chime {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.num_sample >= self.total_samples {
            return None;
        }

        let t = self.num_sample as f32 / self.sample_rate as f32;
        self.num_sample += 1;

        let gain = Self::gain_at(t);
        let sample: f32 = CHIME_FREQUENCIES
            .iter()
            .map(|freq| (2.0 * PI * freq * t).sin() * gain)
            .sum();

        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total_samples - self.num_sample;
        (left, Some(left))
    }
}

#[cfg(feature = "audio")]
impl rodio::Source for Chime {
    fn current_frame_len(&self) -> Option<usize> {
        Some(self.total_samples - self.num_sample)
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(CHIME_DURATION)
    }
}
