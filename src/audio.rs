//! Fire-and-forget sound cues.
//!
//! The tones are synthesized at startup, so the game ships without audio
//! assets. A cue that fails to load just stays silent.

use macroquad::audio::{self, PlaySoundParams, Sound, load_sound_from_bytes};
use macroquad::logging::warn;

const SAMPLE_RATE: u32 = 44100;

/// Sounds the game can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// An apple was eaten
    Eat,
    /// The snake died
    GameOver,
}

impl Cue {
    /// (frequency Hz, duration s, relative loudness)
    fn tone(self) -> (f32, f32, f32) {
        match self {
            Cue::Eat => (880.0, 0.08, 0.35),
            Cue::GameOver => (110.0, 0.45, 0.6),
        }
    }
}

/// Anything that can play a cue. Playback problems never reach the caller.
pub trait CuePlayer {
    fn play(&mut self, cue: Cue);
}

/// Plays nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl CuePlayer for Silent {
    fn play(&mut self, _cue: Cue) {}
}

/// Generated tones played through macroquad's audio backend
pub struct SoundBank {
    eat: Option<Sound>,
    game_over: Option<Sound>,
    volume: f32,
}

impl SoundBank {
    pub async fn load(volume: f32) -> Self {
        Self {
            eat: load_cue(Cue::Eat).await,
            game_over: load_cue(Cue::GameOver).await,
            volume: volume.clamp(0.0, 1.0),
        }
    }

    fn sound(&self, cue: Cue) -> Option<&Sound> {
        match cue {
            Cue::Eat => self.eat.as_ref(),
            Cue::GameOver => self.game_over.as_ref(),
        }
    }
}

impl CuePlayer for SoundBank {
    fn play(&mut self, cue: Cue) {
        if self.volume <= 0.0 {
            return;
        }
        if let Some(sound) = self.sound(cue) {
            let (_, _, loudness) = cue.tone();
            audio::play_sound(
                sound,
                PlaySoundParams {
                    looped: false,
                    volume: loudness * self.volume,
                },
            );
        }
    }
}

async fn load_cue(cue: Cue) -> Option<Sound> {
    let (frequency, duration, _) = cue.tone();
    let bytes = sine_wav(frequency, duration, 0.7);
    match load_sound_from_bytes(&bytes).await {
        Ok(sound) => Some(sound),
        Err(err) => {
            warn!("Failed to load {:?} cue: {:?}", cue, err);
            None
        }
    }
}

/// PCM16 mono WAV of a sine tone
pub fn sine_wav(frequency_hz: f32, duration_seconds: f32, volume: f32) -> Vec<u8> {
    let num_samples = (duration_seconds.max(0.0) * SAMPLE_RATE as f32) as u32;
    let block_align: u16 = 2;
    let byte_rate = SAMPLE_RATE * block_align as u32;
    let data_size = num_samples * 2;

    let mut data: Vec<u8> = Vec::with_capacity(data_size as usize + 44);
    data.extend_from_slice(b"RIFF");
    data.extend_from_slice(&(36 + data_size).to_le_bytes());
    data.extend_from_slice(b"WAVE");
    data.extend_from_slice(b"fmt ");
    data.extend_from_slice(&16u32.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes()); // PCM
    data.extend_from_slice(&1u16.to_le_bytes()); // mono
    data.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    data.extend_from_slice(&byte_rate.to_le_bytes());
    data.extend_from_slice(&block_align.to_le_bytes());
    data.extend_from_slice(&16u16.to_le_bytes());
    data.extend_from_slice(b"data");
    data.extend_from_slice(&data_size.to_le_bytes());

    let amplitude = volume.clamp(0.0, 1.0) * i16::MAX as f32;
    // Linear fade-out keeps the tone from ending in a click
    for n in 0..num_samples {
        let t = n as f32 / SAMPLE_RATE as f32;
        let fade = 1.0 - n as f32 / num_samples as f32;
        let sample = (amplitude * fade * (std::f32::consts::TAU * frequency_hz * t).sin()) as i16;
        data.extend_from_slice(&sample.to_le_bytes());
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wav_header() {
        let wav = sine_wav(440.0, 0.01, 0.5);
        let samples = (0.01 * SAMPLE_RATE as f32) as usize;

        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[36..40], b"data");
        assert_eq!(wav.len(), 44 + samples * 2);
        let data_size = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]);
        assert_eq!(data_size as usize, samples * 2);
    }

    #[test]
    fn test_empty_tone() {
        assert_eq!(sine_wav(440.0, 0.0, 1.0).len(), 44);
    }

    #[test]
    fn test_cues_sound_different() {
        assert_ne!(Cue::Eat.tone().0, Cue::GameOver.tone().0);
    }
}
