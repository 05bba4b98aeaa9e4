use std::path::Path;

use log::{info, warn};
use sdl2::mixer::{self, Channel, Chunk, Music};
use sdl2::{AudioSubsystem, Sdl};

use crate::paths::SoundPaths;

#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum Sfx {
    Jump,
    Die,
}

/// One-shot playback is fire-and-forget; components only ever say *which*
/// sound, so tests substitute a call-recording sink.
pub trait SoundSink {
    fn play(&mut self, sfx: Sfx);
}

pub struct Mixer {
    _audio: AudioSubsystem,
    music: Music<'static>,
    jump: Chunk,
    die: Chunk,
}

impl Mixer {
    pub fn new(sdl: &Sdl, sounds: &SoundPaths) -> Result<Self, String> {
        let audio = sdl.audio()?;
        mixer::open_audio(
            44_100,
            mixer::DEFAULT_FORMAT,
            mixer::DEFAULT_CHANNELS,
            2_048,
        )?;
        mixer::allocate_channels(8);
        info!("Mixer: audio device open");

        let music = Music::from_file(&sounds.music)
            .map_err(|e| format!("loading `{}`: {}", sounds.music.display(), e))?;
        let jump = load_chunk(&sounds.jump)?;
        let die = load_chunk(&sounds.die)?;
        Ok(Self {
            _audio: audio,
            music,
            jump,
            die,
        })
    }

    pub fn play_music(&self) -> Result<(), String> {
        self.music.play(-1)
    }
}

fn load_chunk(path: &Path) -> Result<Chunk, String> {
    Chunk::from_file(path).map_err(|e| format!("loading `{}`: {}", path.display(), e))
}

impl SoundSink for Mixer {
    fn play(&mut self, sfx: Sfx) {
        let chunk = match sfx {
            Sfx::Jump => &self.jump,
            Sfx::Die => &self.die,
        };
        if let Err(e) = Channel::all().play(chunk, 0) {
            warn!("Mixer: couldn't play {:?}: {}", sfx, e);
        }
    }
}

impl Drop for Mixer {
    fn drop(&mut self) {
        Music::halt();
        mixer::close_audio();
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub played: Vec<Sfx>,
}

#[cfg(test)]
impl SoundSink for RecordingSink {
    fn play(&mut self, sfx: Sfx) {
        self.played.push(sfx);
    }
}
