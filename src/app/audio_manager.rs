use std::io::{BufReader, Cursor};
use std::sync::Arc;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use tracing::info;

use crate::core::combat::ShotOutcome;

fn load_bytes_any(paths: &[&str]) -> Option<Arc<Vec<u8>>> {
    paths.iter().find_map(|p| std::fs::read(p).ok()).map(Arc::new)
}

/// Gun sound effects. Each clip is optional; missing files are silent.
pub struct AudioManager {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    shot: Option<Arc<Vec<u8>>>,
    hit: Option<Arc<Vec<u8>>>,
    kill: Option<Arc<Vec<u8>>>,
    volume: f32,
}

impl AudioManager {
    /// `None` when there is no output device.
    pub fn new() -> Option<Self> {
        let (_stream, handle) = OutputStream::try_default().ok()?;
        Some(Self { _stream, handle, shot: None, hit: None, kill: None, volume: 0.8 })
    }

    pub fn load_sfx_auto(&mut self) {
        self.shot = load_bytes_any(&["assets/sfx_shot.wav", "assets/sounds/shot.wav", "assets/sounds/gun.wav"]);
        self.hit = load_bytes_any(&["assets/sfx_hit.wav", "assets/sounds/hit.wav"]);
        self.kill = load_bytes_any(&["assets/sfx_kill.wav", "assets/sounds/kill.wav", "assets/sounds/death.wav"]);
        info!(
            shot = self.shot.is_some(),
            hit = self.hit.is_some(),
            kill = self.kill.is_some(),
            "sound effects loaded"
        );
    }

    /// Plays the clips matching a shot. Dropped shots make no sound.
    pub fn on_shot(&self, outcome: ShotOutcome) {
        match outcome {
            ShotOutcome::CoolingDown => {}
            ShotOutcome::Miss => self.play(&self.shot),
            ShotOutcome::Hit { .. } => {
                self.play(&self.shot);
                self.play(&self.hit);
            }
            ShotOutcome::Kill { .. } => {
                self.play(&self.shot);
                self.play(&self.kill);
            }
        }
    }

    // own sink per clip so overlapping shots all trigger immediately
    fn play(&self, data: &Option<Arc<Vec<u8>>>) {
        let Some(d) = data else { return };
        if let Ok(dec) = Decoder::new(BufReader::new(Cursor::new(d.as_ref().clone()))) {
            if let Ok(sink) = Sink::try_new(&self.handle) {
                sink.append(dec.amplify(self.volume));
                sink.detach();
            }
        }
    }
}
