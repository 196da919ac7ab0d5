// NeonArcade
// copyright agam 2024~2025

//! Audio module: a small playlist controller for background music.
//!
//! One rodio sink on the default output stream plays the current track;
//! switching tracks preserves the play/pause state. Missing files, codec
//! failures and absent output devices are logged warnings, never fatal,
//! reference https://docs.rs/rodio

use log::{info, warn};
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};
use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Track {
    pub title: String,
    pub path: String,
}

pub struct Audio {
    tracks: Vec<Track>,
    index: usize,
    volume: f32,
    // the stream must outlive the sink or playback stops
    _stream: Option<OutputStream>,
    sink: Option<Sink>,
}

impl Default for Audio {
    fn default() -> Self {
        Self::new()
    }
}

impl Audio {
    pub fn new() -> Self {
        Self {
            tracks: vec![],
            index: 0,
            volume: 0.5,
            _stream: None,
            sink: None,
        }
    }

    pub fn add_track(&mut self, title: &str, path: &str) {
        self.tracks.push(Track {
            title: title.to_string(),
            path: path.to_string(),
        });
    }

    pub fn current_track_title(&self) -> &str {
        self.tracks
            .get(self.index)
            .map(|t| t.title.as_str())
            .unwrap_or("")
    }

    pub fn is_playing(&self) -> bool {
        match &self.sink {
            Some(sink) => !sink.is_paused() && !sink.empty(),
            None => false,
        }
    }

    pub fn toggle_play(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn play(&mut self) {
        let loaded = self.sink.as_ref().map(|s| !s.empty()).unwrap_or(false);
        if loaded {
            if let Some(sink) = &self.sink {
                sink.play();
            }
        } else {
            self.load_current(true);
        }
    }

    pub fn pause(&mut self) {
        if let Some(sink) = &self.sink {
            sink.pause();
        }
    }

    pub fn next_track(&mut self) {
        self.switch_track(1);
    }

    pub fn prev_track(&mut self) {
        self.switch_track(-1);
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        if let Some(sink) = &self.sink {
            sink.set_volume(self.volume);
        }
    }

    /// Playback position inside the current track.
    pub fn position(&self) -> Duration {
        match &self.sink {
            Some(sink) => sink.get_pos(),
            None => Duration::ZERO,
        }
    }

    pub fn seek(&mut self, pos: Duration) {
        if let Some(sink) = &self.sink {
            if let Err(e) = sink.try_seek(pos) {
                warn!("seek failed: {:?}", e);
            }
        }
    }

    fn switch_track(&mut self, delta: i32) {
        if self.tracks.is_empty() {
            return;
        }
        self.step(delta);
        let was_playing = self.is_playing();
        self.load_current(was_playing);
    }

    fn step(&mut self, delta: i32) {
        let len = self.tracks.len() as i32;
        self.index = ((self.index as i32 + delta).rem_euclid(len)) as usize;
    }

    fn ensure_sink(&mut self) -> bool {
        if self.sink.is_some() {
            return true;
        }
        match OutputStreamBuilder::open_default_stream() {
            Ok(stream) => {
                let sink = Sink::connect_new(stream.mixer());
                sink.set_volume(self.volume);
                self._stream = Some(stream);
                self.sink = Some(sink);
                true
            }
            Err(e) => {
                warn!("Failed to open audio stream: {}", e);
                false
            }
        }
    }

    fn load_current(&mut self, start_playing: bool) {
        let track = match self.tracks.get(self.index) {
            Some(t) => t.clone(),
            None => return,
        };
        if !self.ensure_sink() {
            return;
        }
        let sink = self.sink.as_ref().unwrap();
        sink.clear();
        match File::open(&track.path) {
            Ok(file) => match Decoder::try_from(BufReader::new(file)) {
                Ok(source) => {
                    sink.append(source);
                    if start_playing {
                        sink.play();
                    }
                    info!("Audio track loaded: {}", track.path);
                }
                Err(e) => warn!("Failed to decode audio file '{}': {}", track.path, e),
            },
            Err(e) => warn!("Failed to open audio file '{}': {}", track.path, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist() -> Audio {
        let mut a = Audio::new();
        a.add_track("Off My Skin", "assets/music/off_my_skin.mp3");
        a.add_track("Shadow in My Veins", "assets/music/shadow_in_my_veins.mp3");
        a.add_track("Cyber Dreams", "assets/music/cyber_dreams.mp3");
        a
    }

    #[test]
    fn test_track_titles_wrap_forward_and_back() {
        let mut a = playlist();
        assert_eq!(a.current_track_title(), "Off My Skin");
        a.step(1);
        assert_eq!(a.current_track_title(), "Shadow in My Veins");
        a.step(2);
        assert_eq!(a.current_track_title(), "Off My Skin");
        a.step(-1);
        assert_eq!(a.current_track_title(), "Cyber Dreams");
    }

    #[test]
    fn test_empty_playlist_is_inert() {
        let mut a = Audio::new();
        a.next_track();
        a.prev_track();
        assert_eq!(a.current_track_title(), "");
        assert!(!a.is_playing());
        assert_eq!(a.position(), Duration::ZERO);
    }

    #[test]
    fn test_volume_is_clamped() {
        let mut a = playlist();
        a.set_volume(3.0);
        assert_eq!(a.volume(), 1.0);
        a.set_volume(-1.0);
        assert_eq!(a.volume(), 0.0);
    }
}
