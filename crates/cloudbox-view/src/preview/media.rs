//! Video player state.

use serde::Serialize;

/// Play and mute flags for the video player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoState {
    /// Whether playback is running.
    pub is_playing: bool,
    /// Whether sound is muted.
    pub is_muted: bool,
}

impl VideoState {
    /// Fresh state for a newly opened video.
    pub fn new(auto_play: bool) -> Self {
        Self {
            is_playing: auto_play,
            is_muted: false,
        }
    }

    /// Play/pause button.
    pub fn toggle_play(&mut self) -> bool {
        self.is_playing = !self.is_playing;
        self.is_playing
    }

    /// Mute button.
    pub fn toggle_mute(&mut self) -> bool {
        self.is_muted = !self.is_muted;
        self.is_muted
    }

    /// The host refused to start playback.
    pub fn autoplay_blocked(&mut self) {
        self.is_playing = false;
    }
}
