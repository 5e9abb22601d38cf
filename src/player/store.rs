use dioxus::prelude::*;

use crate::api::Episode;
use crate::player::PlaylistState;

/// Elapsed seconds into the current episode, republished from the audio
/// element's own progress events. Transient: reset whenever the current
/// episode changes.
#[derive(Clone, Copy)]
pub struct PlaybackProgressSignal(pub Signal<f64>);

/// Shared handle to the player state. Every clone points at the same
/// underlying signal, so components read a consistent snapshot and issue
/// commands through the same store. Created once by the composition root
/// and handed out via context — there is no global singleton.
#[derive(Clone, Copy)]
pub struct PlayerState {
    playlist: Signal<PlaylistState>,
}

impl PlayerState {
    pub fn new(playlist: Signal<PlaylistState>) -> Self {
        Self { playlist }
    }

    /// Reactive snapshot of the whole playlist state. Reading this inside
    /// a component or effect subscribes it to every future mutation.
    pub fn playlist(&self) -> PlaylistState {
        let playlist = self.playlist;
        playlist()
    }

    pub fn current_episode(&self) -> Option<Episode> {
        self.playlist().current_episode().cloned()
    }

    pub fn is_playing(&self) -> bool {
        self.playlist().is_playing
    }

    pub fn has_next(&self) -> bool {
        self.playlist().has_next()
    }

    pub fn has_previous(&self) -> bool {
        self.playlist().has_previous()
    }

    pub fn play(&self, episode: Episode) {
        let mut playlist = self.playlist;
        playlist.write().play(episode);
    }

    pub fn play_list(&self, list: Vec<Episode>, index: usize) {
        let mut playlist = self.playlist;
        playlist.write().play_list(list, index);
    }

    pub fn toggle_play(&self) {
        let mut playlist = self.playlist;
        playlist.write().toggle_play();
    }

    pub fn toggle_loop(&self) {
        let mut playlist = self.playlist;
        playlist.write().toggle_loop();
    }

    pub fn toggle_shuffle(&self) {
        let mut playlist = self.playlist;
        playlist.write().toggle_shuffle();
    }

    pub fn set_playing_state(&self, state: bool) {
        let mut playlist = self.playlist;
        playlist.write().set_playing_state(state);
    }

    pub fn clear_player_state(&self) {
        let mut playlist = self.playlist;
        playlist.write().clear_player_state();
    }

    pub fn play_next(&self) {
        let mut playlist = self.playlist;
        playlist.write().play_next();
    }

    pub fn play_previous(&self) {
        let mut playlist = self.playlist;
        playlist.write().play_previous();
    }
}
