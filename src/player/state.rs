use crate::api::Episode;
use rand::Rng;

/// The playlist aggregate behind the player: the loaded episodes, which one
/// is current, and the three playback flags. Pure state, no device access —
/// the audio element is reconciled separately by the controller, so
/// `is_playing` records intent rather than observed device state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaylistState {
    pub episode_list: Vec<Episode>,
    pub current_episode_index: usize,
    pub is_playing: bool,
    pub is_looping: bool,
    pub is_shuffling: bool,
}

impl PlaylistState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the playlist with a single episode and start playing it.
    pub fn play(&mut self, episode: Episode) {
        self.episode_list = vec![episode];
        self.current_episode_index = 0;
        self.is_playing = true;
    }

    /// Replace the playlist and jump to `index`. The caller guarantees
    /// `index` is in range for `list`; out-of-range indices are a contract
    /// violation, not clamped here.
    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) {
        self.episode_list = list;
        self.current_episode_index = index;
        self.is_playing = true;
    }

    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
    }

    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
    }

    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
    }

    /// Force `is_playing` to match device truth (e.g. hardware media keys
    /// started or stopped playback behind the UI's back).
    pub fn set_playing_state(&mut self, state: bool) {
        self.is_playing = state;
    }

    /// Empty the playlist and reset the index. The playback flags are left
    /// alone on purpose: loop/shuffle preferences survive the queue ending.
    pub fn clear_player_state(&mut self) {
        self.episode_list = Vec::new();
        self.current_episode_index = 0;
    }

    pub fn has_previous(&self) -> bool {
        self.current_episode_index > 0
    }

    /// Under shuffle this is unconditionally true, even for a one-episode
    /// list — shuffle mode never "runs out" of forward navigation.
    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.current_episode_index + 1 < self.episode_list.len()
    }

    /// Advance to the next episode. Shuffle picks uniformly over the whole
    /// list and may land on the current episode again; sequential mode
    /// stops at the end of the list.
    pub fn play_next(&mut self) {
        if self.episode_list.is_empty() {
            return;
        }
        if self.is_shuffling {
            let next = rand::thread_rng().gen_range(0..self.episode_list.len());
            self.current_episode_index = next;
        } else if self.current_episode_index + 1 < self.episode_list.len() {
            self.current_episode_index += 1;
        }
    }

    /// Step back one episode. Shuffle only randomizes forward navigation,
    /// so previous is always sequential.
    pub fn play_previous(&mut self) {
        if self.has_previous() {
            self.current_episode_index -= 1;
        }
    }

    pub fn current_episode(&self) -> Option<&Episode> {
        self.episode_list.get(self.current_episode_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(id: &str) -> Episode {
        Episode {
            id: id.to_string(),
            title: format!("Episode {id}"),
            members: "Ada and Grace".to_string(),
            duration: 1800,
            url: format!("https://example.com/{id}.mp3"),
            ..Episode::default()
        }
    }

    fn three_episodes() -> Vec<Episode> {
        vec![episode("a"), episode("b"), episode("c")]
    }

    #[test]
    fn play_replaces_playlist_with_single_episode() {
        let mut state = PlaylistState::new();
        state.play_list(three_episodes(), 2);

        state.play(episode("solo"));
        assert_eq!(state.episode_list.len(), 1);
        assert_eq!(state.current_episode_index, 0);
        assert!(state.is_playing);
        assert_eq!(state.current_episode().unwrap().id, "solo");
    }

    #[test]
    fn play_list_starts_at_given_index() {
        let mut state = PlaylistState::new();
        state.play_list(three_episodes(), 1);

        assert_eq!(state.current_episode_index, 1);
        assert!(state.is_playing);
        assert!(state.has_next());
        assert!(state.has_previous());
    }

    #[test]
    fn play_next_advances_sequentially() {
        let mut state = PlaylistState::new();
        state.play_list(three_episodes(), 1);

        state.play_next();
        assert_eq!(state.current_episode_index, 2);
        assert!(!state.has_next());
    }

    #[test]
    fn play_next_is_a_noop_on_last_episode() {
        let mut state = PlaylistState::new();
        state.play_list(three_episodes(), 2);

        state.play_next();
        assert_eq!(state.current_episode_index, 2);
    }

    #[test]
    fn play_next_on_empty_playlist_does_nothing() {
        let mut state = PlaylistState::new();
        state.play_next();
        assert_eq!(state.current_episode_index, 0);
        assert!(state.episode_list.is_empty());
    }

    #[test]
    fn play_previous_steps_back_and_stops_at_zero() {
        let mut state = PlaylistState::new();
        state.play_list(three_episodes(), 1);

        state.play_previous();
        assert_eq!(state.current_episode_index, 0);

        state.play_previous();
        assert_eq!(state.current_episode_index, 0);
    }

    #[test]
    fn shuffle_pick_stays_in_range() {
        let mut state = PlaylistState::new();
        state.play_list(three_episodes(), 0);
        state.toggle_shuffle();

        for _ in 0..50 {
            state.play_next();
            assert!(state.current_episode_index < state.episode_list.len());
        }
    }

    #[test]
    fn shuffle_on_single_episode_keeps_index_zero() {
        let mut state = PlaylistState::new();
        state.play(episode("only"));
        state.toggle_shuffle();

        state.play_next();
        assert_eq!(state.current_episode_index, 0);
    }

    #[test]
    fn has_next_is_always_true_under_shuffle() {
        // Preserved quirk: a single-episode shuffled list still reports a
        // next episode.
        let mut state = PlaylistState::new();
        state.play(episode("only"));
        assert!(!state.has_next());

        state.toggle_shuffle();
        assert!(state.has_next());
    }

    #[test]
    fn shuffle_does_not_affect_previous_navigation() {
        let mut state = PlaylistState::new();
        state.play_list(three_episodes(), 2);
        state.toggle_shuffle();

        state.play_previous();
        assert_eq!(state.current_episode_index, 1);
    }

    #[test]
    fn toggle_play_twice_round_trips() {
        let mut state = PlaylistState::new();
        assert!(!state.is_playing);
        state.toggle_play();
        state.toggle_play();
        assert!(!state.is_playing);
    }

    #[test]
    fn toggles_are_independent() {
        let mut state = PlaylistState::new();
        state.toggle_loop();
        state.toggle_shuffle();
        assert!(state.is_looping);
        assert!(state.is_shuffling);
        assert!(!state.is_playing);

        state.toggle_loop();
        assert!(!state.is_looping);
        assert!(state.is_shuffling);
    }

    #[test]
    fn clear_player_state_empties_list_and_resets_index() {
        let mut state = PlaylistState::new();
        state.play_list(three_episodes(), 2);
        state.toggle_loop();

        state.clear_player_state();
        assert!(state.episode_list.is_empty());
        assert_eq!(state.current_episode_index, 0);
        // Flags are untouched by design.
        assert!(state.is_playing);
        assert!(state.is_looping);
    }

    #[test]
    fn current_episode_is_none_when_empty() {
        let state = PlaylistState::new();
        assert!(state.current_episode().is_none());
    }

    #[test]
    fn end_of_track_policy_on_last_episode_clears_the_player() {
        // Mirrors the controller's ended handler: no next episode means the
        // player is cleared rather than stopped in place.
        let mut state = PlaylistState::new();
        state.play_list(three_episodes(), 2);

        if state.has_next() {
            state.play_next();
        } else {
            state.clear_player_state();
        }
        assert!(state.episode_list.is_empty());
        assert_eq!(state.current_episode_index, 0);
    }
}
