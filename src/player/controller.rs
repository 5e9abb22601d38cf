//! Audio controller - keeps the browser audio element synchronized with the
//! player store outside of the component render cycle, so unrelated state
//! changes never restart playback.

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::player::{PlaybackProgressSignal, PlayerState};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

/// Device-side state that persists across renders. Playback position is
/// published through `PlaybackProgressSignal`; this only carries what the
/// UI cannot derive from the playlist itself.
#[derive(Clone)]
pub struct AudioState {
    pub playback_error: Signal<Option<String>>,
}

impl Default for AudioState {
    fn default() -> Self {
        Self {
            playback_error: Signal::new(None),
        }
    }
}

/// Initialize the global audio element once.
#[cfg(target_arch = "wasm32")]
pub fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id("rustcast-audio") {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id("rustcast-audio");
    // Keep preload light so we stream instead of buffering entire files
    audio.set_attribute("preload", "metadata").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(dead_code)]
pub fn get_or_create_audio_element() -> Option<()> {
    None
}

#[cfg(target_arch = "wasm32")]
fn describe_media_error(audio: &HtmlAudioElement) -> String {
    match audio.error().map(|e| e.code()) {
        Some(2) => "Playback failed: a network error interrupted the episode".to_string(),
        Some(3) => "Playback failed: the episode audio could not be decoded".to_string(),
        Some(4) => "Playback failed: the episode source is not supported".to_string(),
        _ => "Playback failed".to_string(),
    }
}

/// Render-less component that owns the audio element and reconciles it with
/// the player store: source rebinding, play/pause intent, native looping,
/// progress publishing, auto-advance on track end, and reconciliation of
/// device-originated play/pause events.
#[cfg(target_arch = "wasm32")]
#[component]
pub fn AudioController() -> Element {
    let player = use_context::<PlayerState>();
    let progress = use_context::<PlaybackProgressSignal>().0;
    let audio_state = use_context::<Signal<AudioState>>();

    // Track the current episode identity to detect changes
    let mut last_episode_id = use_signal(|| None::<String>);
    let mut last_src = use_signal(|| None::<String>);

    // Initialize the audio element and register device event listeners once
    use_effect(move || {
        let Some(audio) = get_or_create_audio_element() else {
            return;
        };

        // Progress ticks at the element's own cadence, throttled to ~5fps
        // to avoid excessive re-renders
        let mut progress_signal = progress;
        let mut last_emit = 0.0f64;
        let time_closure = Closure::wrap(Box::new(move || {
            if let Some(audio) = get_or_create_audio_element() {
                let time = audio.current_time();
                if (time - last_emit).abs() >= 0.2 {
                    last_emit = time;
                    progress_signal.set(time);
                }
            }
        }) as Box<dyn FnMut()>);
        audio.set_ontimeupdate(Some(time_closure.as_ref().unchecked_ref()));
        time_closure.forget();

        // Metadata arriving means a fresh source is bound; snap the cursor
        // back in case a throttled tick from the previous track landed
        // after the rebind
        let mut meta_progress_signal = progress;
        let meta_closure = Closure::wrap(Box::new(move || {
            meta_progress_signal.set(0.0);
        }) as Box<dyn FnMut()>);
        audio.set_onloadedmetadata(Some(meta_closure.as_ref().unchecked_ref()));
        meta_closure.forget();

        // Natural end of track: advance, or clear the player when the
        // queue is exhausted. Looping never reaches here because it is
        // delegated to the element's native loop flag.
        let end_closure = Closure::wrap(Box::new(move || {
            if player.playlist().has_next() {
                player.play_next();
            } else {
                player.clear_player_state();
            }
        }) as Box<dyn FnMut()>);
        audio.set_onended(Some(end_closure.as_ref().unchecked_ref()));
        end_closure.forget();

        // Device-originated play/pause (hardware media keys bypass the UI).
        // Compare intent with observed state first so commands this
        // controller issued itself do not echo back as new commands.
        let play_closure = Closure::wrap(Box::new(move || {
            if !player.playlist().is_playing {
                player.set_playing_state(true);
            }
        }) as Box<dyn FnMut()>);
        audio.set_onplay(Some(play_closure.as_ref().unchecked_ref()));
        play_closure.forget();

        let pause_closure = Closure::wrap(Box::new(move || {
            if player.playlist().is_playing {
                player.set_playing_state(false);
            }
        }) as Box<dyn FnMut()>);
        audio.set_onpause(Some(pause_closure.as_ref().unchecked_ref()));
        pause_closure.forget();

        // Device failure: surface a message and stop pretending to play.
        // Errors fired while tearing the source down (empty playlist) are
        // not real playback failures and are ignored.
        let mut error_signal = audio_state().playback_error;
        let error_closure = Closure::wrap(Box::new(move || {
            if player.playlist().current_episode().is_none() {
                return;
            }
            if let Some(audio) = get_or_create_audio_element() {
                error_signal.set(Some(describe_media_error(&audio)));
            }
            if player.playlist().is_playing {
                player.set_playing_state(false);
            }
        }) as Box<dyn FnMut()>);
        audio.set_onerror(Some(error_closure.as_ref().unchecked_ref()));
        error_closure.forget();
    });

    // Rebind the source when the current episode identity changes. Binding
    // happens before the play intent is reconciled below so a freshly
    // selected episode never plays a stale source.
    use_effect(move || {
        let state = player.playlist();
        let episode = state.current_episode().cloned();
        let episode_id = episode.as_ref().map(|e| e.id.clone());

        // Only rebind if the episode actually changed
        if episode_id == last_episode_id() {
            return;
        }
        last_episode_id.set(episode_id);

        let Some(audio) = get_or_create_audio_element() else {
            return;
        };

        let mut error_signal = audio_state().playback_error;
        let mut progress_signal = progress;

        match episode {
            Some(episode) => {
                if Some(episode.url.clone()) != last_src() {
                    last_src.set(Some(episode.url.clone()));
                    audio.set_src(&episode.url);
                }
                audio.set_loop(state.is_looping);
                audio.set_current_time(0.0);
                error_signal.set(None);
                progress_signal.set(0.0);

                if state.is_playing {
                    let _ = audio.play();
                } else {
                    let _ = audio.pause();
                }
            }
            None => {
                let _ = audio.pause();
                audio.set_src("");
                last_src.set(None);
                progress_signal.set(0.0);
            }
        }
    });

    // Reconcile play/pause intent with the element, deduplicated against
    // its observed paused state
    use_effect(move || {
        let playing = player.is_playing();
        let Some(audio) = get_or_create_audio_element() else {
            return;
        };
        if player.current_episode().is_none() {
            return;
        }
        if playing {
            if audio.paused() {
                let _ = audio.play();
            }
        } else if !audio.paused() {
            let _ = audio.pause();
        }
    });

    // Looping is passed straight through as the element's native loop flag
    use_effect(move || {
        let looping = player.playlist().is_looping;
        if let Some(audio) = get_or_create_audio_element() {
            audio.set_loop(looping);
        }
    });

    // Return empty element - this component just manages the device
    rsx! {}
}

#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn AudioController() -> Element {
    rsx! {}
}

/// Seek to a specific position in the current episode
#[cfg(target_arch = "wasm32")]
pub fn seek_to(position: f64) {
    if let Some(audio) = get_or_create_audio_element() {
        audio.set_current_time(position);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn seek_to(_position: f64) {}
