use crate::components::{AppView, Header, Player};
use crate::player::{
    AudioController, AudioState, PlaybackProgressSignal, PlayerState, PlaylistState,
};
use dioxus::prelude::*;

/// Composition root: owns the shared player state and provides it to the
/// whole tree via context, so no component reaches for a global.
#[component]
pub fn AppShell() -> Element {
    let playlist = use_signal(PlaylistState::new);
    let progress = use_signal(|| 0.0f64);
    let audio_state = use_signal(AudioState::default);

    let player = PlayerState::new(playlist);

    use_context_provider(|| player);
    use_context_provider(|| PlaybackProgressSignal(progress));
    use_context_provider(|| audio_state);

    rsx! {
        div { class: "wrapper",
            main { class: "content",
                Header {}
                Outlet::<AppView> {}
            }
            Player {}
            AudioController {}
        }
    }
}
