use crate::components::Icon;
use crate::player::{seek_to, AudioState, PlaybackProgressSignal, PlayerState};
use crate::utils::{clamp_seek_position, convert_duration_to_time_string};
use dioxus::prelude::*;

#[component]
pub fn Player() -> Element {
    let player = use_context::<PlayerState>();
    let mut progress = use_context::<PlaybackProgressSignal>().0;
    let audio_state = use_context::<Signal<AudioState>>();

    let state = player.playlist();
    let episode = player.current_episode();
    let playback_error = (audio_state().playback_error)();

    let elapsed = progress();
    let duration = episode.as_ref().map(|e| e.duration).unwrap_or(0);
    let has_episode = episode.is_some();
    let single_episode_list = state.episode_list.len() == 1;

    let on_seek = move |e: Event<FormData>| {
        if let Ok(amount) = e.value().parse::<f64>() {
            let amount = clamp_seek_position(amount, duration);
            seek_to(amount);
            // Optimistic update so the slider does not snap back while
            // waiting for the next device progress tick
            progress.set(amount);
        }
    };

    rsx! {
        div { class: "player-container",
            header { class: "player-header",
                Icon {
                    name: "headphones".to_string(),
                    class: "player-header-icon".to_string(),
                }
                strong { "Now playing" }
            }

            if let Some(message) = playback_error {
                div { class: "player-error", "{message}" }
            }

            {
                match &episode {
                    Some(episode) => rsx! {
                        div { class: "current-episode",
                            img { src: "{episode.thumbnail}", alt: "{episode.title}" }
                            strong { "{episode.title}" }
                            span { "{episode.members}" }
                        }
                    },
                    None => rsx! {
                        div { class: "empty-player",
                            strong { "Select a podcast to listen to" }
                        }
                    },
                }
            }

            footer { class: if has_episode { "player-footer" } else { "player-footer empty" },
                div { class: "player-progress",
                    span { {convert_duration_to_time_string(elapsed.floor() as u32)} }
                    div { class: "player-slider",
                        if has_episode {
                            input {
                                r#type: "range",
                                min: "0",
                                max: "{duration}",
                                value: elapsed.floor() as i64,
                                oninput: on_seek,
                            }
                        } else {
                            div { class: "empty-slider" }
                        }
                    }
                    span {
                        {
                            episode
                                .as_ref()
                                .map(|e| e.duration_as_string.clone())
                                .unwrap_or_else(|| convert_duration_to_time_string(0))
                        }
                    }
                }

                div { class: "player-buttons",
                    button {
                        r#type: "button",
                        class: if state.is_shuffling { "player-button is-active" } else { "player-button" },
                        disabled: !has_episode || single_episode_list,
                        onclick: move |_| player.toggle_shuffle(),
                        Icon {
                            name: "shuffle".to_string(),
                            class: "player-button-icon".to_string(),
                        }
                    }
                    button {
                        r#type: "button",
                        class: "player-button",
                        disabled: !has_episode || !player.has_previous(),
                        onclick: move |_| player.play_previous(),
                        Icon {
                            name: "play-previous".to_string(),
                            class: "player-button-icon".to_string(),
                        }
                    }
                    button {
                        r#type: "button",
                        class: "player-button play-button",
                        disabled: !has_episode,
                        onclick: move |_| player.toggle_play(),
                        if state.is_playing {
                            Icon {
                                name: "pause".to_string(),
                                class: "player-button-icon".to_string(),
                            }
                        } else {
                            Icon {
                                name: "play".to_string(),
                                class: "player-button-icon".to_string(),
                            }
                        }
                    }
                    button {
                        r#type: "button",
                        class: "player-button",
                        disabled: !has_episode || !player.has_next(),
                        onclick: move |_| player.play_next(),
                        Icon {
                            name: "play-next".to_string(),
                            class: "player-button-icon".to_string(),
                        }
                    }
                    button {
                        r#type: "button",
                        class: if state.is_looping { "player-button is-active" } else { "player-button" },
                        disabled: !has_episode,
                        onclick: move |_| player.toggle_loop(),
                        Icon {
                            name: "repeat".to_string(),
                            class: "player-button-icon".to_string(),
                        }
                    }
                }
            }
        }
    }
}
