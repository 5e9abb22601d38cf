use crate::api::PodcastClient;
use crate::components::{AppView, Icon};
use crate::player::PlayerState;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

#[component]
pub fn EpisodeView(id: String) -> Element {
    let player = use_context::<PlayerState>();

    let episode = use_resource(move || {
        let id = id.clone();
        async move {
            PodcastClient::new().get_episode(&id).await.map_err(|message| {
                warn!("failed to load episode: {message}");
                message
            })
        }
    });

    rsx! {
        div { class: "episode-page",
            {
                match episode() {
                    None => rsx! {
                        p { class: "page-status", "Loading episode..." }
                    },
                    Some(Err(message)) => rsx! {
                        Link { class: "back-button", to: AppView::HomeView {},
                            Icon {
                                name: "arrow-left".to_string(),
                                class: "back-button-icon".to_string(),
                            }
                            "Back"
                        }
                        p { class: "page-status page-status-error",
                            "Could not load this episode: {message}"
                        }
                    },
                    Some(Ok(episode)) => rsx! {
                        div { class: "episode-thumbnail-container",
                            Link { class: "back-button", to: AppView::HomeView {},
                                Icon {
                                    name: "arrow-left".to_string(),
                                    class: "back-button-icon".to_string(),
                                }
                            }
                            img { src: "{episode.thumbnail}", alt: "{episode.title}" }
                            button {
                                r#type: "button",
                                class: "episode-play-button",
                                onclick: {
                                    let episode = episode.clone();
                                    move |_| player.play(episode.clone())
                                },
                                Icon {
                                    name: "play".to_string(),
                                    class: "episode-play-icon".to_string(),
                                }
                            }
                        }

                        header { class: "episode-header",
                            h1 { "{episode.title}" }
                            span { "{episode.members}" }
                            span { "{episode.published_at}" }
                            span { "{episode.duration_as_string}" }
                        }

                        div {
                            class: "episode-description",
                            dangerous_inner_html: "{episode.description}",
                        }
                    },
                }
            }
        }
    }
}
