use crate::api::PodcastClient;
use crate::components::{AppView, Icon};
use crate::player::PlayerState;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

const HOME_EPISODE_FETCH_LIMIT: u32 = 12;
const HOME_LATEST_SECTION_COUNT: usize = 2;

#[component]
pub fn HomeView() -> Element {
    let player = use_context::<PlayerState>();

    let episodes = use_resource(move || async move {
        PodcastClient::new()
            .get_episodes(HOME_EPISODE_FETCH_LIMIT)
            .await
            .map_err(|message| {
                warn!("failed to load episodes: {message}");
                message
            })
    });

    rsx! {
        div { class: "home-page",
            {
                match episodes() {
                    None => rsx! {
                        p { class: "page-status", "Loading episodes..." }
                    },
                    Some(Err(message)) => rsx! {
                        p { class: "page-status page-status-error", "Could not load episodes: {message}" }
                    },
                    Some(Ok(episode_list)) => {
                        let full_list = episode_list.clone();
                        rsx! {
                            section { class: "latest-episodes",
                                h2 { "Latest releases" }
                                ul {
                                    for (index , episode) in episode_list
                                        .iter()
                                        .take(HOME_LATEST_SECTION_COUNT)
                                        .enumerate()
                                    {
                                        li { key: "{episode.id}",
                                            img { src: "{episode.thumbnail}", alt: "{episode.title}" }
                                            div { class: "episode-details",
                                                Link {
                                                    to: AppView::EpisodeView {
                                                        id: episode.id.clone(),
                                                    },
                                                    "{episode.title}"
                                                }
                                                p { "{episode.members}" }
                                                span { "{episode.published_at}" }
                                                span { "{episode.duration_as_string}" }
                                            }
                                            button {
                                                r#type: "button",
                                                class: "episode-play-button",
                                                onclick: {
                                                    let list = full_list.clone();
                                                    move |_| player.play_list(list.clone(), index)
                                                },
                                                Icon {
                                                    name: "play".to_string(),
                                                    class: "episode-play-icon".to_string(),
                                                }
                                            }
                                        }
                                    }
                                }
                            }

                            section { class: "all-episodes",
                                h2 { "All episodes" }
                                table {
                                    thead {
                                        tr {
                                            th {}
                                            th { "Podcast" }
                                            th { "Members" }
                                            th { "Date" }
                                            th { "Duration" }
                                            th {}
                                        }
                                    }
                                    tbody {
                                        for (index , episode) in episode_list
                                            .iter()
                                            .enumerate()
                                            .skip(HOME_LATEST_SECTION_COUNT)
                                        {
                                            tr { key: "{episode.id}",
                                                td { class: "episode-thumbnail-cell",
                                                    img { src: "{episode.thumbnail}", alt: "{episode.title}" }
                                                }
                                                td {
                                                    Link {
                                                        to: AppView::EpisodeView {
                                                            id: episode.id.clone(),
                                                        },
                                                        "{episode.title}"
                                                    }
                                                }
                                                td { "{episode.members}" }
                                                td { class: "episode-date-cell", "{episode.published_at}" }
                                                td { "{episode.duration_as_string}" }
                                                td {
                                                    button {
                                                        r#type: "button",
                                                        class: "episode-play-button",
                                                        onclick: {
                                                            let list = full_list.clone();
                                                            move |_| player.play_list(list.clone(), index)
                                                        },
                                                        Icon {
                                                            name: "play".to_string(),
                                                            class: "episode-play-icon".to_string(),
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
