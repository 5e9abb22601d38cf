//! Defines the shared application view routes.

use dioxus::prelude::*;

use crate::components::views::{EpisodeView, HomeView};
use crate::components::AppShell;

#[derive(Routable, Clone, PartialEq)]
pub enum AppView {
    #[layout(AppShell)]
    #[route("/")]
    HomeView {},
    #[route("/episodes/:id")]
    EpisodeView { id: String },
}
