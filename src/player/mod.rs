//! The player core: playlist state, the shared store, and the audio
//! controller that binds it to the playback device.

mod controller;
mod state;
mod store;

pub use controller::*;
pub use state::*;
pub use store::*;
