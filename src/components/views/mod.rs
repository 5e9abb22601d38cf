mod episode;
mod home;

pub use episode::*;
pub use home::*;
