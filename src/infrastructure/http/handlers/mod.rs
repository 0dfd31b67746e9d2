//! HTTP Handlers

mod ping;
mod posts;
mod users;

pub use ping::*;
pub use posts::*;
pub use users::*;
