//! HTTP Handlers

mod items;
mod lists;
mod ping;

pub use items::*;
pub use lists::*;
pub use ping::*;
