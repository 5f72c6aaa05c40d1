#![warn(clippy::pedantic)]
#![allow(clippy::missing_panics_doc, clippy::missing_errors_doc)]

pub mod game;
pub mod store;

pub use game::Game;
pub use store::{Codec, DirStore, Json, MemoryStore, Ron, Storage, Store};
