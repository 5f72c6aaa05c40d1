pub mod board;
pub mod player;
pub mod status;

pub use board::*;
pub use player::*;
pub use status::*;
