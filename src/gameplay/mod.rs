pub mod deal;
pub use deal::*;

pub mod game;
pub use game::*;

#[cfg(feature = "cli")]
pub mod human;
#[cfg(feature = "cli")]
pub use human::*;

pub mod player;
pub use player::*;
