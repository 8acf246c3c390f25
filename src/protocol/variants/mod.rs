//! Per-packet field layouts, grouped by what the packets are about.

pub mod entity;
pub mod player;
pub mod session;
pub mod world;

pub use entity::*;
pub use player::*;
pub use session::*;
pub use world::*;
