mod correction;
mod game;

pub mod filters;

pub use correction::*;
pub use game::*;
