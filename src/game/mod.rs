pub mod demand;
pub use demand::*;

pub mod game;
pub use game::*;

pub mod profile;
pub use profile::*;

pub mod quality;
pub use quality::*;
