//! Game module - world state and the director driving the night

mod state;

pub use state::{Game, WorldState};
