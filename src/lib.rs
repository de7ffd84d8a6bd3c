pub use utils::Pos;
mod utils;

pub use error::{Error, Result};
mod error;

pub use rules::{RuleOverride, RuleSet};
pub mod rules;

pub use world::{Cell, CellState, Grid, StateInput, World};
pub mod world;

pub use sim::{compute_next_state, predict_single_cell, Sim, Step};
mod sim;

pub mod view;
