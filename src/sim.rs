use std::{collections::VecDeque, hash::Hasher};

use metrohash::MetroHash64;

use crate::{
    error::{Error, Result},
    utils, CellState, Grid, Pos, RuleSet, World,
};

/// The state `pos` moves to in the next generation, read from the current one.
pub fn predict_single_cell<W>(pos: Pos, world: &W, rules: &RuleSet) -> Result<CellState>
where
    W: World,
{
    let cell = world.get(pos).ok_or(Error::OutOfBounds {
        pos,
        width: world.width(),
        height: world.height(),
    })?;
    let alive = world
        .neighbors(pos, rules.adjacent, rules.wrapping_field)
        .into_iter()
        .filter(|neighbor| neighbor.state.is_alive())
        .count() as u32;
    let dying = if rules.instant_death {
        CellState::Empty
    } else {
        CellState::Dead
    };

    let next = match cell.state {
        CellState::Alive if alive < rules.lonely_amount => dying,
        CellState::Alive if alive <= rules.favorable_amount => CellState::Alive,
        CellState::Alive if alive > rules.overcrowded_amount => dying,
        CellState::Empty if alive == rules.favorable_amount => CellState::Alive,
        CellState::Dead if cell.turns_same < rules.turns_decompose => CellState::Dead,
        CellState::Dead => CellState::Empty,
        state => state,
    };
    Ok(next)
}

/// Next states of every cell in row-major order; `world` is left untouched.
pub fn compute_next_state<W>(world: &W, rules: &RuleSet) -> Vec<CellState>
where
    W: World,
{
    utils::row_major(world.width(), world.height())
        .filter_map(|pos| predict_single_cell(pos, world, rules).ok())
        .collect()
}

const HISTORY_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Advanced,
    /// the grid came back to how it was `period` generations ago.
    Repeating { period: usize },
}

/// Drives a grid generation by generation and spots when it starts repeating.
#[derive(Debug)]
pub struct Sim {
    grid: Grid,
    generation: u64,
    history: VecDeque<u64>,
}

impl Sim {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
            history: VecDeque::with_capacity(HISTORY_LEN),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn step(&mut self) -> Result<Step> {
        let rules = self.grid.rules().ok_or(Error::RulesNotSet)?;
        if self.history.is_empty() {
            self.history.push_front(fingerprint(&self.grid, &rules));
        }

        let next = compute_next_state(&self.grid, &rules);
        self.grid.set_state(next);
        self.generation += 1;
        log::debug!("generation {}: {:?}", self.generation, self.grid);

        let print = fingerprint(&self.grid, &rules);
        let step = match self.history.iter().position(|past| *past == print) {
            Some(index) => {
                let period = index + 1;
                log::info!("generation {} repeats with period {period}", self.generation);
                Step::Repeating { period }
            }
            None => Step::Advanced,
        };

        self.history.push_front(print);
        self.history.truncate(HISTORY_LEN);
        Ok(step)
    }
}

/// Hashes what the next transition depends on: the states, and how long dead
/// cells have been dead as far as `turns_decompose` can tell.
fn fingerprint(grid: &Grid, rules: &RuleSet) -> u64 {
    let mut hasher = MetroHash64::default();
    for cell in grid.cells() {
        hasher.write_u8(cell.state.code() as u8);
        if cell.state == CellState::Dead {
            hasher.write_u32(cell.turns_same.min(rules.turns_decompose));
        }
    }
    hasher.finish()
}
