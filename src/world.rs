use crate::{pos, utils, Pos};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    Dead,
    Alive,
    #[default]
    Empty,
    Occupied,
}

impl CellState {
    pub const CYCLE: [CellState; 4] = [Self::Dead, Self::Alive, Self::Empty, Self::Occupied];

    /// decodes one letter of the compact state format.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'd' => Some(Self::Dead),
            'a' => Some(Self::Alive),
            'e' => Some(Self::Empty),
            'o' => Some(Self::Occupied),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Self::Dead => 'd',
            Self::Alive => 'a',
            Self::Empty => 'e',
            Self::Occupied => 'o',
        }
    }

    /// the state following this one in [`CellState::CYCLE`].
    pub fn next(self) -> Self {
        let index = Self::CYCLE.iter().position(|s| *s == self).unwrap_or(0);
        Self::CYCLE[(index + 1) % Self::CYCLE.len()]
    }

    pub fn is_alive(self) -> bool {
        self == Self::Alive
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub pos: Pos,
    pub state: CellState,
    /// generations this cell has kept its state, current one included.
    pub turns_same: u32,
}

impl Cell {
    pub fn new(pos: Pos) -> Self {
        Self {
            pos,
            state: CellState::Empty,
            turns_same: 0,
        }
    }
}

/// A whole-grid state, either as letter codes or as explicit states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateInput {
    Codes(String),
    States(Vec<CellState>),
}

impl StateInput {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Codes(codes) => codes.is_empty(),
            Self::States(states) => states.is_empty(),
        }
    }

    /// resolves the input to per-cell states; unknown letters come out as `None`.
    pub fn into_states(self) -> Vec<Option<CellState>> {
        match self {
            Self::Codes(codes) => codes.chars().map(CellState::from_code).collect(),
            Self::States(states) => states.into_iter().map(Some).collect(),
        }
    }
}

impl From<&str> for StateInput {
    fn from(codes: &str) -> Self {
        Self::Codes(codes.to_string())
    }
}

impl From<String> for StateInput {
    fn from(codes: String) -> Self {
        Self::Codes(codes)
    }
}

impl From<Vec<CellState>> for StateInput {
    fn from(states: Vec<CellState>) -> Self {
        Self::States(states)
    }
}

impl From<&[CellState]> for StateInput {
    fn from(states: &[CellState]) -> Self {
        Self::States(states.to_vec())
    }
}

const STRAIGHT_DIRECTIONS: [Pos; 4] = [pos!(-1, 0), pos!(1, 0), pos!(0, -1), pos!(0, 1)];
const DIAGONAL_DIRECTIONS: [Pos; 4] = [pos!(-1, -1), pos!(-1, 1), pos!(1, -1), pos!(1, 1)];

pub trait World {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn get(&self, pos: Pos) -> Option<&Cell>;

    fn states(&self) -> Vec<CellState> {
        utils::row_major(self.width(), self.height())
            .filter_map(|pos| self.get(pos).map(|cell| cell.state))
            .collect()
    }

    /// Cells around `pos`, orthogonal ones first, then diagonal ones when `adjacent`.
    ///
    /// With `wrapping` a coordinate one step past an edge is taken from the
    /// opposite edge, otherwise cells outside the world are left out.
    fn neighbors(&self, pos: Pos, adjacent: bool, wrapping: bool) -> Vec<&Cell> {
        let diagonals: &[Pos] = if adjacent { &DIAGONAL_DIRECTIONS } else { &[] };
        let (width, height) = (self.width() as i32, self.height() as i32);
        STRAIGHT_DIRECTIONS
            .iter()
            .chain(diagonals)
            .map(|shift| pos + *shift)
            .map(|p| {
                if wrapping {
                    pos!(utils::cycle(p.x, width), utils::cycle(p.y, height))
                } else {
                    p
                }
            })
            .filter_map(|p| self.get(p))
            .collect()
    }
}

pub use grid::Grid;
mod grid;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for state in CellState::CYCLE {
            assert_eq!(CellState::from_code(state.code()), Some(state));
        }
        assert_eq!(CellState::from_code('x'), None);
    }

    #[test]
    fn cycle_order() {
        assert_eq!(CellState::Dead.next(), CellState::Alive);
        assert_eq!(CellState::Alive.next(), CellState::Empty);
        assert_eq!(CellState::Empty.next(), CellState::Occupied);
        assert_eq!(CellState::Occupied.next(), CellState::Dead);
    }

    #[test]
    fn unknown_codes_resolve_to_none() {
        let states = StateInput::from("az").into_states();
        assert_eq!(states, vec![Some(CellState::Alive), None]);
    }
}
