use std::fmt;

use crate::{
    error::{Error, Result},
    utils, Cell, CellState, Pos, RuleOverride, RuleSet, StateInput, World,
};

type Observer = Box<dyn FnMut()>;

/// A fixed-size, row-major grid of cells and the rules it evolves under.
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    rules: Option<RuleSet>,
    observers: Vec<Observer>,
}

impl Grid {
    pub fn new(width: usize, height: usize, initial: Option<StateInput>) -> Result<Self> {
        if width == 0 || height == 0 || width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(Error::InvalidDimensions { width, height });
        }
        let cells = utils::row_major(width, height).map(Cell::new).collect();
        let mut grid = Self {
            width,
            height,
            cells,
            rules: None,
            observers: vec![],
        };
        if let Some(initial) = initial {
            grid.set_state(initial);
        }
        Ok(grid)
    }

    fn index(&self, Pos { x, y }: Pos) -> Option<usize> {
        let in_bounds = (0..self.width as i32).contains(&x) && (0..self.height as i32).contains(&y);
        in_bounds.then(|| y as usize * self.width + x as usize)
    }

    fn out_of_bounds(&self, pos: Pos) -> Error {
        Error::OutOfBounds {
            pos,
            width: self.width,
            height: self.height,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Loads a whole generation at once.
    ///
    /// Missing trailing entries become `Empty`, extra ones are ignored and so
    /// are unknown letter codes. Every cell's `turns_same` restarts at 1 when
    /// its state changes and grows by one otherwise. An empty input is ignored.
    pub fn set_state(&mut self, input: impl Into<StateInput>) -> &mut Self {
        let input = input.into();
        if input.is_empty() {
            return self;
        }
        let mut states = input.into_states().into_iter();
        for (index, cell) in self.cells.iter_mut().enumerate() {
            let state = match states.next() {
                Some(Some(state)) => state,
                Some(None) => {
                    log::warn!("unrecognized state code for cell {index}, using empty");
                    CellState::Empty
                }
                None => CellState::Empty,
            };
            if state != cell.state {
                cell.turns_same = 0;
            }
            cell.state = state;
            cell.turns_same += 1;
        }
        self.notify();
        self
    }

    /// Changes one cell's state, leaving its `turns_same` untouched.
    pub fn set_cell_state(&mut self, pos: Pos, state: CellState) -> Result<&mut Self> {
        let index = self.index(pos).ok_or_else(|| self.out_of_bounds(pos))?;
        self.cells[index].state = state;
        self.notify();
        Ok(self)
    }

    pub fn cycle_cell_state(&mut self, pos: Pos) -> Result<&mut Self> {
        let current = self.get(pos).ok_or_else(|| self.out_of_bounds(pos))?.state;
        self.set_cell_state(pos, current.next())
    }

    /// Replaces the active rules with the defaults merged with `over`.
    pub fn set_rules(&mut self, over: &RuleOverride) -> &mut Self {
        let rules = RuleSet::default().merge(over);
        log::debug!("rules set to {rules:?}");
        self.rules = Some(rules);
        self.notify();
        self
    }

    pub fn rules(&self) -> Option<RuleSet> {
        self.rules
    }

    /// Registers a callback run after every change to cells or rules.
    pub fn subscribe(&mut self, observer: impl FnMut() + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn notify(&mut self) {
        for observer in self.observers.iter_mut() {
            observer();
        }
    }
}

impl World for Grid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn get(&self, pos: Pos) -> Option<&Cell> {
        self.index(pos).map(|index| &self.cells[index])
    }

    fn states(&self) -> Vec<CellState> {
        self.cells.iter().map(|cell| cell.state).collect()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: String = self.cells.iter().map(|cell| cell.state.code()).collect();
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("cells", &codes)
            .field("rules", &self.rules)
            .field("observers", &self.observers.len())
            .finish()
    }
}
