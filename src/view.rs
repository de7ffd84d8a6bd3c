use std::io;

use termion::color::{self, Bg, Fg, Rgb};

use crate::{pos, CellState, World};

pub use canvas::Canvas;
mod canvas;

const BACKGROUND: Rgb = Rgb(0x22, 0x22, 0x22);
const PLACEHOLDER: &str = " 0 ";

fn foreground(state: CellState) -> Rgb {
    match state {
        CellState::Alive => Rgb(0xba, 0xda, 0x55),
        CellState::Dead => Rgb(0xff, 0x00, 0x00),
        CellState::Empty => Rgb(0xee, 0xee, 0xee),
        CellState::Occupied => Rgb(0x77, 0x77, 0x77),
    }
}

/// the color tag preceding a cell of the given state.
pub fn tag(state: CellState) -> String {
    format!("{}{}", Bg(BACKGROUND), Fg(foreground(state)))
}

/// One line per row, one colored placeholder per cell.
pub fn render<W>(world: &W) -> Vec<String>
where
    W: World,
{
    (0..world.height())
        .map(|y| {
            let mut line = String::new();
            for x in 0..world.width() {
                if let Some(cell) = world.get(pos!(x as i32, y as i32)) {
                    line += &tag(cell.state);
                    line += PLACEHOLDER;
                }
            }
            line += &format!("{}{}", Bg(color::Reset), Fg(color::Reset));
            line
        })
        .collect()
}

pub fn display<W>(world: &W) -> io::Result<()>
where
    W: World,
{
    Canvas::new(render(world)).display()
}
